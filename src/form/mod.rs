// src/form/mod.rs

pub mod registry;

pub use registry::risk_questionnaire;

use crate::store::{AnswerStore, QuestionId};

/// How a question is asked, which also fixes the answer shape it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single choice from a dropdown.
    Select,
    /// Single choice from a radio row.
    Radio,
    /// Any number of choices from a checkbox group.
    Multi,
    /// Numeric rating; the stored answer is the number itself.
    Scale { min: i64, max: i64 },
    /// Free text.
    Text,
}

/// Show a question only while another question's list answer contains a
/// literal option. Evaluated against live store state every frame; hiding
/// a question does not remove its stored answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityRule {
    MultiContains {
        question: QuestionId,
        option: &'static str,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct QuestionSpec {
    pub id: QuestionId,
    pub label: &'static str,
    pub kind: QuestionKind,

    /// Choices for Select / Radio / Multi; empty for Scale and Text.
    pub options: &'static [&'static str],

    pub visible_when: Option<VisibilityRule>,
}

impl QuestionSpec {
    pub fn is_visible(&self, store: &AnswerStore) -> bool {
        match self.visible_when {
            None => true,
            Some(VisibilityRule::MultiContains { question, option }) => {
                store.multi_contains(question, option)
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SectionSpec {
    pub title: &'static str,
    pub questions: &'static [QuestionSpec],
}

#[derive(Clone, Copy, Debug)]
pub struct FormSpec {
    pub title: &'static str,
    pub sections: &'static [SectionSpec],
}

impl FormSpec {
    pub fn questions(&self) -> impl Iterator<Item = &'static QuestionSpec> {
        let sections = self.sections;
        sections.iter().flat_map(|s| s.questions.iter())
    }
}

// ======================================================
// Unit Tests
// ======================================================
