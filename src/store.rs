// src/store.rs

use std::collections::BTreeMap;

/// Every question the built-in questionnaire can ask. The wire key is the
/// JSON field name the analyze endpoint expects for that question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionId {
    Industry,
    Headquarters,
    OperatingCountries,
    EmployeeSize,
    AnnualRevenue,
    AssessmentMotivation,
    AssessmentMotivationOther,
    HighRiskRegion,
    ThirdPartyRisk,
    SanctionsRisk,
    DataMonitoring,
    ModernSlaveryDueDiligence,
    EsgConfidence,
    CodeOfConduct,
    CodeUpdateFrequency,
    EthicsTraining,
    LeaderTraining,
}

impl QuestionId {
    pub fn wire_key(self) -> &'static str {
        use QuestionId::*;
        match self {
            Industry => "industry",
            Headquarters => "headquarters",
            OperatingCountries => "operatingCountries",
            EmployeeSize => "employeeSize",
            AnnualRevenue => "annualRevenue",
            AssessmentMotivation => "assessmentMotivation",
            AssessmentMotivationOther => "assessmentMotivationOther",
            HighRiskRegion => "highRiskRegion",
            ThirdPartyRisk => "thirdPartyRisk",
            SanctionsRisk => "sanctionsRisk",
            DataMonitoring => "dataMonitoring",
            ModernSlaveryDueDiligence => "modernSlaveryDueDiligence",
            EsgConfidence => "esgConfidence",
            CodeOfConduct => "codeOfConduct",
            CodeUpdateFrequency => "codeUpdateFrequency",
            EthicsTraining => "ethicsTraining",
            LeaderTraining => "leaderTraining",
        }
    }
}

/// One stored answer. On the wire, `Single`/`Text` become a JSON string,
/// `Multi` an array of strings, `Scale` a JSON number; the submission
/// client owns that conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
    Scale(i64),
    Text(String),
}

/// In-memory answers for one form session. Keys are unique; a later `set`
/// fully replaces whatever was stored before. Nothing here persists or
/// validates; the store records exactly what the widgets hand it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerStore {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: QuestionId, answer: Answer) {
        self.answers.insert(id, answer);
    }

    /// Multi-select read-modify-write. `included` appends the option to the
    /// stored list (starting one if the key is absent); otherwise the first
    /// matching entry is removed. Appends are not de-duplicated, so turning
    /// the same option on twice stores it twice. A non-list value already
    /// under the key is treated as absent and replaced by a fresh list.
    pub fn toggle(&mut self, id: QuestionId, option: &str, included: bool) {
        let mut selected = match self.answers.get(&id) {
            Some(Answer::Multi(v)) => v.clone(),
            _ => Vec::new(),
        };

        if included {
            selected.push(option.to_string());
        } else if let Some(pos) = selected.iter().position(|s| s == option) {
            selected.remove(pos);
        }

        self.answers.insert(id, Answer::Multi(selected));
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    /// The current mapping by value; reading never mutates the store.
    pub fn snapshot(&self) -> BTreeMap<QuestionId, Answer> {
        self.answers.clone()
    }

    /// Explicit full clear. The store never resets itself; the caller
    /// decides when a session is over.
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn multi_contains(&self, id: QuestionId, option: &str) -> bool {
        matches!(
            self.answers.get(&id),
            Some(Answer::Multi(v)) if v.iter().any(|s| s == option)
        )
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    // ------------------------------------------------------
    // typed readers for the form binder
    // ------------------------------------------------------

    pub fn single_value(&self, id: QuestionId) -> Option<&str> {
        match self.answers.get(&id) {
            Some(Answer::Single(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn text_value(&self, id: QuestionId) -> Option<&str> {
        match self.answers.get(&id) {
            Some(Answer::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn scale_value(&self, id: QuestionId) -> Option<i64> {
        match self.answers.get(&id) {
            Some(Answer::Scale(n)) => Some(*n),
            _ => None,
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_fully_replaces_previous_answer() {
        let mut store = AnswerStore::default();

        store.set(
            QuestionId::Industry,
            Answer::Multi(vec!["Finance".into(), "Healthcare".into()]),
        );
        store.set(QuestionId::Industry, Answer::Single("Technology".into()));

        match store.get(QuestionId::Industry) {
            Some(Answer::Single(s)) => assert_eq!(s, "Technology"),
            other => panic!("expected Single, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_on_absent_key_starts_a_list() {
        let mut store = AnswerStore::default();

        store.toggle(QuestionId::OperatingCountries, "Canada", true);

        match store.get(QuestionId::OperatingCountries) {
            Some(Answer::Multi(v)) => assert_eq!(v, &vec!["Canada".to_string()]),
            other => panic!("expected Multi, got {:?}", other),
        }
    }

    #[test]
    fn toggle_off_then_on_fresh_key_leaves_empty_list() {
        let mut store = AnswerStore::default();

        store.toggle(QuestionId::OperatingCountries, "Canada", true);
        store.toggle(QuestionId::OperatingCountries, "Canada", false);

        match store.get(QuestionId::OperatingCountries) {
            Some(Answer::Multi(v)) => assert!(v.is_empty()),
            other => panic!("expected empty Multi, got {:?}", other),
        }
    }

    #[test]
    fn toggle_does_not_deduplicate_appends() {
        let mut store = AnswerStore::default();

        store.toggle(QuestionId::OperatingCountries, "India", true);
        store.toggle(QuestionId::OperatingCountries, "India", true);

        match store.get(QuestionId::OperatingCountries) {
            Some(Answer::Multi(v)) => {
                assert_eq!(v, &vec!["India".to_string(), "India".to_string()])
            }
            other => panic!("expected Multi, got {:?}", other),
        }
    }

    #[test]
    fn toggle_off_removes_first_match_only() {
        let mut store = AnswerStore::default();

        store.toggle(QuestionId::OperatingCountries, "India", true);
        store.toggle(QuestionId::OperatingCountries, "China", true);
        store.toggle(QuestionId::OperatingCountries, "India", true);
        store.toggle(QuestionId::OperatingCountries, "India", false);

        match store.get(QuestionId::OperatingCountries) {
            Some(Answer::Multi(v)) => {
                assert_eq!(v, &vec!["China".to_string(), "India".to_string()])
            }
            other => panic!("expected Multi, got {:?}", other),
        }
    }

    #[test]
    fn toggle_replaces_non_list_value() {
        let mut store = AnswerStore::default();

        store.set(
            QuestionId::AssessmentMotivation,
            Answer::Single("oops".into()),
        );
        store.toggle(QuestionId::AssessmentMotivation, "Other", true);

        match store.get(QuestionId::AssessmentMotivation) {
            Some(Answer::Multi(v)) => assert_eq!(v, &vec!["Other".to_string()]),
            other => panic!("expected Multi, got {:?}", other),
        }
    }

    #[test]
    fn snapshot_is_detached_from_the_store() {
        let mut store = AnswerStore::default();
        store.set(QuestionId::EsgConfidence, Answer::Scale(4));

        let mut snap = store.snapshot();
        snap.insert(QuestionId::Industry, Answer::Single("Finance".into()));

        assert_eq!(store.len(), 1);
        assert!(store.get(QuestionId::Industry).is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = AnswerStore::default();
        store.set(QuestionId::Industry, Answer::Single("Finance".into()));
        store.toggle(QuestionId::OperatingCountries, "Canada", true);

        store.reset();

        assert!(store.is_empty());
    }

    #[test]
    fn multi_contains_reads_without_mutating() {
        let mut store = AnswerStore::default();
        store.toggle(QuestionId::AssessmentMotivation, "Other", true);

        assert!(store.multi_contains(QuestionId::AssessmentMotivation, "Other"));
        assert!(!store.multi_contains(QuestionId::AssessmentMotivation, "Board"));
        assert!(!store.multi_contains(QuestionId::Industry, "Other"));
        assert_eq!(store.len(), 1);
    }
}
