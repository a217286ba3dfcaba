// src/types.rs

use std::sync::Mutex;

use crate::activity_log::ActivityLog;
use crate::analysis::AnalysisError;
use crate::store::AnswerStore;

/// Which request body a submission carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionKind {
    Responses,
    Csv,
}

impl SubmissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionKind::Responses => "responses",
            SubmissionKind::Csv => "csv",
        }
    }
}

/// Outcome of the most recent submission, plus the in-flight flag.
///
/// The worker thread is the only writer between dispatch and completion;
/// the UI only reads. `loading` is set under the same lock that clears the
/// result fields, so a frame can never observe a new submission with stale
/// text still present.
#[derive(Clone)]
pub struct SubmissionState {
    pub loading: bool,
    pub mistral_analysis: Option<String>,
    pub gemma_judgment: Option<String>,
    pub risk_analysis: Option<String>,
    pub result: Option<String>,
    pub error: Option<AnalysisError>,
}

impl SubmissionState {
    /// Dispatch-time wipe: every result field and any prior error.
    pub fn clear_results(&mut self) {
        self.mistral_analysis = None;
        self.gemma_judgment = None;
        self.risk_analysis = None;
        self.result = None;
        self.error = None;
    }

    pub fn any_result(&self) -> bool {
        self.mistral_analysis.is_some()
            || self.gemma_judgment.is_some()
            || self.risk_analysis.is_some()
            || self.result.is_some()
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            loading: false,
            mistral_analysis: None,
            gemma_judgment: None,
            risk_analysis: None,
            result: None,
            error: None,
        }
    }
}

/// Loaded CSV file awaiting submission. `content` is the full file text;
/// a failed load leaves `content` empty and the cause in `error`.
#[derive(Clone, Default)]
pub struct CsvFileState {
    pub loading: bool,
    pub file_name: Option<String>,
    pub content: Option<String>,
    pub error: Option<String>,
}

impl CsvFileState {
    pub fn clear(&mut self) {
        self.loading = false;
        self.file_name = None;
        self.content = None;
        self.error = None;
    }
}

pub struct AppState {
    pub answers: Mutex<AnswerStore>,
    pub submission: Mutex<SubmissionState>,
    pub csv_file: Mutex<CsvFileState>,

    // persistent + in-memory activity event log
    pub activity_log: Mutex<ActivityLog>,
}
