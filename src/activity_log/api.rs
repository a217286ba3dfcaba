// src/activity_log/api.rs

use crate::analysis::AnalysisError;
use crate::types::{AppState, SubmissionKind};

use super::model::ActivityEventClass;

// Recording swallows lock failures: a log that cannot be reached must
// never fail the operation being logged.
fn record(state: &AppState, class: ActivityEventClass, kind: &str, context: &str, msg: &str) {
    let mut alog = match state.activity_log.lock() {
        Ok(g) => g,
        Err(_) => return,
    };

    alog.record(class, kind, context, msg);
}

fn submission_context(kind: SubmissionKind) -> &'static str {
    match kind {
        SubmissionKind::Responses => "questionnaire",
        SubmissionKind::Csv => "csv_upload",
    }
}

pub fn record_app_start(state: &AppState) {
    record(
        state,
        ActivityEventClass::Session,
        "app_start",
        "startup",
        "",
    );
}

pub fn record_submission_started(state: &AppState, kind: SubmissionKind) {
    record(
        state,
        ActivityEventClass::Submission,
        "submit_start",
        submission_context(kind),
        &format!("{} request dispatched", kind.as_str()),
    );
}

pub fn record_submission_success(state: &AppState, kind: SubmissionKind, fields: usize) {
    record(
        state,
        ActivityEventClass::Submission,
        "submit_success",
        submission_context(kind),
        &format!("{fields} field(s) returned"),
    );
}

pub fn record_submission_failure(state: &AppState, kind: SubmissionKind, err: &AnalysisError) {
    let event_kind = match err {
        AnalysisError::ClientInit(_) => "submit_client_init_failure",
        AnalysisError::Transport(_) => "submit_transport_failure",
        AnalysisError::Decode(_) => "submit_decode_failure",
    };

    record(
        state,
        ActivityEventClass::Submission,
        event_kind,
        submission_context(kind),
        &err.to_string(),
    );
}

pub fn record_submission_rejected(state: &AppState, kind: SubmissionKind, why: &str) {
    record(
        state,
        ActivityEventClass::Submission,
        "submit_rejected",
        submission_context(kind),
        why,
    );
}

pub fn record_csv_loaded(state: &AppState, file_name: &str, bytes: usize) {
    record(
        state,
        ActivityEventClass::FileLoad,
        "csv_load_success",
        "csv_upload",
        &format!("{file_name} ({bytes} bytes)"),
    );
}

pub fn record_csv_load_failed(state: &AppState, file_name: &str, why: &str) {
    record(
        state,
        ActivityEventClass::FileLoad,
        "csv_load_failure",
        "csv_upload",
        &format!("{file_name}: {why}"),
    );
}

pub fn record_csv_cleared(state: &AppState) {
    record(
        state,
        ActivityEventClass::FileLoad,
        "csv_cleared",
        "csv_upload",
        "",
    );
}
