// src/command/submission.rs

use std::sync::Arc;
use std::thread;

use log::{error, info};

use crate::activity_log;
use crate::analysis::{self, AnalysisClient, AnalysisError, AnalysisOutcome};
use crate::command_state::{loaded_csv_content, lock_answers, lock_submission};
use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use crate::types::{AppState, SubmissionKind, SubmissionState};

/// Submit the questionnaire answers. Returns once the worker is
/// dispatched; the outcome lands in `AppState::submission`.
pub fn submit_responses(state: &Arc<AppState>, ctx: &AppCtx) -> AppResult<()> {
    let snapshot = lock_answers(state)?.snapshot();
    let body = analysis::responses_body(&snapshot);
    let analyze_url = ctx.analyze_url.clone();

    submit_with_transport(state, SubmissionKind::Responses, move || {
        AnalysisClient::new(&analyze_url)?.analyze(&body)
    })
}

/// Submit the loaded CSV file text. Fails synchronously when nothing is
/// loaded; the transport is never touched in that case.
pub fn submit_csv(state: &Arc<AppState>, ctx: &AppCtx) -> AppResult<()> {
    let csv_text = match loaded_csv_content(state) {
        Ok(text) => text,
        Err(e) => {
            activity_log::record_submission_rejected(state, SubmissionKind::Csv, &e.to_string());
            return Err(e);
        }
    };

    let body = analysis::csv_body(&csv_text);
    let analyze_url = ctx.analyze_url.clone();

    submit_with_transport(state, SubmissionKind::Csv, move || {
        AnalysisClient::new(&analyze_url)?.analyze(&body)
    })
}

/// Shared begin/worker/finish path with the transport injected; the public
/// entry points pass the real client call. Results are wiped and `loading`
/// raised before dispatch; the outcome is written and `loading` dropped on
/// every completion path.
pub fn submit_with_transport<F>(
    state: &Arc<AppState>,
    kind: SubmissionKind,
    transport: F,
) -> AppResult<()>
where
    F: FnOnce() -> Result<AnalysisOutcome, AnalysisError> + Send + 'static,
{
    begin_submission(state, kind)?;

    let state = Arc::clone(state);
    thread::spawn(move || {
        let outcome = transport();
        finish_submission(&state, kind, outcome);
    });

    Ok(())
}

pub fn clear_submission_error(state: &AppState) -> AppResult<()> {
    lock_submission(state)?.error = None;
    Ok(())
}

/// Submission copy for one frame of rendering.
pub fn submission_view(state: &AppState) -> AppResult<SubmissionState> {
    Ok(lock_submission(state)?.clone())
}

/// Under the submission lock: reject re-entry, wipe previous results,
/// raise the loading flag.
fn begin_submission(state: &AppState, kind: SubmissionKind) -> AppResult<()> {
    {
        let mut submission = lock_submission(state)?;
        if submission.loading {
            drop(submission);
            activity_log::record_submission_rejected(
                state,
                kind,
                &AppError::SubmissionInFlight.to_string(),
            );
            return Err(AppError::SubmissionInFlight);
        }

        submission.clear_results();
        submission.loading = true;
    }

    info!("submission started: {}", kind.as_str());
    activity_log::record_submission_started(state, kind);
    Ok(())
}

fn finish_submission(
    state: &AppState,
    kind: SubmissionKind,
    outcome: Result<AnalysisOutcome, AnalysisError>,
) {
    {
        // loading must drop on every completion path, poisoned lock included
        let mut submission = match state.submission.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };

        match &outcome {
            Ok(out) => {
                submission.mistral_analysis = out.mistral_analysis.clone();
                submission.gemma_judgment = out.gemma_judgment.clone();
                submission.risk_analysis = out.risk_analysis.clone();
                submission.result = out.result.clone();
            }
            Err(e) => {
                submission.error = Some(e.clone());
            }
        }

        submission.loading = false;
    }

    match outcome {
        Ok(out) => {
            let fields = [
                &out.mistral_analysis,
                &out.gemma_judgment,
                &out.risk_analysis,
                &out.result,
            ]
            .iter()
            .filter(|f| f.is_some())
            .count();

            info!("submission finished: {} ({fields} field(s))", kind.as_str());
            activity_log::record_submission_success(state, kind, fields);
        }
        Err(e) => {
            error!("submission failed: {} ({e})", kind.as_str());
            activity_log::record_submission_failure(state, kind, &e);
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================
