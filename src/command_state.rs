// src/command_state.rs

use crate::{
    error::{AppError, AppResult},
    store::AnswerStore,
    types::{AppState, CsvFileState, SubmissionState},
};
use std::sync::MutexGuard;

// ======================================================
// locking helpers
// ======================================================

pub fn lock_answers<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, AnswerStore>> {
    state
        .answers
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_submission<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, SubmissionState>> {
    state
        .submission
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_csv_file<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, CsvFileState>> {
    state
        .csv_file
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_activity_log<'a>(
    state: &'a AppState,
) -> AppResult<MutexGuard<'a, crate::activity_log::ActivityLog>> {
    state
        .activity_log
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

// ======================================================
// csv access helpers
// ======================================================

/// Full text of the loaded CSV file. An absent or empty file counts as
/// "nothing loaded" and rejects before any transport work starts.
pub fn loaded_csv_content(state: &AppState) -> AppResult<String> {
    let guard = lock_csv_file(state)?;
    match guard.content.as_deref() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::NoCsvFileLoaded),
    }
}

// ======================================================
// Unit Tests
// ======================================================
