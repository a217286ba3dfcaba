// src/lib.rs

pub mod activity_log;
pub mod analysis;
pub mod command;
pub mod command_state;
pub mod context;
pub mod error;
pub mod form;
pub mod store;
pub mod types;

use crate::activity_log::ActivityLog;
use crate::store::AnswerStore;
use crate::types::{AppState, CsvFileState, SubmissionState};
use std::path::Path;
use std::sync::Mutex;

pub fn init_state(app_data_dir: &Path) -> Result<AppState, String> {
    std::fs::create_dir_all(app_data_dir)
        .map_err(|e| format!("Failed to create app data dir: {e}"))?;

    let activity_log = ActivityLog::init(app_data_dir)?;

    Ok(AppState {
        answers: Mutex::new(AnswerStore::new()),
        submission: Mutex::new(SubmissionState::default()),
        csv_file: Mutex::new(CsvFileState::default()),

        activity_log: Mutex::new(activity_log),
    })
}

impl AppState {
    pub fn new_for_tests(app_data_dir: &std::path::Path) -> Result<Self, String> {
        crate::init_state(app_data_dir)
    }
}
