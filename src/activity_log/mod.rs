// src/activity_log/mod.rs

mod api;
mod model;
mod store;

pub use api::{
    record_app_start, record_csv_cleared, record_csv_load_failed, record_csv_loaded,
    record_submission_failure, record_submission_rejected, record_submission_started,
    record_submission_success,
};

pub use model::{ActivityEvent, ActivityEventClass};

pub use store::ActivityLog;
