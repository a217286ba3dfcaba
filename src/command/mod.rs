// src/command/mod.rs

pub mod answers;
pub mod csv_file;
pub mod submission;

// --- Public façade ---

pub use answers::{answers_view, clear_answers, set_answer, toggle_multi_answer};
pub use csv_file::{clear_csv_file, csv_view, load_csv_file};
pub use submission::{
    clear_submission_error, submission_view, submit_csv, submit_responses, submit_with_transport,
};
