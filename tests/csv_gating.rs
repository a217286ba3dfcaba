// tests/csv_gating.rs

mod common;

use periculum_risk_assessor_lib::{analysis::AnalysisError, command, error::AppError};

use common::{setup, wait_until_csv_idle, wait_until_idle};

const CSV_TEXT: &str = "supplier,country,spend\nAcme,Germany,120000\nGlobex,India,86000\n";

#[test]
fn submit_without_loaded_file_is_rejected_synchronously() {
    let env = setup();

    let res = command::submit_csv(&env.state, env.ctx());
    match res {
        Err(AppError::NoCsvFileLoaded) => {}
        other => panic!("expected NoCsvFileLoaded, got {:?}", other),
    }

    // Rejection happens before any worker is spawned.
    let sub = command::submission_view(&env.state).unwrap();
    assert!(!sub.loading);
    assert!(sub.error.is_none());

    // The gate wording is what the upload panel shows verbatim.
    assert_eq!(
        AppError::NoCsvFileLoaded.user_msg().short,
        "Please select a CSV file first."
    );

    let events = env.state.activity_log.lock().unwrap().recent();
    assert!(events
        .iter()
        .any(|e| e.kind == "submit_rejected" && e.context == "csv_upload"));
}

#[test]
fn empty_csv_file_counts_as_nothing_loaded() {
    let env = setup();
    let td = tempfile::tempdir().unwrap();

    let path = td.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    command::load_csv_file(&env.state, &path).unwrap();
    wait_until_csv_idle(&env.state);

    let csv = command::csv_view(&env.state).unwrap();
    assert_eq!(csv.file_name.as_deref(), Some("empty.csv"));
    assert_eq!(csv.content.as_deref(), Some(""));

    // Zero bytes of content cannot be analyzed.
    let res = command::submit_csv(&env.state, env.ctx());
    match res {
        Err(AppError::NoCsvFileLoaded) => {}
        other => panic!("expected NoCsvFileLoaded, got {:?}", other),
    }
}

#[test]
fn loaded_file_passes_the_gate_and_dispatches() {
    let env = setup();
    let td = tempfile::tempdir().unwrap();

    let path = td.path().join("suppliers.csv");
    std::fs::write(&path, CSV_TEXT).unwrap();

    command::load_csv_file(&env.state, &path).unwrap();
    wait_until_csv_idle(&env.state);

    let csv = command::csv_view(&env.state).unwrap();
    assert_eq!(csv.file_name.as_deref(), Some("suppliers.csv"));
    assert_eq!(csv.content.as_deref(), Some(CSV_TEXT));
    assert!(csv.error.is_none());

    // Nothing listens on the test endpoint, so the dispatched request can
    // only fail in transport. Reaching that failure proves the gate passed.
    command::submit_csv(&env.state, env.ctx()).unwrap();
    wait_until_idle(&env.state);

    let sub = command::submission_view(&env.state).unwrap();
    match sub.error {
        Some(AnalysisError::Transport(_)) => {}
        other => panic!("expected transport error, got {:?}", other),
    }

    let events = env.state.activity_log.lock().unwrap().recent();
    assert!(events
        .iter()
        .any(|e| e.kind == "submit_start" && e.context == "csv_upload"));
    assert!(events.iter().any(|e| e.kind == "csv_load_success"));
}

#[test]
fn clearing_the_file_restores_the_gate() {
    let env = setup();
    let td = tempfile::tempdir().unwrap();

    let path = td.path().join("data.csv");
    std::fs::write(&path, CSV_TEXT).unwrap();

    command::load_csv_file(&env.state, &path).unwrap();
    wait_until_csv_idle(&env.state);
    assert!(command::csv_view(&env.state).unwrap().content.is_some());

    command::clear_csv_file(&env.state).unwrap();

    let csv = command::csv_view(&env.state).unwrap();
    assert!(csv.file_name.is_none());
    assert!(csv.content.is_none());

    let res = command::submit_csv(&env.state, env.ctx());
    match res {
        Err(AppError::NoCsvFileLoaded) => {}
        other => panic!("expected NoCsvFileLoaded, got {:?}", other),
    }

    let events = env.state.activity_log.lock().unwrap().recent();
    assert!(events.iter().any(|e| e.kind == "csv_cleared"));
}
