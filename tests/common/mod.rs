// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use periculum_risk_assessor_lib::{context::AppCtx, types::AppState};

pub struct TestEnv {
    // Keep the tempdir alive for the duration of the test.
    _td_state: tempfile::TempDir,

    pub state: Arc<AppState>,
    ctx: AppCtx,
}

impl TestEnv {
    pub fn ctx(&self) -> &AppCtx {
        &self.ctx
    }

    pub fn data_dir(&self) -> &std::path::Path {
        self._td_state.path()
    }
}

/// Fresh app state in a temp data dir, pointed at the given analyze URL.
pub fn setup_with_analyze_url(analyze_url: &str) -> TestEnv {
    let td_state = tempfile::tempdir().expect("tempdir state");

    let state = AppState::new_for_tests(td_state.path()).expect("init_state");
    let ctx = AppCtx::with_analyze_url(td_state.path().to_path_buf(), analyze_url.to_string());

    TestEnv {
        _td_state: td_state,
        state: Arc::new(state),
        ctx,
    }
}

/// Fresh app state for tests that never let a request leave the process.
pub fn setup() -> TestEnv {
    setup_with_analyze_url("http://127.0.0.1:9/analyze")
}

/// Spin until the submission worker drops `loading`, or panic after 5s.
pub fn wait_until_idle(state: &AppState) {
    wait_for(state, |s| !s.submission.lock().expect("submission lock").loading);
}

/// Spin until the file-read worker drops `loading`, or panic after 5s.
pub fn wait_until_csv_idle(state: &AppState) {
    wait_for(state, |s| !s.csv_file.lock().expect("csv lock").loading);
}

fn wait_for(state: &AppState, done: impl Fn(&AppState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(state) {
        assert!(
            Instant::now() < deadline,
            "worker did not settle within 5s"
        );
        std::thread::sleep(Duration::from_millis(5));
    }
}
