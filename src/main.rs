// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use directories::ProjectDirs;
use periculum_risk_assessor_lib::activity_log::record_app_start;
use periculum_risk_assessor_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let app_data_dir: PathBuf = if let Ok(p) = env::var("PERICULUM_DATA_DIR") {
        PathBuf::from(p)
    } else if cfg!(debug_assertions) {
        // dev-only sandbox
        let home = env::var("HOME").expect("HOME not set");
        PathBuf::from(home).join(".local/share/periculum-dev")
    } else {
        let proj = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
            .expect("Could not determine app data dir");
        proj.data_dir().to_path_buf()
    };

    std::fs::create_dir_all(&app_data_dir).expect("Could not create app data dir");

    let state =
        periculum_risk_assessor_lib::init_state(&app_data_dir).expect("failed to init app state");
    let state = Arc::new(state);

    let ctx = Arc::new(AppCtx::new(app_data_dir.clone()));

    record_app_start(state.as_ref());

    eframe::run_native(
        "Periculum Risk Assessor",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ui::UiApp::new(state.clone(), ctx.clone())))),
    )
}
