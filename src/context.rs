// src/context.rs

use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "org";
pub const APP_ORG: &str = "periculum";
pub const APP_ID: &str = "periculum-risk-assessor";

pub const DEFAULT_ANALYZE_URL: &str = "http://127.0.0.1:5000/analyze";

#[derive(Debug)]
pub struct AppCtx {
    pub app_data_dir: PathBuf,
    pub analyze_url: String,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let analyze_url = std::env::var("PERICULUM_ANALYZE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ANALYZE_URL.to_string());

        Self::with_analyze_url(app_data_dir, analyze_url)
    }

    /// Fixed-endpoint constructor; tests point this at a loopback listener.
    pub fn with_analyze_url(app_data_dir: PathBuf, analyze_url: String) -> Self {
        let debug_ui = std::env::var("PERICULUM_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            app_data_dir,
            analyze_url,
            debug_ui,
        }
    }
}
