// src/command/csv_file.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use log::{error, info};

use crate::activity_log;
use crate::command_state::lock_csv_file;
use crate::error::{AppError, AppResult};
use crate::types::{AppState, CsvFileState};

/// Start reading `path` on a worker thread. The file shows as loading
/// until the worker stores either its text or a failure. Loading a new
/// file replaces whatever was loaded before.
pub fn load_csv_file(state: &Arc<AppState>, path: &Path) -> AppResult<()> {
    if !path.is_file() {
        return Err(AppError::CsvPathNotFile);
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    {
        let mut csv = lock_csv_file(state)?;
        csv.loading = true;
        csv.file_name = Some(file_name.clone());
        csv.content = None;
        csv.error = None;
    }

    let state = Arc::clone(state);
    let path: PathBuf = path.to_path_buf();
    thread::spawn(move || {
        let read = read_csv_text(&path);
        finish_csv_load(&state, &file_name, read);
    });

    Ok(())
}

pub fn clear_csv_file(state: &AppState) -> AppResult<()> {
    lock_csv_file(state)?.clear();
    activity_log::record_csv_cleared(state);
    Ok(())
}

/// File copy for one frame of rendering.
pub fn csv_view(state: &AppState) -> AppResult<CsvFileState> {
    Ok(lock_csv_file(state)?.clone())
}

fn read_csv_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path).map_err(|e| AppError::CsvReadFailed(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::CsvNotUtf8(e.to_string()))
}

fn finish_csv_load(state: &AppState, file_name: &str, read: Result<String, AppError>) {
    {
        // loading must drop on every completion path, poisoned lock included
        let mut csv = match state.csv_file.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };

        match &read {
            Ok(text) => {
                csv.content = Some(text.clone());
                csv.error = None;
            }
            Err(e) => {
                csv.content = None;
                csv.error = Some(e.to_string());
            }
        }

        csv.loading = false;
    }

    match read {
        Ok(text) => {
            info!("csv loaded: {file_name} ({} bytes)", text.len());
            activity_log::record_csv_loaded(state, file_name, text.len());
        }
        Err(e) => {
            error!("csv load failed: {file_name} ({e})");
            activity_log::record_csv_load_failed(state, file_name, &e.to_string());
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================
