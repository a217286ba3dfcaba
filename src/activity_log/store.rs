// src/activity_log/store.rs

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::model::{
    ActivityEvent, ActivityEventClass, LOAD_TAIL_LINES, LOG_BACKUP_NAME, LOG_FILE_NAME,
    MAX_LOG_BYTES, MAX_LOG_EVENTS,
};

/// Persistent JSONL event log with an in-memory ring of recent events.
/// Recording is best-effort throughout: a log that cannot be written must
/// never fail the operation being logged.
pub struct ActivityLog {
    path: PathBuf,
    buf: VecDeque<ActivityEvent>,
    next_id: u64,
}

impl ActivityLog {
    pub fn init(app_data_dir: &Path) -> Result<Self, String> {
        let path = app_data_dir.join(LOG_FILE_NAME);
        fs::create_dir_all(app_data_dir).map_err(|e| format!("activity log dir create: {e}"))?;

        let mut log = Self {
            path,
            buf: VecDeque::with_capacity(MAX_LOG_EVENTS),
            next_id: 1,
        };

        log.load_tail_best_effort();
        log.next_id = log.compute_next_id();

        Ok(log)
    }

    pub fn record(&mut self, class: ActivityEventClass, kind: &str, context: &str, msg: &str) {
        let ev = ActivityEvent {
            id: self.alloc_id(),
            ts_ms: now_ms(),
            class,
            kind: kind.to_string(),
            context: context.to_string(),
            msg: msg.to_string(),
        };

        if self.buf.len() >= MAX_LOG_EVENTS {
            self.buf.pop_front();
        }
        self.buf.push_back(ev.clone());

        let _ = self.rotate_if_needed_best_effort();
        let _ = self.append_jsonl_best_effort(&ev);
        let _ = self.trim_log_to_n_events(MAX_LOG_EVENTS);
    }

    pub fn recent(&self) -> Vec<ActivityEvent> {
        self.buf.iter().cloned().collect()
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn compute_next_id(&self) -> u64 {
        self.buf
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    fn rotate_if_needed_best_effort(&self) -> Result<(), String> {
        let meta = match fs::metadata(&self.path) {
            Ok(m) => m,
            Err(_) => return Ok(()),
        };

        if meta.len() <= MAX_LOG_BYTES {
            return Ok(());
        }

        let backup = self.path.with_file_name(LOG_BACKUP_NAME);
        let _ = fs::remove_file(&backup);
        fs::rename(&self.path, &backup).map_err(|e| format!("activity log rotate: {e}"))?;

        Ok(())
    }

    fn append_jsonl_best_effort(&self, ev: &ActivityEvent) -> Result<(), String> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| format!("activity log open: {e}"))?;

        let line = serde_json::to_string(ev).map_err(|e| format!("activity log json: {e}"))?;
        f.write_all(line.as_bytes())
            .and_then(|_| f.write_all(b"\n"))
            .map_err(|e| format!("activity log write: {e}"))?;

        let _ = f.flush();
        Ok(())
    }

    fn trim_log_to_n_events(&self, n: usize) -> Result<(), String> {
        if n == 0 {
            return Ok(());
        }

        let Ok(file) = File::open(&self.path) else {
            return Ok(());
        };
        let reader = BufReader::new(file);

        let mut tail: VecDeque<String> = VecDeque::with_capacity(n.min(LOAD_TAIL_LINES));
        let mut exceeded = false;

        for line in reader.lines().map_while(Result::ok) {
            if tail.len() >= n {
                tail.pop_front();
                exceeded = true;
            }
            tail.push_back(line);
        }

        if !exceeded {
            return Ok(());
        }

        let tmp = self.path.with_extension("jsonl.tmp");
        {
            let mut out = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(&tmp)
                .map_err(|e| format!("activity log trim open tmp: {e}"))?;

            for line in tail {
                out.write_all(line.as_bytes())
                    .and_then(|_| out.write_all(b"\n"))
                    .map_err(|e| format!("activity log trim write tmp: {e}"))?;
            }

            let _ = out.flush();
        }

        fs::rename(&tmp, &self.path).map_err(|e| format!("activity log trim rename: {e}"))?;

        Ok(())
    }

    fn load_tail_best_effort(&mut self) {
        let Ok(file) = File::open(&self.path) else {
            return;
        };
        let reader = BufReader::new(file);

        let mut tail: VecDeque<String> = VecDeque::with_capacity(LOAD_TAIL_LINES);
        for line in reader.lines().map_while(Result::ok) {
            if tail.len() >= LOAD_TAIL_LINES {
                tail.pop_front();
            }
            tail.push_back(line);
        }

        for line in tail {
            if let Ok(ev) = serde_json::from_str::<ActivityEvent>(&line) {
                if self.buf.len() >= MAX_LOG_EVENTS {
                    self.buf.pop_front();
                }
                self.buf.push_back(ev);
            }
        }
    }
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn record_appends_one_jsonl_line_per_event() {
        let td = tempdir().expect("tempdir");
        let mut log = ActivityLog::init(td.path()).expect("init");

        log.record(
            ActivityEventClass::Submission,
            "submit_start",
            "questionnaire",
            "dispatched",
        );
        log.record(
            ActivityEventClass::Submission,
            "submit_success",
            "questionnaire",
            "2 field(s) returned",
        );

        let raw = fs::read_to_string(td.path().join(LOG_FILE_NAME)).expect("log file");
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: ActivityEvent = serde_json::from_str(lines[0]).expect("jsonl");
        assert_eq!(first.kind, "submit_start");
        assert_eq!(first.context, "questionnaire");
    }

    #[test]
    fn events_survive_a_reload() {
        let td = tempdir().expect("tempdir");

        {
            let mut log = ActivityLog::init(td.path()).expect("init");
            log.record(ActivityEventClass::Session, "app_start", "startup", "");
        }

        let log = ActivityLog::init(td.path()).expect("reinit");
        let recent = log.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].kind, "app_start");
    }

    #[test]
    fn ids_keep_climbing_across_reloads() {
        let td = tempdir().expect("tempdir");

        {
            let mut log = ActivityLog::init(td.path()).expect("init");
            log.record(ActivityEventClass::Session, "app_start", "startup", "");
            log.record(ActivityEventClass::Session, "app_start", "startup", "");
        }

        let mut log = ActivityLog::init(td.path()).expect("reinit");
        log.record(ActivityEventClass::Session, "app_start", "startup", "");

        let ids: Vec<u64> = log.recent().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ring_and_file_are_capped() {
        let td = tempdir().expect("tempdir");
        let mut log = ActivityLog::init(td.path()).expect("init");

        for i in 0..(MAX_LOG_EVENTS + 25) {
            log.record(
                ActivityEventClass::FileLoad,
                "csv_load_success",
                "csv_upload",
                &format!("file {i}"),
            );
        }

        assert_eq!(log.recent().len(), MAX_LOG_EVENTS);

        let raw = fs::read_to_string(td.path().join(LOG_FILE_NAME)).expect("log file");
        assert_eq!(raw.lines().count(), MAX_LOG_EVENTS);

        // oldest events were dropped, newest kept
        let last = log.recent().pop().expect("an event");
        assert_eq!(last.msg, format!("file {}", MAX_LOG_EVENTS + 24));
    }
}
