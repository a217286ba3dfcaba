// src/ui/panel_activity.rs

use eframe::egui;
use periculum_risk_assessor_lib::{activity_log::ActivityEvent, types::AppState};

pub struct ActivityPanel {
    rendered: String,
}

impl ActivityPanel {
    pub fn new() -> Self {
        Self {
            rendered: String::new(),
        }
    }

    pub fn clear_messages(&mut self) {}

    pub fn reset_inputs(&mut self) {
        self.rendered.clear();
    }

    pub fn refresh(&mut self, state: &AppState) {
        self.rendered = render_events(read_events(state));
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Activity");
        ui.separator();
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Submissions and file loads from this and previous sessions.");
            if ui.button("Refresh").clicked() {
                self.refresh(state);
            }
        });
        ui.add_space(6.0);

        if self.rendered.is_empty() {
            self.refresh(state);
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let available_width = ui.available_width();
                ui.add(
                    egui::TextEdit::multiline(&mut self.rendered)
                        .desired_rows(18)
                        .desired_width(available_width)
                        .interactive(false)
                        .hint_text("No activity recorded."),
                );
            });
    }
}

fn read_events(state: &AppState) -> Vec<ActivityEvent> {
    state
        .activity_log
        .lock()
        .map(|g| g.recent())
        .unwrap_or_default()
}

fn render_events(mut evs: Vec<ActivityEvent>) -> String {
    if evs.is_empty() {
        return String::new();
    }

    evs.sort_by(|a, b| b.ts_ms.cmp(&a.ts_ms));

    let mut out = String::new();
    for e in evs {
        let ts = fmt_ts_ms_utc(e.ts_ms);

        out.push_str(&format!(
            "#{} | {} | {:?} | {} | {}\n{}\n\n",
            e.id, ts, e.class, e.kind, e.context, e.msg
        ));
    }
    out
}

fn fmt_ts_ms_utc(ts_ms: u64) -> String {
    use chrono::{DateTime, TimeZone, Utc};

    let secs = (ts_ms / 1000) as i64;
    let nsec = ((ts_ms % 1000) * 1_000_000) as u32;

    let dt: DateTime<Utc> = Utc
        .timestamp_opt(secs, nsec)
        .single()
        .unwrap_or_else(|| Utc.timestamp_opt(0, 0).single().unwrap());

    dt.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string()
}
