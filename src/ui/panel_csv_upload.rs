// src/ui/panel_csv_upload.rs

use std::path::Path;
use std::sync::Arc;

use crate::ui::message::PanelMsgState;
use crate::ui::widgets;
use eframe::egui;
use periculum_risk_assessor_lib::{command, context::AppCtx, types::AppState};

pub struct CsvUploadPanel {
    path_input: String,
    msg: PanelMsgState,
}

impl CsvUploadPanel {
    pub fn new() -> Self {
        Self {
            path_input: String::new(),
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.path_input.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &Arc<AppState>, ctx: &AppCtx) {
        let csv = match command::csv_view(state) {
            Ok(c) => c,
            Err(e) => {
                self.msg.from_app_error(&e);
                self.msg.show(ui, ctx.debug_ui);
                return;
            }
        };
        let submission = match command::submission_view(state) {
            Ok(s) => s,
            Err(e) => {
                self.msg.from_app_error(&e);
                self.msg.show(ui, ctx.debug_ui);
                return;
            }
        };

        ui.heading("CSV Upload");
        ui.add_space(8.0);
        ui.label("Analyze an existing dataset instead of filling in the questionnaire.");

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label("CSV file path:");
            ui.add(
                egui::TextEdit::singleline(&mut self.path_input)
                    .desired_width(360.0)
                    .hint_text("/path/to/data.csv"),
            );

            let can_load = !csv.loading && !self.path_input.trim().is_empty();
            if ui.add_enabled(can_load, egui::Button::new("Load")).clicked() {
                match command::load_csv_file(state, Path::new(self.path_input.trim())) {
                    Ok(()) => self.msg.clear(),
                    Err(e) => self.msg.from_app_error(&e),
                }
            }

            if csv.loading {
                ui.spinner();
            }
        });

        ui.add_space(8.0);
        match (&csv.file_name, &csv.content) {
            (Some(name), Some(content)) => {
                ui.horizontal(|ui| {
                    ui.label(format!("Loaded: {} ({} bytes)", name, content.len()));
                    if ui.button("Clear file").clicked() {
                        match command::clear_csv_file(state) {
                            Ok(()) => self.msg.clear(),
                            Err(e) => self.msg.from_app_error(&e),
                        }
                    }
                });
            }
            (Some(name), None) if csv.loading => {
                ui.label(format!("Loading {}…", name));
            }
            _ => {
                ui.label("No file loaded.");
            }
        }

        if let Some(err) = csv.error.as_deref() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, err);
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let can_submit = !submission.loading && !csv.loading;
            if ui
                .add_enabled(can_submit, egui::Button::new("Submit CSV"))
                .clicked()
            {
                match command::submit_csv(state, ctx) {
                    Ok(()) => self.msg.clear(),
                    Err(e) => self.msg.from_app_error(&e),
                }
            }

            if submission.loading {
                ui.spinner();
            }
        });

        ui.add_space(8.0);
        self.msg.show(ui, ctx.debug_ui);

        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                widgets::result_cards(ui, &submission);
            });

        widgets::submission_error_modal(ui, &submission, state, ctx.debug_ui);
    }
}
