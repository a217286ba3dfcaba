// src/ui/widgets.rs

use eframe::egui;
use periculum_risk_assessor_lib::{
    command,
    types::{AppState, SubmissionState},
};

pub fn copy_icon_button(ui: &mut egui::Ui, enabled: bool, hover: &str) -> bool {
    ui.add_enabled(enabled, egui::Button::new("⧉"))
        .on_hover_text(hover)
        .clicked()
}

/// One analysis result card: heading, copy button, body text.
pub fn result_card(ui: &mut egui::Ui, heading: &str, body: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(heading);
                if copy_icon_button(ui, !body.is_empty(), "Copy to clipboard") {
                    ui.ctx().copy_text(body.to_string());
                }
            });
            ui.add_space(4.0);
            ui.label(body);
        });
    ui.add_space(6.0);
}

/// Renders whichever analysis fields the server returned, in a fixed order.
/// Absent fields render nothing; the server decides which ones to send.
pub fn result_cards(ui: &mut egui::Ui, submission: &SubmissionState) {
    if !submission.any_result() {
        return;
    }
    ui.separator();
    ui.add_space(6.0);

    if let Some(text) = submission.mistral_analysis.as_deref() {
        result_card(ui, "Mistral Risk Analysis:", text);
    }
    if let Some(text) = submission.gemma_judgment.as_deref() {
        result_card(ui, "Gemma's Judgment:", text);
    }
    if let Some(text) = submission.risk_analysis.as_deref() {
        result_card(ui, "Risk Analysis:", text);
    }
    if let Some(text) = submission.result.as_deref() {
        result_card(ui, "Result:", text);
    }
}

/// Shared error alert for both submission panels. Shown while the last
/// submission attempt holds an error; OK clears it.
pub fn submission_error_modal(
    ui: &mut egui::Ui,
    submission: &SubmissionState,
    state: &AppState,
    debug_ui: bool,
) {
    let err = match submission.error.as_ref() {
        Some(e) => e,
        None => return,
    };

    egui::Window::new("Submission Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label("There was an error submitting your responses.");

            if debug_ui {
                ui.add_space(6.0);
                ui.monospace(err.to_string());
            }

            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                let _ = command::clear_submission_error(state);
            }
        });
}
