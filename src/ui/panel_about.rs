// src/ui/panel_about.rs

use eframe::egui;

const README_TEXT: &str = include_str!("../../README.md");

pub struct AboutPanel {
    readme_text: String,
}

impl AboutPanel {
    pub fn new() -> Self {
        Self {
            readme_text: README_TEXT.to_string(),
        }
    }

    pub fn clear_messages(&mut self) {}

    pub fn reset_inputs(&mut self) {}

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("About");
        ui.separator();
        ui.add_space(6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let available_width = ui.available_width();
                ui.add(
                    egui::TextEdit::multiline(&mut self.readme_text)
                        .interactive(false)
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(24)
                        .desired_width(available_width),
                );
            });
    }
}
