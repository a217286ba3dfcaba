// src/ui/panel_home.rs

use crate::ui::Route;
use eframe::egui;

pub struct HomePanel;

impl HomePanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, route: &mut Route) {
        ui.add_space(24.0);

        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("SME Risk Assessment").size(28.0));
            ui.add_space(12.0);

            ui.scope(|ui| {
                ui.set_max_width(520.0);
                ui.label(
                    "Periculum uses AI models like Mistral and Gemma to analyze business \
                     risks across finance, compliance, cybersecurity, HR, and more — \
                     tailored for small & medium enterprises.",
                );
            });

            ui.add_space(20.0);
            if ui
                .add(egui::Button::new("Start Questionnaire").min_size(egui::vec2(180.0, 32.0)))
                .clicked()
            {
                *route = Route::Questionnaire;
            }

            ui.add_space(8.0);
            ui.label("Or analyze an existing dataset from the CSV Upload tab.");
        });
    }
}
