// src/ui/nav.rs

use crate::ui::Route;
use eframe::egui;

pub struct LeftNav;

impl LeftNav {
    pub fn new() -> Self {
        Self
    }

    /// Pure view: renders the route list and mutates route on click
    pub fn ui(&mut self, ctx: &egui::Context, route: &mut Route) {
        egui::SidePanel::left("left_nav")
            .resizable(false)
            .min_width(160.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.heading("Periculum");
                ui.separator();

                nav_btn(ui, route, Route::Home, "Home");
                nav_btn(ui, route, Route::Questionnaire, "Questionnaire");
                nav_btn(ui, route, Route::CsvUpload, "CSV Upload");
                nav_btn(ui, route, Route::Activity, "Activity");
                nav_btn(ui, route, Route::About, "About");
            });
    }
}

fn nav_btn(ui: &mut egui::Ui, route: &mut Route, target: Route, label: &str) {
    let selected = *route == target;
    if ui.selectable_label(selected, label).clicked() {
        *route = target;
    }
}
