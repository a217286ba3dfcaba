// src/ui/message.rs

use periculum_risk_assessor_lib::error::{AppError, UserMsgKind};

use eframe::egui;
use eframe::egui::{Color32, Ui};

/// Inline panel notice: a short user-facing sentence plus optional detail
/// only shown in debug mode.
#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
    detail: Option<String>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
        self.detail = None;
    }

    pub fn is_set(&self) -> bool {
        self.kind.is_some() && self.short.is_some()
    }

    pub fn set_success(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Success, short, None);
    }

    pub fn set_warn(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Warn, short, None);
    }

    pub fn set_info(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Info, short, None);
    }

    pub fn set_error(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Error, short, None);
    }

    pub fn set_error_detail(&mut self, short: impl Into<String>, detail: impl Into<String>) {
        self.set(UserMsgKind::Error, short, Some(detail.into()));
    }

    pub fn from_app_error(&mut self, err: &AppError) {
        let msg = err.user_msg();
        self.set(msg.kind, msg.short, msg.detail);
    }

    fn set(&mut self, kind: UserMsgKind, short: impl Into<String>, detail: Option<String>) {
        self.kind = Some(kind);
        self.short = Some(short.into());
        self.detail = detail;
    }

    pub fn show(&self, ui: &mut Ui, debug_ui: bool) {
        if !self.is_set() {
            return;
        }

        let kind = match self.kind {
            Some(k) => k,
            None => return,
        };
        let short = self.short.as_deref().unwrap_or("");

        let text = match (debug_ui, self.detail.as_deref()) {
            (true, Some(detail)) => detail,
            _ => short,
        };

        let (stroke, fill) = match kind {
            UserMsgKind::Success => (
                Color32::from_rgb(0, 220, 90), // neon green stroke
                Color32::from_rgb(0, 80, 40),  // dark green fill
            ),
            UserMsgKind::Warn => (
                Color32::from_rgb(255, 170, 0), // neon amber stroke
                Color32::from_rgb(90, 60, 0),   // dark amber fill
            ),
            UserMsgKind::Error => (
                Color32::from_rgb(255, 60, 60), // neon red stroke
                Color32::from_rgb(90, 0, 0),    // dark red fill
            ),
            UserMsgKind::Info => (
                Color32::from_rgb(80, 180, 255), // cool blue stroke
                Color32::from_rgb(10, 40, 80),   // dark blue fill
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(8u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, text);
            });
    }
}
