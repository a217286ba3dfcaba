// src/ui/panel_questionnaire.rs

use std::sync::Arc;

use crate::ui::message::PanelMsgState;
use crate::ui::widgets;
use eframe::egui;
use periculum_risk_assessor_lib::{
    command,
    context::AppCtx,
    form::{self, QuestionKind, QuestionSpec},
    store::{Answer, AnswerStore},
    types::AppState,
};

pub struct QuestionnairePanel {
    msg: PanelMsgState,
}

impl QuestionnairePanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &Arc<AppState>, ctx: &AppCtx) {
        // Per-frame snapshots; widget code below never touches the state locks.
        let answers = match command::answers_view(state) {
            Ok(a) => a,
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

        let spec = form::risk_questionnaire();

        ui.heading(spec.title);
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for section in spec.sections {
                    ui.add_space(10.0);
                    ui.strong(section.title);
                    ui.separator();

                    for q in section.questions {
                        if !q.is_visible(&answers) {
                            continue;
                        }
                        self.question_ui(ui, state, q, &answers);
                    }
                }

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!submission.loading, egui::Button::new("Submit Responses"))
                        .clicked()
                    {
                        match command::submit_responses(state, ctx) {
                            Ok(()) => self.msg.clear(),
                            Err(e) => self.msg.from_app_error(&e),
                        }
                    }

                    if submission.loading {
                        ui.spinner();
                    }

                    if ui
                        .add_enabled(!submission.loading, egui::Button::new("Clear answers"))
                        .clicked()
                    {
                        match command::clear_answers(state) {
                            Ok(()) => self.msg.set_info("Answers cleared."),
                            Err(e) => self.msg.from_app_error(&e),
                        }
                    }
                });

                ui.add_space(8.0);
                self.msg.show(ui, ctx.debug_ui);

                ui.add_space(8.0);
                widgets::result_cards(ui, &submission);
            });

        widgets::submission_error_modal(ui, &submission, state, ctx.debug_ui);
    }

    fn question_ui(
        &mut self,
        ui: &mut egui::Ui,
        state: &Arc<AppState>,
        q: &'static QuestionSpec,
        answers: &AnswerStore,
    ) {
        ui.add_space(8.0);
        ui.label(q.label);

        match q.kind {
            QuestionKind::Select => {
                let current = answers.single_value(q.id);
                let selected_text = current.unwrap_or("Select…").to_string();

                egui::ComboBox::from_id_salt(q.id.wire_key())
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for opt in q.options {
                            if ui.selectable_label(current == Some(*opt), *opt).clicked() {
                                self.set(ui, state, q, Answer::Single((*opt).to_string()));
                            }
                        }
                    });
            }

            QuestionKind::Radio => {
                ui.horizontal_wrapped(|ui| {
                    for opt in q.options {
                        let selected = answers.single_value(q.id) == Some(*opt);
                        if ui.selectable_label(selected, *opt).clicked() {
                            self.set(ui, state, q, Answer::Single((*opt).to_string()));
                        }
                    }
                });
            }

            QuestionKind::Multi => {
                for opt in q.options {
                    let mut checked = answers.multi_contains(q.id, opt);
                    if ui.checkbox(&mut checked, *opt).changed() {
                        if let Err(e) = command::toggle_multi_answer(state, q.id, opt, checked) {
                            self.msg.from_app_error(&e);
                        } else {
                            ui.ctx().request_repaint();
                        }
                    }
                }
            }

            QuestionKind::Scale { min, max } => {
                ui.horizontal(|ui| {
                    for v in min..=max {
                        let selected = answers.scale_value(q.id) == Some(v);
                        if ui.selectable_label(selected, v.to_string()).clicked() {
                            self.set(ui, state, q, Answer::Scale(v));
                        }
                    }
                });
            }

            QuestionKind::Text => {
                let mut text = answers.text_value(q.id).unwrap_or("").to_string();
                let edit = egui::TextEdit::singleline(&mut text).desired_width(320.0);
                if ui.add(edit).changed() {
                    self.set(ui, state, q, Answer::Text(text));
                }
            }
        }
    }

    fn set(
        &mut self,
        ui: &mut egui::Ui,
        state: &Arc<AppState>,
        q: &'static QuestionSpec,
        answer: Answer,
    ) {
        if let Err(e) = command::set_answer(state, q.id, answer) {
            self.msg.from_app_error(&e);
        } else {
            // The snapshot for this frame is already taken; repaint so the
            // new value shows immediately.
            ui.ctx().request_repaint();
        }
    }
}
