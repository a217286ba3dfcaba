// src/ui/mod.rs

pub mod nav;
pub mod panel_about;
pub mod panel_activity;
pub mod panel_csv_upload;
pub mod panel_home;
pub mod panel_questionnaire;

pub mod message;
pub mod widgets;

use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

use nav::LeftNav;

use panel_about::AboutPanel;
use panel_activity::ActivityPanel;
use panel_csv_upload::CsvUploadPanel;
use panel_home::HomePanel;
use panel_questionnaire::QuestionnairePanel;
use periculum_risk_assessor_lib::context::AppCtx;
use periculum_risk_assessor_lib::types::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Questionnaire,
    CsvUpload,
    Activity,
    About,
}

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,

    route: Route,
    prev_route: Route,

    nav: LeftNav,
    home: HomePanel,
    questionnaire: QuestionnairePanel,
    csv_upload: CsvUploadPanel,
    activity: ActivityPanel,
    about: AboutPanel,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>) -> Self {
        Self {
            state,
            ctx,
            route: Route::Home,
            prev_route: Route::Home,
            nav: LeftNav::new(),
            home: HomePanel::new(),
            questionnaire: QuestionnairePanel::new(),
            csv_upload: CsvUploadPanel::new(),
            activity: ActivityPanel::new(),
            about: AboutPanel::new(),
        }
    }

    fn clear_all_messages(&mut self) {
        self.questionnaire.clear_messages();
        self.csv_upload.clear_messages();
        self.activity.clear_messages();
        self.about.clear_messages();
    }

    /// True while a submission or file read runs on a worker thread.
    fn work_in_flight(&self) -> bool {
        let submitting = self
            .state
            .submission
            .lock()
            .map(|g| g.loading)
            .unwrap_or(false);

        let reading_csv = self
            .state
            .csv_file
            .lock()
            .map(|g| g.loading)
            .unwrap_or(false);

        submitting || reading_csv
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Route transition hooks
        if self.route != self.prev_route {
            self.clear_all_messages();

            if self.route == Route::Activity {
                self.activity.refresh(self.state.as_ref());
            }

            self.prev_route = self.route;
        }

        // Nav (pure view)
        self.nav.ui(ctx, &mut self.route);

        // Panels
        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::Home => self.home.ui(ui, &mut self.route),

            Route::Questionnaire => self.questionnaire.ui(ui, &self.state, &self.ctx),

            Route::CsvUpload => self.csv_upload.ui(ui, &self.state, &self.ctx),

            Route::Activity => self.activity.ui(ui, self.state.as_ref()),

            Route::About => self.about.ui(ui),
        });

        // Worker threads write results back to shared state; keep polling
        // while any of them run so the UI picks the writeback up promptly.
        if self.work_in_flight() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
