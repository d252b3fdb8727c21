mod confirm_logout;
mod entry_page;
mod processing_page;

pub use confirm_logout::{ConfirmLogoutModal, ConfirmationResult};
pub use entry_page::{EntryOutcome, EntryPage};
pub use processing_page::{ProcessingOutcome, ProcessingPage};

use crate::auth::SessionManager;
use crate::history::HistoryLog;
use crate::notify::{BannerKind, NotificationCenter};
use crate::settings::Settings;
use crate::store::KvStore;
use eframe::egui;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Entry,
    Processing,
}

/// Top-level application state. Session, history and notification state are
/// explicit fields passed down to the page handlers.
pub struct StudioApp {
    page: Page,
    auth: SessionManager,
    history: HistoryLog,
    notices: NotificationCenter,
    entry: EntryPage,
    processing: ProcessingPage,
}

impl StudioApp {
    pub fn new(settings: &Settings) -> Self {
        let store = KvStore::open(settings.profile_dir());
        let auth = SessionManager::new(store.clone());
        let history = HistoryLog::new(store, settings.history_limit);
        // an existing session skips the entry page
        let page = if auth.current_session().is_some() {
            Page::Processing
        } else {
            Page::Entry
        };
        Self {
            page,
            auth,
            history,
            notices: NotificationCenter::new(Duration::from_secs_f32(settings.banner_duration)),
            entry: EntryPage::default(),
            processing: ProcessingPage::default(),
        }
    }

    fn banner_ui(&self, ui: &mut egui::Ui) {
        if let Some(banner) = self.notices.current() {
            let color = match banner.kind {
                BannerKind::Error => egui::Color32::RED,
                BannerKind::Success => egui::Color32::from_rgb(0, 128, 0),
            };
            ui.colored_label(color, &banner.message);
            ui.separator();
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.notices.tick(Instant::now());

        match self.page {
            Page::Entry => {
                let outcome = egui::CentralPanel::default()
                    .show(ctx, |ui| {
                        self.banner_ui(ui);
                        self.entry.ui(ui, &self.auth, &mut self.notices)
                    })
                    .inner;
                if let Some(EntryOutcome::LoggedIn) = outcome {
                    self.page = Page::Processing;
                }
            }
            Page::Processing => {
                let Some(session) = self.auth.current_session() else {
                    // session vanished underneath us; back to the entry page
                    self.page = Page::Entry;
                    ctx.request_repaint();
                    return;
                };
                let outcome = egui::CentralPanel::default()
                    .show(ctx, |ui| {
                        self.banner_ui(ui);
                        self.processing
                            .ui(ui, &session, &self.history, &mut self.notices)
                    })
                    .inner;
                if let Some(ProcessingOutcome::LoggedOut) = outcome {
                    self.auth.logout();
                    self.entry = EntryPage::default();
                    self.processing = ProcessingPage::default();
                    self.page = Page::Entry;
                }
            }
        }

        // keep frames coming so banner timers and pending decodes are seen
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
