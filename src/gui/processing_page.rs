use crate::auth::Session;
use crate::effects::{render, Canvas, ColorScheme, EffectSelection, PatternMethod};
use crate::error::StudioError;
use crate::gui::confirm_logout::{ConfirmLogoutModal, ConfirmationResult};
use crate::history::{HistoryCategory, HistoryLog};
use crate::imaging::{fit_to_bounds, load_image, FitRect, LoadedImage, ACCEPTED_EXTENSIONS, MAX_HEIGHT, MAX_WIDTH};
use crate::notify::NotificationCenter;
use crate::stego;
use eframe::egui;
use std::sync::mpsc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingOutcome {
    LoggedOut,
}

/// The image-processing page: canvas, effect dropdowns, steganography
/// panels and the recent-activity lists.
pub struct ProcessingPage {
    image: Option<LoadedImage>,
    fit: Option<FitRect>,
    canvas: Canvas,
    texture: Option<egui::TextureHandle>,
    method_label: String,
    scheme_label: String,
    message_input: String,
    hide_status: Option<String>,
    extract_output: Option<String>,
    // decodes run on worker threads and land here in resolution order;
    // draining installs each result, so the last to resolve wins
    decode_tx: mpsc::Sender<Result<LoadedImage, StudioError>>,
    decode_rx: mpsc::Receiver<Result<LoadedImage, StudioError>>,
    confirm_logout: ConfirmLogoutModal,
}

impl Default for ProcessingPage {
    fn default() -> Self {
        let (decode_tx, decode_rx) = mpsc::channel();
        Self {
            image: None,
            fit: None,
            canvas: Canvas::new(1, 1),
            texture: None,
            method_label: PatternMethod::default().label().to_string(),
            scheme_label: ColorScheme::default().label().to_string(),
            message_input: String::new(),
            hide_status: None,
            extract_output: None,
            decode_tx,
            decode_rx,
            confirm_logout: ConfirmLogoutModal::default(),
        }
    }
}

impl ProcessingPage {
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        session: &Session,
        history: &HistoryLog,
        notices: &mut NotificationCenter,
    ) -> Option<ProcessingOutcome> {
        self.poll_decodes(ui.ctx(), history, notices);

        let mut outcome = None;
        ui.horizontal(|ui| {
            ui.heading("Обробка зображень");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Вийти").clicked() {
                    self.confirm_logout.open();
                }
                ui.label(&session.username);
            });
        });
        ui.separator();

        match self.confirm_logout.ui(ui.ctx()) {
            ConfirmationResult::Confirmed => outcome = Some(ProcessingOutcome::LoggedOut),
            ConfirmationResult::Cancelled | ConfirmationResult::None => {}
        }

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                self.canvas_panel(ui, history);
            });
            ui.separator();
            ui.vertical(|ui| {
                self.steganography_panel(ui, history, notices);
                ui.add_space(12.0);
                history_panels(ui, history);
            });
        });

        outcome
    }

    fn canvas_panel(&mut self, ui: &mut egui::Ui, history: &HistoryLog) {
        if ui.button("Завантажити зображення").clicked() {
            self.pick_file();
        }

        let mut changed = false;
        egui::ComboBox::from_label("Метод обробки")
            .selected_text(self.method_label.clone())
            .show_ui(ui, |ui| {
                for method in PatternMethod::ALL {
                    let label = method.label();
                    changed |= ui
                        .selectable_value(&mut self.method_label, label.to_string(), label)
                        .changed();
                }
            });
        egui::ComboBox::from_label("Кольорова схема")
            .selected_text(self.scheme_label.clone())
            .show_ui(ui, |ui| {
                for scheme in ColorScheme::ALL {
                    let label = scheme.label();
                    changed |= ui
                        .selectable_value(&mut self.scheme_label, label.to_string(), label)
                        .changed();
                }
            });
        if changed && self.image.is_some() {
            history.record(
                HistoryCategory::Patterns,
                format!("{} ({})", self.method_label, self.scheme_label),
            );
            self.repaint(ui.ctx());
        }

        ui.add_space(8.0);
        if let Some(texture) = &self.texture {
            ui.add(egui::Image::new(texture).fit_to_exact_size(texture.size_vec2()));
        } else {
            ui.allocate_ui(egui::vec2(MAX_WIDTH as f32, MAX_HEIGHT as f32), |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("Зображення не завантажено");
                });
            });
        }
    }

    fn steganography_panel(
        &mut self,
        ui: &mut egui::Ui,
        history: &HistoryLog,
        notices: &mut NotificationCenter,
    ) {
        ui.label("Приховати повідомлення");
        ui.text_edit_multiline(&mut self.message_input);
        if ui.button("Приховати").clicked() {
            match stego::hide_message(&self.message_input) {
                Ok(status) => {
                    history.record(HistoryCategory::Messages, self.message_input.clone());
                    self.hide_status = Some(status.to_string());
                }
                Err(e) => notices.show_error(e.to_string(), Instant::now()),
            }
        }
        if let Some(status) = &self.hide_status {
            ui.label(status);
        }

        ui.add_space(8.0);
        if ui.button("Витягнути повідомлення").clicked() {
            self.extract_output = Some(stego::extract_message().to_string());
        }
        if let Some(output) = &self.extract_output {
            ui.label(output);
        }
    }

    fn pick_file(&self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Зображення", ACCEPTED_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        let tx = self.decode_tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(load_image(&path));
        });
    }

    /// Install every decode that resolved since the last frame, in
    /// resolution order. No cancellation of in-flight decodes.
    fn poll_decodes(
        &mut self,
        ctx: &egui::Context,
        history: &HistoryLog,
        notices: &mut NotificationCenter,
    ) {
        let mut repaint = false;
        while let Ok(result) = self.decode_rx.try_recv() {
            match result {
                Ok(image) => {
                    self.fit = Some(fit_to_bounds(
                        image.natural_width as f64,
                        image.natural_height as f64,
                        MAX_WIDTH,
                        MAX_HEIGHT,
                    ));
                    history.record(HistoryCategory::Files, image.name.clone());
                    notices.show_success(format!("Завантажено: {}", image.name), Instant::now());
                    self.image = Some(image);
                    repaint = true;
                }
                Err(e) => notices.show_error(e.to_string(), Instant::now()),
            }
        }
        if repaint {
            self.repaint(ctx);
        }
    }

    /// Re-render the canvas from the current image and dropdown selections
    /// and push the pixels into the display texture.
    fn repaint(&mut self, ctx: &egui::Context) {
        let (Some(image), Some(fit)) = (&self.image, self.fit) else {
            return;
        };
        let selection = EffectSelection::from_labels(&self.method_label, &self.scheme_label);
        render(&mut self.canvas, image, fit, selection);

        let size = [self.canvas.width() as usize, self.canvas.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, self.canvas.pixels());
        match &mut self.texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(ctx.load_texture("canvas", color_image, egui::TextureOptions::LINEAR));
            }
        }
    }
}

fn history_panels(ui: &mut egui::Ui, history: &HistoryLog) {
    ui.label("Остання активність");
    for category in HistoryCategory::ALL {
        ui.collapsing(category.title(), |ui| {
            let entries = history.entries(category);
            if entries.is_empty() {
                ui.weak("Поки що порожньо");
            }
            for entry in entries {
                ui.label(format!("{} ({})", entry.item, entry.timestamp));
            }
        });
    }
}
