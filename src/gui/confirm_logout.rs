use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResult {
    None,
    Confirmed,
    Cancelled,
}

/// Modal asking the user to confirm leaving the session.
#[derive(Debug, Default)]
pub struct ConfirmLogoutModal {
    open: bool,
}

impl ConfirmLogoutModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> ConfirmationResult {
        if !self.open {
            return ConfirmationResult::None;
        }
        let mut result = ConfirmationResult::None;
        egui::Window::new("Вихід")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Ви дійсно хочете вийти з системи?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Вийти").clicked() {
                        result = ConfirmationResult::Confirmed;
                    }
                    if ui.button("Скасувати").clicked() {
                        result = ConfirmationResult::Cancelled;
                    }
                });
            });
        if result != ConfirmationResult::None {
            self.open = false;
        }
        result
    }
}
