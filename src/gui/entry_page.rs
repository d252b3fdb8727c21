use crate::auth::SessionManager;
use crate::notify::NotificationCenter;
use eframe::egui;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    LoggedIn,
}

/// Login and registration forms with a switch link between them.
#[derive(Default)]
pub struct EntryPage {
    show_register: bool,
    login_username: String,
    login_password: String,
    reg_username: String,
    reg_password: String,
    reg_password_confirm: String,
}

impl EntryPage {
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        auth: &SessionManager,
        notices: &mut NotificationCenter,
    ) -> Option<EntryOutcome> {
        let mut outcome = None;
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Стеганографія зображень");
            ui.add_space(20.0);
            if self.show_register {
                self.register_form(ui, auth, notices);
            } else {
                outcome = self.login_form(ui, auth, notices);
            }
        });
        outcome
    }

    fn login_form(
        &mut self,
        ui: &mut egui::Ui,
        auth: &SessionManager,
        notices: &mut NotificationCenter,
    ) -> Option<EntryOutcome> {
        let mut outcome = None;
        ui.label("Вхід");
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Логін");
            ui.text_edit_singleline(&mut self.login_username);
        });
        ui.horizontal(|ui| {
            ui.label("Пароль");
            ui.add(egui::TextEdit::singleline(&mut self.login_password).password(true));
        });
        ui.add_space(8.0);
        if ui.button("Увійти").clicked() {
            match auth.login(&self.login_username, &self.login_password) {
                Ok(session) => {
                    tracing::debug!("login ok for '{}'", session.username);
                    notices.show_success("Успішний вхід! Перенаправлення...", Instant::now());
                    outcome = Some(EntryOutcome::LoggedIn);
                }
                Err(e) => notices.show_error(e.to_string(), Instant::now()),
            }
        }
        if ui.link("Немає акаунта? Реєстрація").clicked() {
            self.show_register = true;
            notices.clear();
        }
        outcome
    }

    fn register_form(
        &mut self,
        ui: &mut egui::Ui,
        auth: &SessionManager,
        notices: &mut NotificationCenter,
    ) {
        ui.label("Реєстрація");
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Логін");
            ui.text_edit_singleline(&mut self.reg_username);
        });
        ui.horizontal(|ui| {
            ui.label("Пароль");
            ui.add(egui::TextEdit::singleline(&mut self.reg_password).password(true));
        });
        ui.horizontal(|ui| {
            ui.label("Підтвердження паролю");
            ui.add(egui::TextEdit::singleline(&mut self.reg_password_confirm).password(true));
        });
        ui.add_space(8.0);
        if ui.button("Зареєструватися").clicked() {
            match auth.register(
                &self.reg_username,
                &self.reg_password,
                &self.reg_password_confirm,
            ) {
                Ok(()) => {
                    notices.show_success(
                        "Реєстрація успішна! Тепер ви можете увійти в систему",
                        Instant::now(),
                    );
                    // back to the login form with the new login prefilled
                    let username = self.reg_username.trim().to_string();
                    *self = Self {
                        login_username: username,
                        ..Self::default()
                    };
                }
                Err(e) => notices.show_error(e.to_string(), Instant::now()),
            }
        }
        if ui.link("Вже є акаунт? Вхід").clicked() {
            self.show_register = false;
            notices.clear();
        }
    }
}
