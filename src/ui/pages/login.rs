use crate::models::{NotificationVariant, Notifications};
use crate::session::{Session, DEMO_EMAIL, DEMO_PASSWORD};
use crate::ui::components::card;
use crate::ui::{SLATE_400, SLATE_600, SLATE_900};
use eframe::egui;

#[derive(Debug, PartialEq, Eq)]
pub enum LoginEvent {
    Submit,
}

pub struct LoginPage {
    pub email: String,
    pub password: String,
    show_password: bool,
}

impl LoginPage {
    /// Prefills the remembered email when there is one, the demo account otherwise.
    pub fn new(remembered_email: Option<&str>) -> Self {
        Self {
            email: remembered_email.unwrap_or(DEMO_EMAIL).to_string(),
            password: DEMO_PASSWORD.to_string(),
            show_password: false,
        }
    }

    /// Checks the form against the session and raises a toast when it is rejected.
    pub fn submit(&mut self, session: &mut Session, notifications: &mut Notifications) -> bool {
        if session.login(&self.email, &self.password) {
            return true;
        }

        notifications.push(
            "Authentication Failed",
            "Please check your credentials and try again.",
            NotificationVariant::Destructive,
        );
        false
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<LoginEvent> {
        let mut event = None;

        ui.columns(2, |columns| {
            // Brand panel
            egui::Frame::none()
                .fill(SLATE_900)
                .rounding(12.0)
                .inner_margin(egui::Margin::same(32.0))
                .show(&mut columns[0], |ui| {
                    ui.set_width(ui.available_width());
                    ui.set_min_height(ui.available_height());
                    ui.label(egui::RichText::new("🛡 Cyro").size(22.0).strong().color(egui::Color32::WHITE));
                    ui.label(egui::RichText::new("Security Platform").color(SLATE_400));
                    ui.add_space(32.0);
                    ui.label(egui::RichText::new("Enterprise Security Management").size(26.0).strong().color(egui::Color32::WHITE));
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Advanced security management with real-time monitoring and intelligent threat detection.")
                            .color(SLATE_400),
                    );
                    ui.add_space(24.0);
                    for (title, subtitle) in [
                        ("⚡ Real-time Monitoring", "Instant alerts and detection"),
                        ("📊 Advanced Analytics", "Deep insights and reports"),
                        ("🛡 Enterprise Grade", "Bank-level security"),
                    ] {
                        ui.label(egui::RichText::new(title).strong().color(egui::Color32::WHITE));
                        ui.label(egui::RichText::new(subtitle).size(11.0).color(SLATE_400));
                        ui.add_space(8.0);
                    }
                });

            // Sign-in form
            let ui = &mut columns[1];
            ui.add_space(80.0);
            card(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Welcome").size(24.0).strong().color(SLATE_900));
                    ui.label(egui::RichText::new("Sign in to your security dashboard").color(SLATE_600));
                });
                ui.add_space(16.0);

                ui.label("Email");
                let email_response = ui.add(
                    egui::TextEdit::singleline(&mut self.email)
                        .hint_text("you@company.com")
                        .desired_width(f32::INFINITY)
                );

                ui.add_space(8.0);
                ui.label("Password");
                let password_response = ui
                    .horizontal(|ui| {
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.password)
                                .password(!self.show_password)
                                .hint_text("Enter your password")
                                .desired_width(ui.available_width() - 36.0)
                        );
                        let toggle = if self.show_password { "🙈" } else { "👁" };
                        if ui.small_button(toggle).on_hover_text("Show or hide password").clicked() {
                            self.show_password = !self.show_password;
                        }
                        response
                    })
                    .inner;

                let enter_pressed = (email_response.lost_focus() || password_response.lost_focus())
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(16.0);
                let sign_in = ui.add_sized([ui.available_width(), 32.0], egui::Button::new("Sign In  →"));
                if sign_in.clicked() || enter_pressed {
                    event = Some(LoginEvent::Submit);
                }

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("Demo account: {} / {}", DEMO_EMAIL, DEMO_PASSWORD))
                        .size(10.0)
                        .color(SLATE_400),
                );
            });
        });

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_prefills_demo_account() {
        let page = LoginPage::new(None);
        assert_eq!(page.email, DEMO_EMAIL);
        assert_eq!(page.password, DEMO_PASSWORD);

        let page = LoginPage::new(Some("ops@site.example"));
        assert_eq!(page.email, "ops@site.example");
    }

    #[test]
    fn test_successful_submit_raises_no_toast() {
        let mut page = LoginPage::new(None);
        let mut session = Session::default();
        let mut notifications = Notifications::default();

        assert!(page.submit(&mut session, &mut notifications));
        assert_eq!(session.current_user_email(), Some("admin@demo.com"));
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_failed_submit_raises_toast() {
        let mut page = LoginPage::new(None);
        page.password = "letmein".to_string();
        let mut session = Session::default();
        let mut notifications = Notifications::default();

        assert!(!page.submit(&mut session, &mut notifications));
        assert!(!session.is_authenticated());
        assert_eq!(notifications.items().len(), 1);
        assert_eq!(notifications.items()[0].title, "Authentication Failed");
        assert_eq!(notifications.items()[0].variant, NotificationVariant::Destructive);
    }
}
