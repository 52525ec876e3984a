use crate::ui::SLATE_600;
use eframe::egui;

#[derive(Debug)]
pub enum HeaderEvent {
    ToggleSidebar,
    ShowNotifications,
    ShowSettings,
    SignOut,
    Quit,
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        user_email: Option<&str>,
        initial: &str,
        notification_count: usize,
    ) -> Option<HeaderEvent> {
        let mut event = None;

        egui::menu::bar(ui, |ui| {
            if ui.button("☰").on_hover_text("Toggle sidebar").clicked() {
                event = Some(HeaderEvent::ToggleSidebar);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.menu_button(format!("({})  Jason Doe ▾", initial), |ui| {
                    ui.strong("My Account");
                    if let Some(email) = user_email {
                        ui.label(egui::RichText::new(email).size(11.0).color(SLATE_600));
                    }
                    ui.separator();
                    if ui.button("👤 Profile Settings").clicked() {
                        event = Some(HeaderEvent::ShowSettings);
                        ui.close_menu();
                    }
                    if ui.button("⚙ Preferences").clicked() {
                        event = Some(HeaderEvent::ShowSettings);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button(egui::RichText::new("⏏ Sign Out").color(egui::Color32::from_rgb(220, 38, 38))).clicked() {
                        event = Some(HeaderEvent::SignOut);
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        event = Some(HeaderEvent::Quit);
                    }
                });

                ui.label(egui::RichText::new("Welcome back,").size(11.0).color(SLATE_600));
                ui.separator();

                let bell = if notification_count > 0 {
                    format!("🔔 {}", notification_count)
                } else {
                    "🔔".to_string()
                };
                if ui.button(bell).on_hover_text("Notifications").clicked() {
                    event = Some(HeaderEvent::ShowNotifications);
                }
            });
        });

        event
    }
}
