use crate::config::Config;
use crate::models::Page;
use crate::ui::components::card;
use crate::ui::pages::{page_header, PageEvent};
use eframe::egui;

pub struct SettingsPage;

impl SettingsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, config: &mut Config) -> Option<PageEvent> {
        let mut event = None;

        page_header(ui, "Settings", "Preferences are saved to your configuration file");
        ui.add_space(12.0);

        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading("Interface");
            ui.separator();

            if ui.checkbox(&mut config.sidebar_collapsed, "Collapse sidebar to icons").changed() {
                event = Some(PageEvent::ConfigChanged);
            }

            ui.horizontal(|ui| {
                ui.label("Start page:");
                egui::ComboBox::from_id_source("start_page")
                    .selected_text(config.start_page.title())
                    .width(150.0)
                    .show_ui(ui, |ui| {
                        for page in Page::all() {
                            if ui.selectable_value(&mut config.start_page, page, page.title()).clicked() {
                                event = Some(PageEvent::ConfigChanged);
                            }
                        }
                    });
            });
        });
        ui.add_space(12.0);

        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading("Sign-in");
            ui.separator();

            let mut remember = config.remember_email;
            if ui.checkbox(&mut remember, "Remember my email address").changed() {
                config.set_remember_email(remember);
                event = Some(PageEvent::ConfigChanged);
            }
            if let Some(email) = &config.last_email {
                ui.label(format!("Remembered: {}", email));
            }
        });

        event
    }
}
