mod alerts;
mod cameras;
mod dashboard;
mod events;
mod help;
mod login;
mod settings;

pub use alerts::AlertsPage;
pub use cameras::CamerasPage;
pub use dashboard::DashboardPage;
pub use events::EventsPage;
pub use help::HelpPage;
pub use login::{LoginEvent, LoginPage};
pub use settings::SettingsPage;

use crate::models::Page;
use crate::ui::{SLATE_600, SLATE_900};
use eframe::egui;

/// What a page asks the app shell to do after a frame.
#[derive(Debug, PartialEq)]
pub enum PageEvent {
    Navigate(Page),
    Status(String),
    ConfigChanged,
}

fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.label(egui::RichText::new(title).size(22.0).strong().color(SLATE_900));
    ui.label(egui::RichText::new(subtitle).color(SLATE_600));
}

fn empty_state(ui: &mut egui::Ui, message: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("🛡").size(36.0).color(crate::ui::SLATE_200));
        ui.label(message);
        ui.label(egui::RichText::new(hint).size(11.0).color(crate::ui::SLATE_400));
        ui.add_space(24.0);
    });
}
