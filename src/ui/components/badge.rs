use crate::models::Badge;
use crate::ui::badge_color;
use eframe::egui;

/// Small filled pill with white text, optionally prefixed by an icon glyph.
pub fn show_badge(ui: &mut egui::Ui, icon: Option<&str>, badge: Badge) -> egui::Response {
    let text = match icon {
        Some(icon) => format!("{} {}", icon, badge.label),
        None => badge.label.to_string(),
    };

    egui::Frame::none()
        .fill(badge_color(badge.color))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(10.0).color(egui::Color32::WHITE));
        })
        .response
}
