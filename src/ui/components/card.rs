use crate::ui::SLATE_200;
use eframe::egui;

/// White bordered panel used for every dashboard section.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, SLATE_200))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, add_contents)
        .inner
}
