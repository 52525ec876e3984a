use crate::models::Alert;
use crate::ui::components::show_badge;
use crate::ui::{SLATE_200, SLATE_600, SLATE_900};
use eframe::egui;

#[derive(Debug, PartialEq, Eq)]
pub enum AlertListEvent {
    View(usize),
}

pub struct AlertList;

impl AlertList {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, alerts: &[&Alert]) -> Option<AlertListEvent> {
        let mut event = None;

        for (idx, alert) in alerts.iter().enumerate() {
            egui::Frame::none()
                .stroke(egui::Stroke::new(1.0, SLATE_200))
                .rounding(6.0)
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.add_sized(
                            [70.0, 18.0],
                            egui::Label::new(egui::RichText::new(&alert.time).strong().color(SLATE_600)),
                        );
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(&alert.event).strong().color(SLATE_900));
                                show_badge(ui, None, alert.severity.badge());
                            });
                            ui.label(
                                egui::RichText::new(format!("{} • {}", alert.camera, alert.description))
                                    .size(11.0)
                                    .color(SLATE_600),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("View").clicked() {
                                event = Some(AlertListEvent::View(idx));
                            }
                        });
                    });
                });
            ui.add_space(4.0);
        }

        event
    }
}
