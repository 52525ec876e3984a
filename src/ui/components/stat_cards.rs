use crate::models::QuickStat;
use crate::ui::components::card;
use crate::ui::{accent_color, SLATE_600, SLATE_900};
use eframe::egui;

pub struct StatCards;

impl StatCards {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, stats: &[QuickStat]) {
        if stats.is_empty() {
            return;
        }

        ui.columns(stats.len(), |columns| {
            for (column, stat) in columns.iter_mut().zip(stats) {
                card(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(stat.title).color(SLATE_600));
                            ui.label(egui::RichText::new(stat.value).size(20.0).strong().color(SLATE_900));
                            ui.label(egui::RichText::new(stat.subtext).size(10.0).color(SLATE_600));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.label(egui::RichText::new("●").color(accent_color(stat.accent)));
                        });
                    });
                });
            }
        });
    }
}
