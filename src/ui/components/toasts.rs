use crate::models::{NotificationVariant, Notifications};
use crate::ui::SLATE_900;
use eframe::egui;
use std::time::{Duration, Instant};

pub struct ToastStack;

impl ToastStack {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ctx: &egui::Context, notifications: &mut Notifications) {
        notifications.prune(Instant::now());
        if notifications.is_empty() {
            return;
        }

        let mut dismissed = None;

        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -40.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (idx, item) in notifications.items().iter().enumerate() {
                    let (fill, text) = match item.variant {
                        NotificationVariant::Destructive => (egui::Color32::from_rgb(220, 38, 38), egui::Color32::WHITE),
                        NotificationVariant::Info => (egui::Color32::WHITE, SLATE_900),
                    };

                    egui::Frame::popup(ui.style())
                        .fill(fill)
                        .inner_margin(egui::Margin::same(10.0))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(egui::RichText::new(&item.title).strong().color(text));
                                    if !item.description.is_empty() {
                                        ui.label(egui::RichText::new(&item.description).size(11.0).color(text));
                                    }
                                });
                                if ui.small_button("✖").clicked() {
                                    dismissed = Some(idx);
                                }
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        if let Some(idx) = dismissed {
            notifications.dismiss(idx);
        }

        // Keep repainting so expired toasts disappear without user input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
