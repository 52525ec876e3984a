use crate::models::Page;
use crate::ui::{SLATE_600, SLATE_900};
use eframe::egui;

#[derive(Debug)]
pub enum SidebarEvent {
    Navigate(Page),
}

pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, active: Page, collapsed: bool) -> Option<SidebarEvent> {
        let mut event = None;

        // Logo
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            egui::Frame::none()
                .fill(SLATE_900)
                .rounding(6.0)
                .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("C").strong().color(egui::Color32::WHITE));
                });
            if !collapsed {
                ui.label(egui::RichText::new("Cyro").size(18.0).strong().color(SLATE_900));
            }
        });
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        for page in Page::all() {
            let is_active = page == active;
            let text = if collapsed {
                page.icon().to_string()
            } else {
                format!("{}  {}", page.icon(), page.title())
            };
            let color = if is_active { egui::Color32::WHITE } else { SLATE_600 };

            let response = egui::Frame::none()
                .fill(if is_active { SLATE_900 } else { egui::Color32::TRANSPARENT })
                .rounding(10.0)
                .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add(egui::Label::new(egui::RichText::new(text).color(color)).sense(egui::Sense::click()))
                })
                .inner
                .on_hover_text(page.title());

            if response.clicked() && !is_active {
                event = Some(SidebarEvent::Navigate(page));
            }
        }

        event
    }
}
