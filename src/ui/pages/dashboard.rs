use crate::models::filter::filter_records;
use crate::models::{Alert, Feed, Page, QuickStat};
use crate::ui::components::{card, show_badge, AlertList, AlertListEvent, LiveView, LiveViewDialog, LiveViewEvent, StatCards};
use crate::ui::pages::{page_header, PageEvent};
use crate::ui::{LIVE_RED, SLATE_400, SLATE_600, SLATE_900};
use eframe::egui;

const ALERT_FIELDS: &[&str] = &["camera", "event", "description"];

pub struct DashboardPage {
    stats: Vec<QuickStat>,
    feeds: Vec<Feed>,
    alerts: Vec<Alert>,
    alert_query: String,
    live_view: Option<usize>,
    stat_cards: StatCards,
    alert_list: AlertList,
    live_view_dialog: LiveViewDialog,
}

impl DashboardPage {
    pub fn new(stats: Vec<QuickStat>, feeds: Vec<Feed>, alerts: Vec<Alert>) -> Self {
        Self {
            stats,
            feeds,
            alerts,
            alert_query: String::new(),
            live_view: None,
            stat_cards: StatCards::new(),
            alert_list: AlertList::new(),
            live_view_dialog: LiveViewDialog::new(),
        }
    }

    fn show_feed(ui: &mut egui::Ui, feed: &Feed) -> bool {
        let mut open = false;

        card(ui, |ui| {
            ui.set_width(ui.available_width());

            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 140.0),
                egui::Sense::click(),
            );
            let painter = ui.painter_at(rect);
            let fill = if response.hovered() { SLATE_600 } else { SLATE_900 };
            painter.rect_filled(rect, 6.0, fill);
            painter.text(
                rect.left_top() + egui::vec2(8.0, 8.0),
                egui::Align2::LEFT_TOP,
                "● LIVE",
                egui::FontId::proportional(11.0),
                LIVE_RED,
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "▶",
                egui::FontId::proportional(24.0),
                SLATE_400,
            );
            if response.on_hover_text("Open live view").clicked() {
                open = true;
            }

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&feed.name).strong().color(SLATE_900));
                    ui.label(egui::RichText::new(&feed.location).size(11.0).color(SLATE_600));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    show_badge(ui, None, feed.status.badge());
                });
            });
        });

        open
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<PageEvent> {
        let mut page_event = None;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                page_header(ui, "Security Dashboard", "Real-time monitoring and system overview");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Quick Setup").clicked() {
                    page_event = Some(PageEvent::Navigate(Page::Settings));
                }
                if ui.button("📊 Analytics").clicked() {
                    page_event = Some(PageEvent::Navigate(Page::Events));
                }
            });
        });
        ui.add_space(12.0);

        self.stat_cards.show(ui, &self.stats);
        ui.add_space(16.0);

        // Live camera feeds
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Live Camera Feeds").size(16.0).strong().color(SLATE_900));
                ui.label(egui::RichText::new("Real-time monitoring from all security cameras").color(SLATE_600));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("View All").clicked() {
                    page_event = Some(PageEvent::Navigate(Page::Cameras));
                }
            });
        });
        ui.add_space(8.0);

        if !self.feeds.is_empty() {
            let mut opened = None;
            ui.columns(self.feeds.len(), |columns| {
                for (idx, (column, feed)) in columns.iter_mut().zip(&self.feeds).enumerate() {
                    if Self::show_feed(column, feed) {
                        opened = Some(idx);
                    }
                }
            });
            if opened.is_some() {
                self.live_view = opened;
            }
        }
        ui.add_space(16.0);

        // Recent alerts and quick actions
        ui.columns(3, |columns| {
            let (left, right) = columns.split_at_mut(2);

            card(&mut left[0], |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚠ Recent Alerts").size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.alert_query)
                                .hint_text("Filter alerts...")
                                .desired_width(180.0)
                        );
                    });
                });
                ui.separator();
                let alerts = filter_records(&self.alerts, ALERT_FIELDS, &self.alert_query);
                if alerts.is_empty() {
                    ui.label(egui::RichText::new("No alerts match this filter.").color(SLATE_600));
                } else if let Some(AlertListEvent::View(_)) = self.alert_list.show(ui, &alerts) {
                    page_event = Some(PageEvent::Navigate(Page::Events));
                }
            });

            card(&mut right[0], |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new("Quick Actions").size(16.0).strong());
                ui.separator();
                let actions = [
                    ("📷 Camera Setup", Page::Cameras),
                    ("📊 View Reports", Page::Events),
                    ("🛡 Security Settings", Page::Settings),
                    ("⚠ Alert Settings", Page::Alerts),
                ];
                for (label, target) in actions {
                    if ui.add_sized([ui.available_width(), 28.0], egui::Button::new(label)).clicked() {
                        page_event = Some(PageEvent::Navigate(target));
                    }
                }
            });
        });

        if let Some(idx) = self.live_view {
            match self.feeds.get(idx).map(LiveView::from) {
                Some(target) => {
                    if let Some(LiveViewEvent::Close) = self.live_view_dialog.show(ui.ctx(), &target) {
                        self.live_view = None;
                    }
                }
                None => self.live_view = None,
            }
        }

        page_event
    }
}
