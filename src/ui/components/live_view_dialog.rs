use crate::models::{Camera, CameraStatus, Feed};
use crate::ui::components::show_badge;
use crate::ui::{LIVE_RED, SLATE_400, SLATE_900};
use eframe::egui;

/// What the live view dialog displays for one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveView {
    pub title: String,
    pub location: String,
    pub detail: Option<String>,
    pub status: CameraStatus,
}

impl From<&Camera> for LiveView {
    fn from(camera: &Camera) -> Self {
        Self {
            title: camera.name.clone(),
            location: camera.location.clone(),
            detail: Some(format!("{} • {}", camera.resolution, camera.fps)),
            status: camera.status,
        }
    }
}

impl From<&Feed> for LiveView {
    fn from(feed: &Feed) -> Self {
        Self {
            title: feed.name.clone(),
            location: feed.location.clone(),
            detail: None,
            status: feed.status,
        }
    }
}

#[derive(Debug)]
pub enum LiveViewEvent {
    Close,
}

pub struct LiveViewDialog;

impl LiveViewDialog {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ctx: &egui::Context, view: &LiveView) -> Option<LiveViewEvent> {
        let mut event = None;
        let mut is_open = true;

        egui::Window::new(format!("📷 {} - Live View", view.title))
            .id(egui::Id::new("live_view_dialog"))
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(640.0, 360.0), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 6.0, SLATE_900);
                painter.text(
                    rect.left_top() + egui::vec2(12.0, 12.0),
                    egui::Align2::LEFT_TOP,
                    "● LIVE",
                    egui::FontId::proportional(13.0),
                    LIVE_RED,
                );
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "No video signal in demo mode",
                    egui::FontId::proportional(14.0),
                    SLATE_400,
                );
                if let Some(detail) = &view.detail {
                    painter.text(
                        rect.right_bottom() - egui::vec2(12.0, 12.0),
                        egui::Align2::RIGHT_BOTTOM,
                        detail,
                        egui::FontId::proportional(12.0),
                        egui::Color32::WHITE,
                    );
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(format!("📍 {}", view.location));
                    show_badge(ui, Some(view.status.icon()), view.status.badge());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            event = Some(LiveViewEvent::Close);
                        }
                    });
                });
            });

        if !is_open {
            event = Some(LiveViewEvent::Close);
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_camera_live_view_shows_resolution_and_fps() {
        let cameras = fixtures::cameras();
        let view = LiveView::from(&cameras[3]);

        assert_eq!(view.title, "Executive Floor");
        assert_eq!(view.detail.as_deref(), Some("1080p • 60fps"));
        assert_eq!(view.status, CameraStatus::Recording);
    }

    #[test]
    fn test_feed_live_view_has_no_detail() {
        let feeds = fixtures::feeds();
        let view = LiveView::from(&feeds[0]);

        assert_eq!(view.location, "Main Gate");
        assert_eq!(view.detail, None);
    }
}
