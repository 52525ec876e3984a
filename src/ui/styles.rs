use crate::models::BadgeColor;
use eframe::egui;

pub const SLATE_900: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const SLATE_600: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
pub const SLATE_400: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const SLATE_200: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub const SLATE_50: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
pub const LIVE_RED: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

/// Light theme with slightly larger proportional text for the dashboard.
pub fn setup_styles(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());

    let mut style = (*ctx.style()).clone();

    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(13.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(13.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(20.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::new(10.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::new(12.0, egui::FontFamily::Monospace)
    );
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}

pub fn badge_color(color: BadgeColor) -> egui::Color32 {
    match color {
        BadgeColor::Green => egui::Color32::from_rgb(34, 197, 94),
        BadgeColor::Red => egui::Color32::from_rgb(239, 68, 68),
        BadgeColor::Blue => egui::Color32::from_rgb(59, 130, 246),
        BadgeColor::Orange => egui::Color32::from_rgb(249, 115, 22),
        BadgeColor::Slate => SLATE_400,
    }
}

/// Text colour for stat card icons and event icons.
pub fn accent_color(color: BadgeColor) -> egui::Color32 {
    match color {
        BadgeColor::Slate => SLATE_600,
        other => badge_color(other),
    }
}
