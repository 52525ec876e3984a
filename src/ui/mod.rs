pub mod components;
pub mod pages;
mod styles;

pub use styles::{accent_color, badge_color, setup_styles, LIVE_RED, SLATE_200, SLATE_400, SLATE_50, SLATE_600, SLATE_900};
