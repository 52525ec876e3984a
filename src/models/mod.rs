mod badge;
mod camera;
mod dashboard;
mod event;
pub mod filter;
pub mod fixtures;
mod notification;
mod page;

pub use badge::{Badge, BadgeColor};
pub use camera::{Camera, CameraStatus};
pub use dashboard::{Alert, Feed, QuickStat};
pub use event::{SecurityEvent, Severity};
pub use filter::TableFilterView;
pub use notification::{NotificationVariant, Notifications};
pub use page::Page;
