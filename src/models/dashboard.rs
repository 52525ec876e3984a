use crate::models::badge::BadgeColor;
use crate::models::camera::CameraStatus;
use crate::models::event::Severity;
use crate::models::filter::Record;
use serde::{Deserialize, Serialize};

/// Entry in the dashboard's recent alerts feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub time: String,
    pub camera: String,
    pub event: String,
    pub description: String,
    pub severity: Severity,
}

impl Record for Alert {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "time" => Some(self.time.as_str()),
            "camera" => Some(self.camera.as_str()),
            "event" => Some(self.event.as_str()),
            "description" => Some(self.description.as_str()),
            "severity" => Some(self.severity.as_str()),
            _ => None,
        }
    }
}

/// A live camera tile on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub name: String,
    pub status: CameraStatus,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickStat {
    pub title: &'static str,
    pub value: &'static str,
    pub subtext: &'static str,
    pub accent: BadgeColor,
}
