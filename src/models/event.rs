use crate::models::badge::{self, Badge, BadgeColor};
use crate::models::filter::Record;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

const SEVERITY_BADGES: [(Severity, Badge); 3] = [
    (Severity::High, Badge::new("High", BadgeColor::Red)),
    (Severity::Medium, Badge::new("Medium", BadgeColor::Orange)),
    (Severity::Low, Badge::new("Low", BadgeColor::Slate)),
];

impl Severity {
    pub const KNOWN: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Unknown => "unknown",
        }
    }

    pub fn badge(&self) -> Badge {
        badge::lookup(&SEVERITY_BADGES, self)
    }
}

/// Icon class of an event, derived from its free-text type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PersonDetected,
    VehicleAlert,
    SoundDetection,
    DoorAccess,
    MotionAlert,
    Other,
}

impl EventKind {
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type.trim().to_lowercase().as_str() {
            "person detected" => EventKind::PersonDetected,
            "vehicle alert" => EventKind::VehicleAlert,
            "sound detection" => EventKind::SoundDetection,
            "door access" => EventKind::DoorAccess,
            "motion alert" => EventKind::MotionAlert,
            _ => EventKind::Other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::PersonDetected => "👤",
            EventKind::VehicleAlert => "🚗",
            EventKind::SoundDetection => "🔊",
            EventKind::DoorAccess => "⚠",
            EventKind::MotionAlert | EventKind::Other => "👁",
        }
    }

    pub fn accent(&self) -> BadgeColor {
        match self {
            EventKind::PersonDetected => BadgeColor::Blue,
            EventKind::VehicleAlert | EventKind::DoorAccess => BadgeColor::Red,
            EventKind::SoundDetection => BadgeColor::Orange,
            EventKind::MotionAlert | EventKind::Other => BadgeColor::Slate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: u32,
    pub timestamp: String,
    pub camera: String,
    pub event_type: String,
    pub severity: Severity,
    pub description: String,
    pub duration: String,
}

impl SecurityEvent {
    pub fn occurred_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    /// Time-of-day column value; the raw timestamp when it cannot be parsed.
    pub fn time_of_day(&self) -> String {
        self.occurred_at()
            .map(|at| at.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| self.timestamp.clone())
    }

    pub fn kind(&self) -> EventKind {
        EventKind::from_event_type(&self.event_type)
    }
}

impl Record for SecurityEvent {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "timestamp" => Some(self.timestamp.as_str()),
            "camera" => Some(self.camera.as_str()),
            "event_type" => Some(self.event_type.as_str()),
            "severity" => Some(self.severity.as_str()),
            "description" => Some(self.description.as_str()),
            "duration" => Some(self.duration.as_str()),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        self.occurred_at().map(|at| at.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    fn severity(value: &str) -> Severity {
        serde_json::from_value(serde_json::Value::String(value.to_string())).unwrap()
    }

    #[test]
    fn test_severity_badges() {
        assert_eq!(severity("high").badge(), Badge::new("High", BadgeColor::Red));
        assert_eq!(severity("medium").badge(), Badge::new("Medium", BadgeColor::Orange));
        assert_eq!(severity("low").badge(), Badge::new("Low", BadgeColor::Slate));
    }

    #[test]
    fn test_severity_badge_is_total() {
        for severity in Severity::KNOWN {
            assert!(!severity.badge().label.is_empty());
            assert_ne!(severity.badge().label, "Unknown");
        }
        for value in ["critical", "", "HIGHEST"] {
            assert_eq!(severity(value).badge(), Badge::UNKNOWN, "{:?} should map to Unknown", value);
        }
    }

    #[test]
    fn test_severity_match_is_exact() {
        assert_eq!(severity("HIGH"), Severity::Unknown);
        assert_eq!(severity(" Low "), Severity::Unknown);
        assert_eq!(severity("Medium").badge(), Badge::UNKNOWN);
    }

    #[test]
    fn test_event_kind_mapping() {
        assert_eq!(EventKind::from_event_type("Person Detected"), EventKind::PersonDetected);
        assert_eq!(EventKind::from_event_type("VEHICLE ALERT"), EventKind::VehicleAlert);
        assert_eq!(EventKind::from_event_type("Door Access").accent(), BadgeColor::Red);
        assert_eq!(EventKind::from_event_type("Glass Break"), EventKind::Other);
        assert_eq!(EventKind::Other.icon(), EventKind::MotionAlert.icon());
    }

    #[test]
    fn test_timestamp_parsing() {
        let event = &fixtures::events()[0];

        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(event.time_of_day(), "14:30:15");
    }

    #[test]
    fn test_unparseable_timestamp_keeps_raw_text() {
        let mut event = fixtures::events().remove(0);
        event.timestamp = "15/01/2024".to_string();

        assert_eq!(event.date(), None);
        assert_eq!(event.time_of_day(), "15/01/2024");
    }
}
