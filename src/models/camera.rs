use crate::models::badge::{self, Badge, BadgeColor};
use crate::models::filter::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Online,
    Offline,
    Recording,
    Maintenance,
    #[serde(other)]
    Unknown,
}

const STATUS_BADGES: [(CameraStatus, Badge); 4] = [
    (CameraStatus::Online, Badge::new("Online", BadgeColor::Green)),
    (CameraStatus::Offline, Badge::new("Offline", BadgeColor::Red)),
    (CameraStatus::Recording, Badge::new("Recording", BadgeColor::Blue)),
    (CameraStatus::Maintenance, Badge::new("Maintenance", BadgeColor::Orange)),
];

impl CameraStatus {
    /// Statuses shown in the summary cards, in display order.
    pub const KNOWN: [CameraStatus; 4] = [
        CameraStatus::Online,
        CameraStatus::Offline,
        CameraStatus::Recording,
        CameraStatus::Maintenance,
    ];

    /// Exact, lowercase match; anything else is `Unknown`, as with serde.
    pub fn parse(value: &str) -> Self {
        match value {
            "online" => CameraStatus::Online,
            "offline" => CameraStatus::Offline,
            "recording" => CameraStatus::Recording,
            "maintenance" => CameraStatus::Maintenance,
            _ => CameraStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraStatus::Online => "online",
            CameraStatus::Offline => "offline",
            CameraStatus::Recording => "recording",
            CameraStatus::Maintenance => "maintenance",
            CameraStatus::Unknown => "unknown",
        }
    }

    pub fn badge(&self) -> Badge {
        badge::lookup(&STATUS_BADGES, self)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CameraStatus::Online => "📶",
            CameraStatus::Offline => "✖",
            CameraStatus::Recording => "⏺",
            CameraStatus::Maintenance => "⚙",
            CameraStatus::Unknown => "?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: u32,
    pub name: String,
    pub status: CameraStatus,
    pub location: String,
    pub tag: String,
    pub last_seen: String,
    pub resolution: String,
    pub fps: String,
    pub ip: String,
}

impl Camera {
    pub fn is_live(&self) -> bool {
        self.status == CameraStatus::Online
    }
}

impl Record for Camera {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(self.name.as_str()),
            "status" => Some(self.status.as_str()),
            "location" => Some(self.location.as_str()),
            "tag" => Some(self.tag.as_str()),
            "last_seen" => Some(self.last_seen.as_str()),
            "resolution" => Some(self.resolution.as_str()),
            "fps" => Some(self.fps.as_str()),
            "ip" => Some(self.ip.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_status_has_a_label() {
        for status in CameraStatus::KNOWN {
            let badge = status.badge();
            assert!(!badge.label.is_empty());
            assert_ne!(badge, Badge::UNKNOWN, "{:?} should have its own badge", status);
        }
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(CameraStatus::parse("online").badge(), Badge::new("Online", BadgeColor::Green));
        assert_eq!(CameraStatus::parse("offline").badge(), Badge::new("Offline", BadgeColor::Red));
        assert_eq!(CameraStatus::parse("recording").badge(), Badge::new("Recording", BadgeColor::Blue));
        assert_eq!(CameraStatus::parse("maintenance").badge().color, BadgeColor::Orange);
    }

    #[test]
    fn test_unrecognized_status_falls_back_to_unknown() {
        for value in ["", "rebooting", "on line", "🔥"] {
            assert_eq!(CameraStatus::parse(value), CameraStatus::Unknown);
            assert_eq!(CameraStatus::parse(value).badge().label, "Unknown");
        }
    }

    #[test]
    fn test_status_parse_is_exact_and_agrees_with_serde() {
        for value in ["online", "Online", "OFFLINE", " recording ", "maintenance", "unknown"] {
            let decoded: CameraStatus = serde_json::from_value(serde_json::Value::String(value.to_string())).unwrap();
            assert_eq!(CameraStatus::parse(value), decoded, "parse and serde disagree on {:?}", value);
        }
        assert_eq!(CameraStatus::parse("Online"), CameraStatus::Unknown);
        assert_eq!(CameraStatus::parse(" recording ").badge(), Badge::UNKNOWN);
    }

    #[test]
    fn test_status_parse_round_trips_through_as_str() {
        for status in CameraStatus::KNOWN {
            assert_eq!(CameraStatus::parse(status.as_str()), status);
        }
    }

    #[test]
    fn test_unknown_status_deserializes() {
        let status: CameraStatus = serde_json::from_str("\"decommissioned\"").unwrap();
        assert_eq!(status, CameraStatus::Unknown);

        let status: CameraStatus = serde_json::from_str("\"recording\"").unwrap();
        assert_eq!(status, CameraStatus::Recording);
    }
}
