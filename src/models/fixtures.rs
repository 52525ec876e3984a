//! Seed data shown by the dashboard. Loaded once at startup and never mutated.

use crate::models::badge::BadgeColor;
use crate::models::{Alert, Camera, CameraStatus, Feed, QuickStat, SecurityEvent, Severity};

#[allow(clippy::too_many_arguments)]
fn camera(
    id: u32,
    name: &str,
    status: CameraStatus,
    location: &str,
    tag: &str,
    last_seen: &str,
    resolution: &str,
    fps: &str,
    ip: &str,
) -> Camera {
    Camera {
        id,
        name: name.to_string(),
        status,
        location: location.to_string(),
        tag: tag.to_string(),
        last_seen: last_seen.to_string(),
        resolution: resolution.to_string(),
        fps: fps.to_string(),
        ip: ip.to_string(),
    }
}

pub fn cameras() -> Vec<Camera> {
    vec![
        camera(1, "Front Entrance", CameraStatus::Online, "Main Gate - Building A", "Outdoor", "Live", "1080p", "30fps", "192.168.1.101"),
        camera(2, "Parking Lot", CameraStatus::Offline, "Parking Zone A", "Outdoor", "2 hours ago", "720p", "25fps", "192.168.1.102"),
        camera(3, "Lobby Area", CameraStatus::Online, "Ground Floor Reception", "Indoor", "Live", "4K", "30fps", "192.168.1.103"),
        camera(4, "Executive Floor", CameraStatus::Recording, "5th Floor Corridor", "Indoor", "Live", "1080p", "60fps", "192.168.1.104"),
        camera(5, "Back Exit", CameraStatus::Maintenance, "Rear Emergency Exit", "Outdoor", "1 day ago", "720p", "25fps", "192.168.1.105"),
    ]
}

fn event(
    id: u32,
    timestamp: &str,
    camera: &str,
    event_type: &str,
    severity: Severity,
    description: &str,
    duration: &str,
) -> SecurityEvent {
    SecurityEvent {
        id,
        timestamp: timestamp.to_string(),
        camera: camera.to_string(),
        event_type: event_type.to_string(),
        severity,
        description: description.to_string(),
        duration: duration.to_string(),
    }
}

pub fn events() -> Vec<SecurityEvent> {
    vec![
        event(1, "2024-01-15 14:30:15", "Front Entrance", "Person Detected", Severity::Low, "Individual approaching main entrance", "00:02:15"),
        event(2, "2024-01-15 15:22:30", "Parking Lot", "Vehicle Alert", Severity::High, "Unauthorized vehicle in restricted zone", "00:01:45"),
        event(3, "2024-01-15 16:45:12", "Lobby Area", "Sound Detection", Severity::Medium, "Unusual noise levels detected", "00:00:30"),
        event(4, "2024-01-15 18:10:05", "Back Exit", "Door Access", Severity::High, "Emergency exit door opened", "00:03:20"),
        event(5, "2024-01-15 19:35:45", "Reception", "Motion Alert", Severity::Low, "Movement detected after hours", "00:01:10"),
    ]
}

fn alert(time: &str, camera: &str, event: &str, description: &str, severity: Severity) -> Alert {
    Alert {
        time: time.to_string(),
        camera: camera.to_string(),
        event: event.to_string(),
        description: description.to_string(),
        severity,
    }
}

pub fn recent_alerts() -> Vec<Alert> {
    vec![
        alert("10:15 AM", "Front Entrance", "Motion Detected", "Person approaching main entrance", Severity::Low),
        alert("11:30 AM", "Parking Lot", "Vehicle Alert", "Unauthorized vehicle detected", Severity::High),
        alert("12:45 PM", "Lobby Area", "Sound Detection", "Loud noise in lobby area", Severity::Medium),
        alert("01:20 PM", "Back Exit", "Door Opened", "Emergency exit accessed", Severity::High),
    ]
}

fn feed(name: &str, status: CameraStatus, location: &str) -> Feed {
    Feed {
        name: name.to_string(),
        status,
        location: location.to_string(),
    }
}

pub fn feeds() -> Vec<Feed> {
    vec![
        feed("Front Entrance", CameraStatus::Online, "Main Gate"),
        feed("Parking Lot", CameraStatus::Online, "Zone A"),
        feed("Lobby Area", CameraStatus::Recording, "Ground Floor"),
        feed("Back Exit", CameraStatus::Online, "Rear Gate"),
    ]
}

pub fn dashboard_stats() -> Vec<QuickStat> {
    vec![
        QuickStat { title: "Active Cameras", value: "4", subtext: "All systems operational", accent: BadgeColor::Slate },
        QuickStat { title: "Today's Events", value: "23", subtext: "+12% from yesterday", accent: BadgeColor::Slate },
        QuickStat { title: "Active Alerts", value: "3", subtext: "2 high priority", accent: BadgeColor::Red },
        QuickStat { title: "System Health", value: "98%", subtext: "Excellent performance", accent: BadgeColor::Slate },
    ]
}

pub fn event_stats() -> Vec<QuickStat> {
    vec![
        QuickStat { title: "Total Events", value: "156", subtext: "Today", accent: BadgeColor::Slate },
        QuickStat { title: "High Priority", value: "12", subtext: "Needs attention", accent: BadgeColor::Red },
        QuickStat { title: "Active Cameras", value: "8", subtext: "Recording", accent: BadgeColor::Slate },
        QuickStat { title: "Avg Response", value: "2.3min", subtext: "Resolution time", accent: BadgeColor::Slate },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let camera_ids: HashSet<u32> = cameras().iter().map(|c| c.id).collect();
        assert_eq!(camera_ids.len(), cameras().len());

        let event_ids: HashSet<u32> = events().iter().map(|e| e.id).collect();
        assert_eq!(event_ids.len(), events().len());
    }

    #[test]
    fn test_seed_sizes() {
        assert_eq!(cameras().len(), 5);
        assert_eq!(events().len(), 5);
        assert_eq!(recent_alerts().len(), 4);
        assert_eq!(feeds().len(), 4);
        assert_eq!(dashboard_stats().len(), 4);
        assert_eq!(event_stats().len(), 4);
    }

    #[test]
    fn test_seeded_enums_are_all_known() {
        assert!(cameras().iter().all(|c| c.status != CameraStatus::Unknown));
        assert!(events().iter().all(|e| e.severity != Severity::Unknown));
        assert!(events().iter().all(|e| e.occurred_at().is_some()), "Seeded timestamps should parse");
    }
}
