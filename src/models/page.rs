use serde::{Deserialize, Serialize};

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Dashboard,
    Cameras,
    Events,
    Alerts,
    Settings,
    Help,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::Cameras,
            Page::Events,
            Page::Alerts,
            Page::Settings,
            Page::Help,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Cameras => "Cameras",
            Page::Events => "Events",
            Page::Alerts => "Alerts",
            Page::Settings => "Settings",
            Page::Help => "Help",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "🏠",
            Page::Cameras => "📷",
            Page::Events => "🛡",
            Page::Alerts => "🔔",
            Page::Settings => "⚙",
            Page::Help => "❓",
        }
    }
}
