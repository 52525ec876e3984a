use crate::ui::components::card;
use crate::ui::pages::page_header;
use eframe::egui;

const TOPICS: &[(&str, &str)] = &[
    ("Searching", "Type in a page's search box to narrow its table. Matching ignores case and looks inside names, locations and descriptions."),
    ("Filters", "Use the Status, Location, Severity and Camera pickers to keep only one value. Pick \"All\" to remove a filter."),
    ("Dates", "On the Events page, pick a day from the calendar to see only that day's events, or press \"All dates\" to see everything."),
    ("Live view", "Press View on a camera, or click a dashboard feed, to open its live view window."),
    ("Signing out", "Open the account menu in the top-right corner and choose Sign Out."),
];

pub struct HelpPage;

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        page_header(ui, "Help", "How to get around the dashboard");
        ui.add_space(12.0);

        for (title, body) in TOPICS {
            card(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(*title);
                ui.label(*body);
            });
            ui.add_space(8.0);
        }
    }
}
