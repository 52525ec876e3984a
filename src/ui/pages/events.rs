use crate::models::{fixtures, QuickStat, SecurityEvent, Severity, TableFilterView};
use crate::ui::components::{
    card, date_heading, show_badge, CategoryPicker, DataGrid, DataGridEvent, DateFilter, DateFilterEvent,
    GridRecord, SearchBar, SearchBarEvent, StatCards,
};
use crate::ui::pages::{empty_state, page_header, PageEvent};
use crate::ui::{accent_color, SLATE_600, SLATE_900};
use eframe::egui;

const SEARCHABLE: &[&str] = &["camera", "event_type", "description"];

impl GridRecord for SecurityEvent {
    fn columns() -> &'static [&'static str] {
        &["Time", "Event", "Camera", "Severity", "Duration", "Description"]
    }

    fn show_cell(&self, ui: &mut egui::Ui, column: usize) {
        match column {
            0 => {
                ui.label(egui::RichText::new(self.time_of_day()).monospace().color(SLATE_900));
            }
            1 => {
                let kind = self.kind();
                ui.label(egui::RichText::new(kind.icon()).color(accent_color(kind.accent())));
                ui.label(egui::RichText::new(&self.event_type).strong());
            }
            2 => {
                ui.label(format!("📷 {}", self.camera));
            }
            3 => {
                show_badge(ui, None, self.severity.badge());
            }
            4 => {
                ui.label(egui::RichText::new(format!("🕐 {}", self.duration)).color(SLATE_600));
            }
            5 => {
                ui.add(egui::Label::new(&self.description).truncate(true));
            }
            _ => {}
        }
    }
}

pub struct EventsPage {
    view: TableFilterView<SecurityEvent>,
    stats: Vec<QuickStat>,
    search_text: String,
    pickers: Vec<CategoryPicker>,
    search_bar: SearchBar,
    date_filter: DateFilter,
    stat_cards: StatCards,
    data_grid: DataGrid,
}

impl EventsPage {
    pub fn new(events: Vec<SecurityEvent>) -> Self {
        let view = TableFilterView::new(events, SEARCHABLE);

        let severity_options = Severity::KNOWN
            .iter()
            .map(|severity| (severity.as_str().to_string(), severity.badge().label.to_string()))
            .collect();
        let camera_options = view
            .distinct_values("camera")
            .into_iter()
            .map(|value| (value.clone(), value))
            .collect();

        Self {
            view,
            stats: fixtures::event_stats(),
            search_text: String::new(),
            pickers: vec![
                CategoryPicker::new("severity", "Severity", severity_options),
                CategoryPicker::new("camera", "Camera", camera_options),
            ],
            search_bar: SearchBar::new("events", "Search events, cameras, or descriptions..."),
            date_filter: DateFilter::new("events_date"),
            stat_cards: StatCards::new(),
            data_grid: DataGrid::new("events_grid"),
        }
    }

    pub fn view(&self) -> &TableFilterView<SecurityEvent> {
        &self.view
    }

    fn apply_search_event(&mut self, event: SearchBarEvent) {
        match event {
            SearchBarEvent::QueryChanged => self.view.set_query(self.search_text.clone()),
            SearchBarEvent::CategoryChanged(field) => {
                let selected = self
                    .pickers
                    .iter()
                    .find(|picker| picker.field == field)
                    .and_then(|picker| picker.selected.clone());
                self.view.set_category(field, selected);
            }
        }
    }

    fn apply_date_event(&mut self, event: DateFilterEvent) {
        match event {
            DateFilterEvent::Picked(date) => self.view.set_date(Some(date)),
            DateFilterEvent::Cleared => self.view.set_date(None),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<PageEvent> {
        let mut page_event = None;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                page_header(ui, "Security Events", "Monitor and analyze security incidents across your premises");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⬇ Export").clicked() {
                    page_event = Some(PageEvent::Status("Export is not available in demo mode".to_string()));
                }
            });
        });
        ui.add_space(12.0);

        self.stat_cards.show(ui, &self.stats);
        ui.add_space(12.0);

        let (search_event, date_event) = card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let search_event = self.search_bar.show(ui, &mut self.search_text, &mut self.pickers);
                ui.separator();
                let date_event = self.date_filter.show(ui, self.view.date());
                (search_event, date_event)
            })
            .inner
        });
        if let Some(event) = search_event {
            self.apply_search_event(event);
        }
        if let Some(event) = date_event {
            self.apply_date_event(event);
        }
        ui.add_space(12.0);

        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Event Log").size(16.0).strong());
                ui.label(egui::RichText::new(date_heading(self.view.date())).color(SLATE_600));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} events", self.view.visible_count()));
                });
            });
            ui.separator();

            if self.view.is_empty_result() {
                empty_state(
                    ui,
                    "No events found for the selected criteria.",
                    "Try adjusting your search or date filters.",
                );
            } else {
                let visible = self.view.visible();
                if let Some(DataGridEvent::ViewRequested(idx)) = self.data_grid.show(ui, &visible, true) {
                    if let Some(event) = visible.get(idx) {
                        page_event = Some(PageEvent::Status(format!(
                            "{} on {} at {}: {}",
                            event.event_type, event.camera, event.timestamp, event.description
                        )));
                    }
                }
            }
        });

        page_event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn visible_ids(page: &EventsPage) -> Vec<u32> {
        page.view().visible().iter().map(|event| event.id).collect()
    }

    #[test]
    fn test_page_starts_on_all_dates() {
        let page = EventsPage::new(fixtures::events());

        assert_eq!(page.view().date(), None);
        assert_eq!(visible_ids(&page), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut page = EventsPage::new(fixtures::events());
        page.search_text = "after hours".to_string();
        page.apply_search_event(SearchBarEvent::QueryChanged);

        assert_eq!(visible_ids(&page), vec![5]);
    }

    #[test]
    fn test_grid_headers_match_event_columns() {
        assert_eq!(
            DataGrid::header_labels::<SecurityEvent>(true),
            vec!["Time", "Event", "Camera", "Severity", "Duration", "Description", "Actions"]
        );
    }

    #[test]
    fn test_picking_a_date_without_events_empties_the_table() {
        let mut page = EventsPage::new(fixtures::events());
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        page.apply_date_event(DateFilterEvent::Picked(date));
        assert!(page.view().is_empty_result());

        page.apply_date_event(DateFilterEvent::Cleared);
        assert_eq!(page.view().visible_count(), 5);
    }

    #[test]
    fn test_severity_and_search_combine() {
        let mut page = EventsPage::new(fixtures::events());
        page.pickers[0].selected = Some("low".to_string());
        page.apply_search_event(SearchBarEvent::CategoryChanged("severity"));
        assert_eq!(visible_ids(&page), vec![1, 5]);

        page.search_text = "entrance".to_string();
        page.apply_search_event(SearchBarEvent::QueryChanged);
        assert_eq!(visible_ids(&page), vec![1]);
    }
}
