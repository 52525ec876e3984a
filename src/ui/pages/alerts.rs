use crate::models::{Alert, Page, Severity, TableFilterView};
use crate::ui::components::{card, AlertList, AlertListEvent, CategoryPicker, SearchBar, SearchBarEvent};
use crate::ui::pages::{empty_state, page_header, PageEvent};
use eframe::egui;

const SEARCHABLE: &[&str] = &["camera", "event", "description"];

pub struct AlertsPage {
    view: TableFilterView<Alert>,
    search_text: String,
    pickers: Vec<CategoryPicker>,
    search_bar: SearchBar,
    alert_list: AlertList,
}

impl AlertsPage {
    pub fn new(alerts: Vec<Alert>) -> Self {
        let severity_options = Severity::KNOWN
            .iter()
            .map(|severity| (severity.as_str().to_string(), severity.badge().label.to_string()))
            .collect();

        Self {
            view: TableFilterView::new(alerts, SEARCHABLE),
            search_text: String::new(),
            pickers: vec![CategoryPicker::new("severity", "Severity", severity_options)],
            search_bar: SearchBar::new("alerts", "Search alerts by camera, event or description..."),
            alert_list: AlertList::new(),
        }
    }

    pub fn view(&self) -> &TableFilterView<Alert> {
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

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<PageEvent> {
        let mut page_event = None;

        page_header(ui, "Alerts", "Recent detections that need attention");
        ui.add_space(12.0);

        let search_event = card(ui, |ui| {
            ui.set_width(ui.available_width());
            self.search_bar.show(ui, &mut self.search_text, &mut self.pickers)
        });
        if let Some(event) = search_event {
            self.apply_search_event(event);
        }
        ui.add_space(12.0);

        card(ui, |ui| {
            ui.set_width(ui.available_width());
            if self.view.is_empty_result() {
                let message = match (self.view.query(), self.view.category("severity")) {
                    ("", Some(severity)) => format!("No {} severity alerts.", severity),
                    ("", None) => "No alerts to show.".to_string(),
                    (query, _) => format!("No alerts match \"{}\".", query),
                };
                empty_state(ui, &message, "Try a different camera or event name.");
            } else {
                let visible = self.view.visible();
                if let Some(AlertListEvent::View(_)) = self.alert_list.show(ui, &visible) {
                    page_event = Some(PageEvent::Navigate(Page::Events));
                }
            }
        });

        page_event
    }
}
