use crate::models::{Camera, CameraStatus, TableFilterView};
use crate::ui::components::{
    card, show_badge, CategoryPicker, DataGrid, DataGridEvent, GridRecord, LiveView, LiveViewDialog,
    LiveViewEvent, SearchBar, SearchBarEvent,
};
use crate::ui::pages::{empty_state, page_header, PageEvent};
use crate::ui::{badge_color, LIVE_RED, SLATE_600, SLATE_900};
use eframe::egui;

const SEARCHABLE: &[&str] = &["name", "location"];

impl GridRecord for Camera {
    fn columns() -> &'static [&'static str] {
        &["Camera", "Status", "Location", "Type", "Resolution", "Last Seen"]
    }

    fn show_cell(&self, ui: &mut egui::Ui, column: usize) {
        match column {
            0 => {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&self.name).strong().color(SLATE_900));
                    ui.label(egui::RichText::new(&self.ip).size(10.0).color(SLATE_600));
                });
            }
            1 => {
                show_badge(ui, Some(self.status.icon()), self.status.badge());
            }
            2 => {
                ui.label(format!("📍 {}", self.location));
            }
            3 => {
                ui.label(&self.tag);
            }
            4 => {
                ui.label(format!("{} • {}", self.resolution, self.fps));
            }
            5 => {
                if self.is_live() {
                    ui.label(egui::RichText::new("●").color(LIVE_RED));
                }
                ui.label(&self.last_seen);
            }
            _ => {}
        }
    }
}

pub struct CamerasPage {
    view: TableFilterView<Camera>,
    search_text: String,
    pickers: Vec<CategoryPicker>,
    search_bar: SearchBar,
    data_grid: DataGrid,
    live_view: Option<u32>,
    live_view_dialog: LiveViewDialog,
}

impl CamerasPage {
    pub fn new(cameras: Vec<Camera>) -> Self {
        let view = TableFilterView::new(cameras, SEARCHABLE);

        let status_options = view
            .distinct_values("status")
            .into_iter()
            .map(|value| {
                let label = CameraStatus::parse(&value).badge().label.to_string();
                (value, label)
            })
            .collect();
        let location_options = view
            .distinct_values("location")
            .into_iter()
            .map(|value| (value.clone(), value))
            .collect();

        Self {
            view,
            search_text: String::new(),
            pickers: vec![
                CategoryPicker::new("status", "Status", status_options),
                CategoryPicker::new("location", "Location", location_options),
            ],
            search_bar: SearchBar::new("cameras", "Search cameras by name or location..."),
            data_grid: DataGrid::new("cameras_grid"),
            live_view: None,
            live_view_dialog: LiveViewDialog::new(),
        }
    }

    pub fn view(&self) -> &TableFilterView<Camera> {
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

    fn status_count(&self, status: CameraStatus) -> usize {
        self.view.count_where(|camera| camera.status == status)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<PageEvent> {
        let mut page_event = None;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                page_header(ui, "Camera Management", "Monitor and configure all security cameras");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("📷 Add Camera").clicked() {
                    page_event = Some(PageEvent::Status("Adding cameras is not available in demo mode".to_string()));
                }
                if ui.button("⚙ Settings").clicked() {
                    page_event = Some(PageEvent::Navigate(crate::models::Page::Settings));
                }
            });
        });
        ui.add_space(12.0);

        // Status summary
        ui.columns(CameraStatus::KNOWN.len(), |columns| {
            for (column, status) in columns.iter_mut().zip(CameraStatus::KNOWN) {
                let count = self.status_count(status);
                card(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        let badge = status.badge();
                        ui.label(
                            egui::RichText::new(format!("{} {}", status.icon(), badge.label))
                                .color(badge_color(badge.color)),
                        );
                        ui.label(egui::RichText::new(count.to_string()).size(20.0).strong().color(SLATE_900));
                    });
                });
            }
        });
        ui.add_space(12.0);

        let search_event = card(ui, |ui| {
            ui.set_width(ui.available_width());
            self.search_bar.show(ui, &mut self.search_text, &mut self.pickers)
        });
        if let Some(event) = search_event {
            self.apply_search_event(event);
        }
        ui.add_space(12.0);

        let mut view_requested = None;
        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("All Cameras ({})", self.view.visible_count()))
                    .size(16.0)
                    .strong(),
            );
            ui.separator();

            if self.view.is_empty_result() {
                let message = if self.view.query().is_empty() {
                    "No cameras match the selected filters.".to_string()
                } else {
                    format!("No cameras match \"{}\".", self.view.query())
                };
                empty_state(ui, &message, "Try a different name or location.");
            } else {
                let visible = self.view.visible();
                if let Some(DataGridEvent::ViewRequested(idx)) = self.data_grid.show(ui, &visible, true) {
                    view_requested = visible.get(idx).map(|camera| camera.id);
                }
            }
        });
        if view_requested.is_some() {
            self.live_view = view_requested;
        }

        if let Some(id) = self.live_view {
            let target = self.view.records().iter().find(|camera| camera.id == id).map(LiveView::from);
            match target {
                Some(target) => {
                    if let Some(LiveViewEvent::Close) = self.live_view_dialog.show(ui.ctx(), &target) {
                        self.live_view = None;
                    }
                }
                None => self.live_view = None,
            }
        }

        page_event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    fn visible_names(page: &CamerasPage) -> Vec<String> {
        page.view().visible().iter().map(|camera| camera.name.clone()).collect()
    }

    #[test]
    fn test_grid_headers_match_camera_columns() {
        assert_eq!(
            DataGrid::header_labels::<Camera>(true),
            vec!["Camera", "Status", "Location", "Type", "Resolution", "Last Seen", "Actions"]
        );
        assert_eq!(DataGrid::header_labels::<Camera>(false).len(), 6);
    }

    #[test]
    fn test_typing_narrows_the_table() {
        let mut page = CamerasPage::new(fixtures::cameras());
        page.search_text = "front".to_string();
        page.apply_search_event(SearchBarEvent::QueryChanged);

        assert_eq!(visible_names(&page), vec!["Front Entrance"]);
    }

    #[test]
    fn test_status_picker_filters_by_status() {
        let mut page = CamerasPage::new(fixtures::cameras());
        page.pickers[0].selected = Some("online".to_string());
        page.apply_search_event(SearchBarEvent::CategoryChanged("status"));

        assert_eq!(visible_names(&page), vec!["Front Entrance", "Lobby Area"]);

        page.pickers[0].selected = None;
        page.apply_search_event(SearchBarEvent::CategoryChanged("status"));
        assert_eq!(page.view().visible_count(), 5);
    }

    #[test]
    fn test_status_counts_are_derived_from_records() {
        let page = CamerasPage::new(fixtures::cameras());

        assert_eq!(page.status_count(CameraStatus::Online), 2);
        assert_eq!(page.status_count(CameraStatus::Offline), 1);
        assert_eq!(page.status_count(CameraStatus::Recording), 1);
        assert_eq!(page.status_count(CameraStatus::Maintenance), 1);
    }

    #[test]
    fn test_picker_options_use_badge_labels() {
        let page = CamerasPage::new(fixtures::cameras());
        let labels: Vec<&str> = page.pickers[0].options.iter().map(|(_, label)| label.as_str()).collect();

        assert_eq!(labels, vec!["Online", "Offline", "Recording", "Maintenance"]);
        assert_eq!(page.pickers[1].options.len(), 5, "Every camera has its own location");
    }
}
