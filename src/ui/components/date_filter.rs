use chrono::{Local, NaiveDate};
use eframe::egui;

#[derive(Debug, PartialEq, Eq)]
pub enum DateFilterEvent {
    Picked(NaiveDate),
    Cleared,
}

/// Calendar button plus an "All dates" reset.
pub struct DateFilter {
    id: &'static str,
    pick: NaiveDate,
}

impl DateFilter {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            pick: Local::now().date_naive(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, selected: Option<NaiveDate>) -> Option<DateFilterEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            if let Some(date) = selected {
                self.pick = date;
            }

            let response = ui.add(
                egui_extras::DatePickerButton::new(&mut self.pick)
                    .id_source(self.id)
                    .format(button_format(selected))
            );
            if response.changed() {
                event = Some(DateFilterEvent::Picked(self.pick));
            }

            if selected.is_some() {
                if ui.button("All dates").clicked() {
                    event = Some(DateFilterEvent::Cleared);
                }
            } else {
                ui.label(egui::RichText::new("All dates").italics());
            }
        });

        event
    }
}

/// Caption format for the picker button. With no active filter the button
/// shows a neutral caption instead of the date it would open on.
pub fn button_format(selected: Option<NaiveDate>) -> &'static str {
    match selected {
        Some(_) => "%b %d, %Y",
        None => "Date",
    }
}

/// "Jan 15, 2024" style heading for the selected date.
pub fn date_heading(selected: Option<NaiveDate>) -> String {
    selected
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "All dates".to_string())
}
