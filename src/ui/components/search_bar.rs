use eframe::egui;

/// A dropdown that narrows a table to one value of `field`.
#[derive(Debug, Clone)]
pub struct CategoryPicker {
    pub field: &'static str,
    pub label: &'static str,
    /// (value, display label) pairs.
    pub options: Vec<(String, String)>,
    pub selected: Option<String>,
}

impl CategoryPicker {
    pub fn new(field: &'static str, label: &'static str, options: Vec<(String, String)>) -> Self {
        Self {
            field,
            label,
            options,
            selected: None,
        }
    }

    fn selected_text(&self) -> String {
        match &self.selected {
            Some(value) => self
                .options
                .iter()
                .find(|(candidate, _)| candidate == value)
                .map(|(_, label)| label.clone())
                .unwrap_or_else(|| value.clone()),
            None => format!("{}: All", self.label),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SearchBarEvent {
    QueryChanged,
    CategoryChanged(&'static str),
}

pub struct SearchBar {
    id: &'static str,
    hint: &'static str,
}

impl SearchBar {
    pub fn new(id: &'static str, hint: &'static str) -> Self {
        Self { id, hint }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        search_text: &mut String,
        pickers: &mut [CategoryPicker],
    ) -> Option<SearchBarEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.label("🔍");
            let response = ui.add(
                egui::TextEdit::singleline(search_text)
                    .hint_text(self.hint)
                    .desired_width(320.0)
            );
            if response.changed() {
                event = Some(SearchBarEvent::QueryChanged);
            }

            if !search_text.is_empty() && ui.small_button("✖").on_hover_text("Clear search").clicked() {
                search_text.clear();
                event = Some(SearchBarEvent::QueryChanged);
            }

            ui.separator();

            for picker in pickers.iter_mut() {
                let mut changed = false;
                egui::ComboBox::from_id_source(format!("{}_{}", self.id, picker.field))
                    .selected_text(picker.selected_text())
                    .width(150.0)
                    .show_ui(ui, |ui| {
                        if ui.selectable_value(&mut picker.selected, None, "All").clicked() {
                            changed = true;
                        }
                        for (value, label) in &picker.options {
                            if ui.selectable_value(&mut picker.selected, Some(value.clone()), label).clicked() {
                                changed = true;
                            }
                        }
                    });
                if changed {
                    event = Some(SearchBarEvent::CategoryChanged(picker.field));
                }
            }
        });

        event
    }
}
