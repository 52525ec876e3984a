use eframe::egui;

/// A record that knows how to draw itself as one table row.
pub trait GridRecord {
    fn columns() -> &'static [&'static str];
    fn show_cell(&self, ui: &mut egui::Ui, column: usize);
}

#[derive(Debug, PartialEq, Eq)]
pub enum DataGridEvent {
    ViewRequested(usize),
}

pub struct DataGrid {
    id: &'static str,
}

impl DataGrid {
    pub fn new(id: &'static str) -> Self {
        Self { id }
    }

    /// Header captions in display order, with the trailing action column when enabled.
    pub fn header_labels<R: GridRecord>(with_actions: bool) -> Vec<&'static str> {
        let mut labels = R::columns().to_vec();
        if with_actions {
            labels.push("Actions");
        }
        labels
    }

    pub fn show<R: GridRecord>(
        &mut self,
        ui: &mut egui::Ui,
        records: &[&R],
        with_actions: bool,
    ) -> Option<DataGridEvent> {
        let mut event = None;
        let columns = R::columns();
        let labels = Self::header_labels::<R>(with_actions);

        ui.push_id(self.id, |ui| {
            use egui_extras::{Column, TableBuilder};

            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::initial(140.0).at_least(80.0).resizable(true).clip(true), columns.len());
            if with_actions {
                table = table.column(Column::exact(70.0));
            }

            table
                .header(24.0, |mut header| {
                    for label in &labels {
                        header.col(|ui| {
                            ui.strong(*label);
                        });
                    }
                })
                .body(|mut body| {
                    for (row_index, record) in records.iter().enumerate() {
                        body.row(30.0, |mut row_ui| {
                            for column in 0..columns.len() {
                                row_ui.col(|ui| {
                                    ui.style_mut().wrap = Some(false);
                                    record.show_cell(ui, column);
                                });
                            }

                            if with_actions {
                                row_ui.col(|ui| {
                                    if ui.small_button("👁 View").clicked() {
                                        event = Some(DataGridEvent::ViewRequested(row_index));
                                    }
                                });
                            }
                        });
                    }
                });
        });

        event
    }
}
