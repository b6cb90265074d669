use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Dataset, Feature};

const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 240.0;

/// Render a read-only table of the records at `indices`: dataset index,
/// four features, species.
pub fn record_table(ui: &mut Ui, id: &str, dataset: &Dataset, indices: &[usize]) {
    if indices.is_empty() {
        ui.label("No records.");
        return;
    }

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(true)
            .max_scroll_height(MAX_TABLE_HEIGHT)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(40.0))
            .columns(Column::auto().at_least(110.0), Feature::ALL.len())
            .column(Column::remainder().at_least(80.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for feature in Feature::ALL {
                    header.col(|ui| {
                        ui.strong(feature.label());
                    });
                }
                header.col(|ui| {
                    ui.strong("species");
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, indices.len(), |mut row| {
                    let idx = indices[row.index()];
                    let rec = &dataset.records()[idx];
                    row.col(|ui| {
                        ui.label(idx.to_string());
                    });
                    for feature in Feature::ALL {
                        row.col(|ui| {
                            ui.label(format!("{:.1}", rec.value(feature)));
                        });
                    }
                    row.col(|ui| {
                        ui.label(rec.species.name());
                    });
                });
            });
    });
}
