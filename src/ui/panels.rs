use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::Feature;
use crate::state::{AppState, BIN_RANGE};

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left panel: raw-data toggle, species filter, plot options.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Data");
            ui.separator();

            let mut show_raw = state.selection.show_raw;
            if ui.checkbox(&mut show_raw, "Show Raw Data").changed() {
                state.set_show_raw(show_raw);
            }
            ui.add_space(8.0);

            species_filter(ui, state);
            ui.add_space(8.0);

            ui.heading("Feature Plots");
            ui.separator();
            let current = state.selection.feature_x;
            if let Some(f) = feature_combo(ui, "feature_x", "Select X-axis feature", current) {
                state.set_feature_x(f);
            }
            let current = state.selection.feature_y;
            if let Some(f) = feature_combo(ui, "feature_y", "Select Y-axis feature", current) {
                state.set_feature_y(f);
            }
            ui.add_space(8.0);

            ui.heading("Feature Histogram");
            ui.separator();
            let current = state.selection.hist_feature;
            let label = "Select feature for histogram";
            if let Some(f) = feature_combo(ui, "hist_feature", label, current) {
                state.set_hist_feature(f);
            }

            let mut bins = state.selection.bins;
            ui.label("Number of bins");
            if ui.add(egui::Slider::new(&mut bins, BIN_RANGE)).changed() {
                state.set_bins(bins);
            }
        });
}

/// Species multi-select: one coloured checkbox per species plus All / None.
fn species_filter(ui: &mut Ui, state: &mut AppState) {
    let species = state.dataset.species();
    let n_selected = state.selection.species.len();

    ui.strong(format!("Select species to view  ({n_selected}/{})", species.len()));
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    for s in species {
        let mut checked = state.selection.species.contains(&s);
        let text = RichText::new(format!("{s}  ({})", state.dataset.count(s)))
            .color(state.color_map.color_for(s));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_species(s);
        }
    }
}

/// A feature selector. Returns the newly picked feature, if any.
fn feature_combo(ui: &mut Ui, id: &str, label: &str, current: Feature) -> Option<Feature> {
    let mut picked = None;
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.label())
        .width(ui.available_width() * 0.9)
        .show_ui(ui, |ui: &mut Ui| {
            for f in Feature::ALL {
                if ui.selectable_label(current == f, f.label()).clicked() && current != f {
                    picked = Some(f);
                }
            }
        });
    picked
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState, visible: usize) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Iris Dataset Explorer");
        ui.separator();
        ui.label(format!(
            "{} records loaded, {} visible",
            state.dataset.len(),
            visible
        ));
    });
}
