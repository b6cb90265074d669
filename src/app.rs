use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisExplorerApp {
    pub state: AppState,
}

impl IrisExplorerApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for IrisExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: selections ----
        // Drawn first so the view below reflects this frame's widget changes.
        egui::SidePanel::left("selection_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        let state = &self.state;
        let view = state.view();
        let sel = &state.selection;

        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, state, view.len());
        });

        // ---- Central panel: tables and plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading("Iris Dataset Explorer");
                    ui.label("Interactive visualization and exploration of the Iris dataset.");
                    ui.add_space(8.0);

                    if sel.show_raw {
                        ui.heading("Raw Dataset");
                        let all: Vec<usize> = (0..state.dataset.len()).collect();
                        table::record_table(ui, "raw_table", &state.dataset, &all);
                        ui.add_space(8.0);
                    }

                    ui.label(state.selection_caption());
                    let visible = state.visible_indices();
                    table::record_table(ui, "filtered_table", &state.dataset, &visible);
                    ui.add_space(12.0);

                    ui.heading("Feature Plots");
                    plot::scatter_plot(ui, &view, sel.feature_x, sel.feature_y, &state.color_map);
                    ui.add_space(12.0);

                    ui.heading("Feature Histogram");
                    plot::histogram_plot(ui, &view, sel.hist_feature, sel.bins);
                });
        });
    }
}
