mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::IrisExplorerApp;
use data::model::Species;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let dataset = data::loader::load_iris()
        .inspect_err(|e| log::error!("Failed to load dataset: {e}"))
        .context("loading iris dataset")?;

    log::info!(
        "Loaded {} records ({})",
        dataset.len(),
        Species::ALL
            .iter()
            .map(|s| format!("{s}: {}", dataset.count(*s)))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris Dataset Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(IrisExplorerApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running native window: {e}"))
}
