use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::color::{ColorMap, HIST_EDGE, HIST_FILL};
use crate::data::histogram::Histogram;
use crate::data::model::{Feature, Record, Species};

const PLOT_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

/// Points of one species, in view order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    pub points: Vec<[f64; 2]>,
}

/// Group the view into one series per species (species order), taking
/// `(x, y)` straight from the chosen features. Species with no records in
/// the view produce no series.
pub fn scatter_series(view: &[&Record], x: Feature, y: Feature) -> Vec<ScatterSeries> {
    Species::ALL
        .iter()
        .filter_map(|&species| {
            let points: Vec<[f64; 2]> = view
                .iter()
                .filter(|r| r.species == species)
                .map(|r| [r.value(x), r.value(y)])
                .collect();
            (!points.is_empty()).then_some(ScatterSeries { species, points })
        })
        .collect()
}

/// Render the species-coloured scatter plot of `x` against `y`.
pub fn scatter_plot(ui: &mut Ui, view: &[&Record], x: Feature, y: Feature, colors: &ColorMap) {
    ui.strong(format!("{x} vs {y}"));

    let series = scatter_series(view, x, y);
    if series.is_empty() {
        ui.label("No records selected.");
    }

    Plot::new("scatter_plot")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x.label())
        .y_axis_label(y.label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in series {
                let points = Points::new(s.points)
                    .name(s.species.name())
                    .color(colors.color_for(s.species))
                    .radius(3.0);
                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Render the bucket counts of `feature` over the view.
pub fn histogram_plot(ui: &mut Ui, view: &[&Record], feature: Feature, bins: usize) {
    ui.strong(format!("Histogram of {feature}"));

    let hist = Histogram::of_feature(view, feature, bins);
    let width = hist.bin_width();
    ui.label(format!("{} records in {} bins", hist.total(), hist.bins()));

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Bar::new(hist.center(i), c as f64)
                .width(width)
                .fill(HIST_FILL)
                .stroke(Stroke::new(1.0, HIST_EDGE))
        })
        .collect();

    Plot::new("histogram_plot")
        .height(PLOT_HEIGHT)
        .x_axis_label(feature.label())
        .y_axis_label("Count")
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(feature.label()));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{SpeciesFilter, filter_by_species, init_species_filter};
    use crate::data::loader::load_iris;

    #[test]
    fn test_scatter_one_point_per_record() {
        let ds = load_iris().unwrap();
        let view = filter_by_species(&ds, &init_species_filter(&ds));
        let series = scatter_series(&view, Feature::SepalLength, Feature::PetalWidth);

        assert_eq!(series.len(), 3);
        let total: usize = series.iter().map(|s| s.points.len()).sum();
        assert_eq!(total, 150);
        assert_eq!(series[0].species, Species::Setosa);
        assert_eq!(series[0].points[0], [5.1, 0.2]);
    }

    #[test]
    fn test_scatter_empty_view() {
        let ds = load_iris().unwrap();
        let view = filter_by_species(&ds, &SpeciesFilter::new());
        assert!(scatter_series(&view, Feature::SepalLength, Feature::SepalWidth).is_empty());
    }

    #[test]
    fn test_scatter_skips_unselected_species() {
        let ds = load_iris().unwrap();
        let view = filter_by_species(&ds, &SpeciesFilter::from([Species::Virginica]));
        let series = scatter_series(&view, Feature::PetalLength, Feature::PetalWidth);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].species, Species::Virginica);
        assert_eq!(series[0].points.len(), 50);
        assert_eq!(series[0].points[0], [6.0, 2.5]);
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let ds = load_iris().unwrap();
        let view = filter_by_species(&ds, &init_species_filter(&ds));
        let a = scatter_series(&view, Feature::PetalLength, Feature::SepalWidth);
        let b = scatter_series(&view, Feature::PetalLength, Feature::SepalWidth);
        assert_eq!(a, b);
    }
}
