use std::ops::RangeInclusive;

use crate::color::ColorMap;
use crate::data::filter::{
    FilteredView, SpeciesFilter, filter_by_species, filtered_indices, init_species_filter,
};
use crate::data::model::{Dataset, Feature, Species};

/// Allowed histogram bin counts.
pub const BIN_RANGE: RangeInclusive<usize> = 5..=50;
pub const DEFAULT_BINS: usize = 15;

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Widget values chosen by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    /// Whether the full dataset table is shown.
    pub show_raw: bool,
    /// Species passing the filter. Empty means nothing is shown.
    pub species: SpeciesFilter,
    pub feature_x: Feature,
    pub feature_y: Feature,
    pub hist_feature: Feature,
    pub bins: usize,
}

impl SelectionState {
    /// Defaults for a freshly loaded dataset: every species selected.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            show_raw: false,
            species: init_species_filter(dataset),
            feature_x: Feature::SepalLength,
            feature_y: Feature::SepalWidth,
            hist_feature: Feature::SepalLength,
            bins: DEFAULT_BINS,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The immutable dataset, loaded once at startup.
    pub dataset: Dataset,

    pub selection: SelectionState,

    /// Species colours for plots and filter labels.
    pub color_map: ColorMap,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let selection = SelectionState::for_dataset(&dataset);
        let color_map = ColorMap::new(&dataset.species());
        Self {
            dataset,
            selection,
            color_map,
        }
    }

    /// Records passing the current species filter. Recomputed on every call.
    pub fn view(&self) -> FilteredView<'_> {
        filter_by_species(&self.dataset, &self.selection.species)
    }

    /// Dataset indices of the records in [`AppState::view`].
    pub fn visible_indices(&self) -> Vec<usize> {
        filtered_indices(&self.dataset, &self.selection.species)
    }

    pub fn set_show_raw(&mut self, flag: bool) {
        self.selection.show_raw = flag;
    }

    /// Replace the species selection. Species absent from the dataset are dropped.
    pub fn set_species_filter(&mut self, selected: SpeciesFilter) {
        let known = self.dataset.species();
        self.selection.species = selected
            .into_iter()
            .filter(|s| known.contains(s))
            .collect();
        log::debug!("species filter: {:?}", self.selection.species);
    }

    /// Toggle a single species in the filter.
    pub fn toggle_species(&mut self, species: Species) {
        let mut selected = self.selection.species.clone();
        if !selected.remove(&species) {
            selected.insert(species);
        }
        self.set_species_filter(selected);
    }

    /// Select every species.
    pub fn select_all(&mut self) {
        self.set_species_filter(init_species_filter(&self.dataset));
    }

    /// Deselect every species.
    pub fn select_none(&mut self) {
        self.set_species_filter(SpeciesFilter::new());
    }

    pub fn set_feature_x(&mut self, feature: Feature) {
        log::debug!("scatter x: {feature}");
        self.selection.feature_x = feature;
    }

    pub fn set_feature_y(&mut self, feature: Feature) {
        log::debug!("scatter y: {feature}");
        self.selection.feature_y = feature;
    }

    pub fn set_hist_feature(&mut self, feature: Feature) {
        log::debug!("histogram feature: {feature}");
        self.selection.hist_feature = feature;
    }

    pub fn set_bins(&mut self, bins: usize) {
        self.selection.bins = bins.clamp(*BIN_RANGE.start(), *BIN_RANGE.end());
        log::debug!("histogram bins: {}", self.selection.bins);
    }

    /// Comma-separated names of the selected species.
    pub fn selection_caption(&self) -> String {
        let names: Vec<&str> = self.selection.species.iter().map(|s| s.name()).collect();
        format!("Showing data for: {}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_iris;

    fn state() -> AppState {
        AppState::new(load_iris().unwrap())
    }

    #[test]
    fn test_defaults() {
        let st = state();
        assert!(!st.selection.show_raw);
        assert_eq!(st.selection.species.len(), 3);
        assert_eq!(st.selection.feature_x, Feature::SepalLength);
        assert_eq!(st.selection.feature_y, Feature::SepalWidth);
        assert_eq!(st.selection.hist_feature, Feature::SepalLength);
        assert_eq!(st.selection.bins, 15);
        assert_eq!(st.view().len(), 150);
    }

    #[test]
    fn test_set_species_filter_setosa() {
        let mut st = state();
        st.set_species_filter(SpeciesFilter::from([Species::Setosa]));
        let view = st.view();
        assert_eq!(view.len(), 50);
        assert!(view.iter().all(|r| r.species == Species::Setosa));
        assert_eq!(st.selection_caption(), "Showing data for: setosa");
    }

    #[test]
    fn test_empty_selection_is_kept() {
        let mut st = state();
        st.select_none();
        assert!(st.selection.species.is_empty());
        assert!(st.view().is_empty());
        assert_eq!(st.selection_caption(), "Showing data for: ");

        st.select_all();
        assert_eq!(st.view().len(), 150);
    }

    #[test]
    fn test_toggle_species() {
        let mut st = state();
        st.toggle_species(Species::Versicolor);
        assert_eq!(st.view().len(), 100);
        assert!(!st.selection.species.contains(&Species::Versicolor));
        st.toggle_species(Species::Versicolor);
        assert_eq!(st.view().len(), 150);
        assert_eq!(
            st.selection_caption(),
            "Showing data for: setosa, versicolor, virginica"
        );
    }

    #[test]
    fn test_toggle_raw_data() {
        let mut st = state();
        st.set_show_raw(true);
        assert!(st.selection.show_raw);
        st.set_show_raw(false);
        assert!(!st.selection.show_raw);
        // The raw flag never touches the filtered view.
        st.set_show_raw(true);
        assert_eq!(st.view().len(), 150);
    }

    #[test]
    fn test_visible_indices_keep_dataset_positions() {
        let mut st = state();
        st.set_species_filter(SpeciesFilter::from([Species::Virginica]));
        let indices = st.visible_indices();
        assert_eq!(indices, (100..150).collect::<Vec<_>>());
    }

    #[test]
    fn test_bins_clamped() {
        let mut st = state();
        st.set_bins(2);
        assert_eq!(st.selection.bins, 5);
        st.set_bins(500);
        assert_eq!(st.selection.bins, 50);
        st.set_bins(25);
        assert_eq!(st.selection.bins, 25);
    }
}
