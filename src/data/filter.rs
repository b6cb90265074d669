use std::collections::BTreeSet;

use super::model::{Dataset, Record, Species};

// ---------------------------------------------------------------------------
// Filter predicate: which species are selected
// ---------------------------------------------------------------------------

/// Selected species. An empty set selects nothing.
pub type SpeciesFilter = BTreeSet<Species>;

/// Records passing the current filter, borrowed from the dataset.
pub type FilteredView<'a> = Vec<&'a Record>;

/// Initialise a [`SpeciesFilter`] with every species of the dataset selected.
pub fn init_species_filter(dataset: &Dataset) -> SpeciesFilter {
    dataset.species().into_iter().collect()
}

/// Return the dataset indices of records whose species is in `selected`,
/// ascending.
pub fn filtered_indices(dataset: &Dataset, selected: &SpeciesFilter) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| selected.contains(&rec.species))
        .map(|(i, _)| i)
        .collect()
}

/// Return the records whose species is in `selected`, in dataset order.
pub fn filter_by_species<'a>(dataset: &'a Dataset, selected: &SpeciesFilter) -> FilteredView<'a> {
    dataset
        .records()
        .iter()
        .filter(|rec| selected.contains(&rec.species))
        .collect()
}
