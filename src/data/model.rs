use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Species – the categorical label of a record
// ---------------------------------------------------------------------------

/// The three iris species. Ordering follows dataset order so that
/// `BTreeSet<Species>` iterates setosa → versicolor → virginica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn name(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Feature – one numeric measurement column
// ---------------------------------------------------------------------------

/// A measurement column. Closed set, so widget selections can never name an
/// unknown column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    /// Column label as shown in tables, selectors and axis titles.
    pub fn label(self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal length (cm)",
            Feature::SepalWidth => "sepal width (cm)",
            Feature::PetalLength => "petal length (cm)",
            Feature::PetalWidth => "petal width (cm)",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single measured flower sample.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Record {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: Species,
}

impl Record {
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::SepalLength => self.sepal_length,
            Feature::SepalWidth => self.sepal_width,
            Feature::PetalLength => self.petal_length,
            Feature::PetalWidth => self.petal_width,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The immutable record sequence, in load order.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Species present in the dataset, in first-seen order.
    pub fn species(&self) -> Vec<Species> {
        let mut seen = Vec::new();
        for rec in &self.records {
            if !seen.contains(&rec.species) {
                seen.push(rec.species);
            }
        }
        seen
    }

    /// Number of records carrying `species`.
    pub fn count(&self, species: Species) -> usize {
        self.records.iter().filter(|r| r.species == species).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(sepal_length: f64, species: Species) -> Record {
        Record {
            sepal_length,
            sepal_width: 3.0,
            petal_length: 1.5,
            petal_width: 0.2,
            species,
        }
    }

    #[test]
    fn test_value_selects_column() {
        let r = Record {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
            species: Species::Setosa,
        };
        assert_eq!(r.value(Feature::SepalLength), 5.1);
        assert_eq!(r.value(Feature::SepalWidth), 3.5);
        assert_eq!(r.value(Feature::PetalLength), 1.4);
        assert_eq!(r.value(Feature::PetalWidth), 0.2);
    }

    #[test]
    fn test_species_first_seen_order() {
        let ds = Dataset::from_records(vec![
            rec(6.3, Species::Virginica),
            rec(5.1, Species::Setosa),
            rec(6.4, Species::Virginica),
        ]);
        assert_eq!(ds.species(), vec![Species::Virginica, Species::Setosa]);
        assert_eq!(ds.count(Species::Virginica), 2);
        assert_eq!(ds.count(Species::Versicolor), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Feature::PetalWidth.to_string(), "petal width (cm)");
        assert_eq!(Species::Versicolor.to_string(), "versicolor");
        assert!(Species::Setosa < Species::Virginica);
    }
}
