use thiserror::Error;

use super::model::{Dataset, Feature, Record};

/// The classic 150-sample iris table, compiled into the binary.
const IRIS_CSV: &str = include_str!("../../assets/iris.csv");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("row {row}: {feature} must be a positive number, got {value}")]
    InvalidMeasurement {
        row: usize,
        feature: Feature,
        value: f64,
    },
    #[error("dataset contains no records")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the built-in iris dataset.
pub fn load_iris() -> Result<Dataset, DatasetError> {
    parse_csv(IRIS_CSV)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: header row
/// `sepal_length,sepal_width,petal_length,petal_width,species`, one sample
/// per line. Species must be one of `setosa`, `versicolor`, `virginica`.
pub fn parse_csv(text: &str) -> Result<Dataset, DatasetError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();

    for (i, result) in reader.deserialize::<Record>().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| DatasetError::Csv { row, source })?;

        for feature in Feature::ALL {
            let value = record.value(feature);
            if !value.is_finite() || value <= 0.0 {
                return Err(DatasetError::InvalidMeasurement {
                    row,
                    feature,
                    value,
                });
            }
        }

        records.push(record);
    }

    let dataset = Dataset::from_records(records);
    if dataset.is_empty() {
        return Err(DatasetError::Empty);
    }

    Ok(dataset)
}
