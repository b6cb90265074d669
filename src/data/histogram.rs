//! Equal-width histogram bucketing over one feature of a view.

use super::model::{Feature, Record};

/// Bucket counts over `edges.len() - 1` equal-width bins.
///
/// Every bin is half-open `[lo, hi)` except the last, which also holds
/// the upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bucket `values` into `bins` equal-width bins spanning their range.
    ///
    /// A degenerate range (all values equal) widens to ±0.5 around the value;
    /// an empty input spans `[0, 1]` with all counts zero.
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if values.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let span = hi - lo;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| lo + span * (i as f64 / bins as f64))
            .collect();

        // Bin lookup against the edges themselves, so a value lying exactly on
        // an interior edge lands in the bin that edge opens.
        let mut counts = vec![0u64; bins];
        for &v in values {
            let idx = edges.partition_point(|e| *e <= v).saturating_sub(1);
            counts[idx.min(bins - 1)] += 1;
        }

        Histogram { edges, counts }
    }

    /// Histogram of one feature across the records of a view.
    pub fn of_feature(view: &[&Record], feature: Feature, bins: usize) -> Self {
        let values: Vec<f64> = view.iter().map(|r| r.value(feature)).collect();
        Self::compute(&values, bins)
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if self.bins() > 0 => (hi - lo) / self.bins() as f64,
            _ => 0.0,
        }
    }

    /// Midpoint of bin `i`.
    pub fn center(&self, i: usize) -> f64 {
        (self.edges[i] + self.edges[i + 1]) / 2.0
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
