//! Equal-width histogram binning.

use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};

/// Default number of histogram bins.
pub const DEFAULT_BINS: usize = 20;

/// Counts of values falling into equal-width bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` values in increasing order.
    pub edges: Vec<f64>,
    /// Number of values per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin values into `bins` equal-width bins spanning their observed range.
    ///
    /// Every bin is half-open except the last, which also includes the
    /// maximum. When all values are equal the range is widened to
    /// `[v - 0.5, v + 0.5]`.
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(InsightError::InvalidParameter(
                "histogram needs at least one bin".to_string(),
            ));
        }
        if values.is_empty() {
            return Err(InsightError::InvalidParameter(
                "histogram needs at least one value".to_string(),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(InsightError::InvalidParameter(
                "histogram values must be finite".to_string(),
            ));
        }

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        if !width.is_finite() {
            return Err(InsightError::InvalidParameter(
                "histogram value range is too wide".to_string(),
            ));
        }
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Lower edge of the first bin.
    pub fn min(&self) -> f64 {
        self.edges[0]
    }

    /// Upper edge of the last bin.
    pub fn max(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Iterate over (lower edge, upper edge, count) per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}
