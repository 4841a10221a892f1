//! Histogram artifacts for table columns.

use super::histogram::Histogram;
use super::render::{render_histogram, PlotOptions};
use super::store::PlotStore;
use crate::data::Table;
use crate::error::{InsightError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// A rendered histogram image. Written once, never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotArtifact {
    /// File name inside the plot store (`plot_{hex}.png`).
    pub name: String,
    /// Full path of the image.
    pub path: PathBuf,
    /// Plotted column.
    pub column: String,
    /// Number of non-missing values plotted.
    pub n_values: usize,
    /// Bins drawn in the image.
    pub histogram: Histogram,
}

/// Plot the distribution of one numeric column.
///
/// Missing cells are dropped before binning. Fails if the column does not
/// exist, is not numeric, or has no values left after dropping missing
/// cells. Each call writes a new file.
pub fn plot(
    table: &Table,
    column: &str,
    store: &PlotStore,
    options: &PlotOptions,
) -> Result<PlotArtifact> {
    let col = table.column(column)?;
    if !col.is_numeric() {
        return Err(InsightError::NonNumericColumn(column.to_string()));
    }
    let values = col.numeric_values();
    if values.is_empty() {
        return Err(InsightError::EmptyColumn(column.to_string()));
    }
    debug!(
        "Plotting '{}': {} values, {} missing dropped",
        column,
        values.len(),
        col.n_missing()
    );

    let histogram = Histogram::from_values(&values, options.bins)?;
    let (name, path) = store.reserve()?;
    if let Err(e) = render_histogram(&histogram, column, &path, options) {
        let _ = fs::remove_file(&path);
        return Err(e);
    }
    info!("Wrote histogram of '{}' to {:?}", column, path);

    Ok(PlotArtifact {
        name,
        path,
        column: column.to_string(),
        n_values: values.len(),
        histogram,
    })
}
