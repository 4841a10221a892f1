//! CSV Insight Library
//!
//! Summary statistics and histograms for uploaded tabular datasets.
//!
//! # Overview
//!
//! The library is organized into small modules, each a stage of the
//! request pipeline:
//!
//! - **data**: CSV loading, column name normalization, typed columns
//! - **profile**: Shape, missing values and descriptive statistics
//! - **plot**: Histogram binning and headless PNG rendering
//! - **intake**: Storage of uploaded files under unique names
//! - **dashboard**: Request-level composition and configuration
//!
//! # Example
//!
//! ```no_run
//! use csv_insight::prelude::*;
//!
//! let table = Table::from_csv("uploads/data.csv").unwrap();
//! let report = summarize(&table);
//! println!("{}", report);
//!
//! let store = PlotStore::new("static/plots").unwrap();
//! let artifact = plot(&table, "age", &store, &PlotOptions::default()).unwrap();
//! println!("Histogram written to {:?}", artifact.path);
//! ```

pub mod dashboard;
pub mod data;
pub mod error;
pub mod intake;
pub mod plot;
pub mod profile;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::dashboard::{Dashboard, DashboardConfig, DashboardView};
    pub use crate::data::{normalize_column_name, Cell, Column, ColumnType, Table};
    pub use crate::error::{InsightError, Result};
    pub use crate::intake::UploadStore;
    pub use crate::plot::{plot, Histogram, PlotArtifact, PlotOptions, PlotStore};
    pub use crate::profile::{
        describe, profile_missing, summarize, ColumnStats, DescribeTable, MissingProfile,
        SummaryReport,
    };
}
