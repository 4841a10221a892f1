//! Histogram plotting for numeric columns.

mod artifact;
mod histogram;
mod render;
mod store;

pub use artifact::{plot, PlotArtifact};
pub use histogram::{Histogram, DEFAULT_BINS};
pub use render::{parse_hex_color, render_histogram, PlotOptions};
pub use store::PlotStore;
