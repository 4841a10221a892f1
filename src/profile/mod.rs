//! Profiling primitives for summarizing loaded tables.

mod describe;
mod missing;
mod summary;

pub use describe::{describe, describe_column, quantile, ColumnStats, DescribeTable, STAT_LABELS};
pub use missing::{profile_missing, MissingProfile};
pub use summary::{summarize, SummaryReport};
