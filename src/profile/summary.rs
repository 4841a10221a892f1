//! Dataset summary combining shape, missing counts and statistics.

use super::describe::{describe, DescribeTable};
use super::missing::profile_missing;
use crate::data::Table;
use log::debug;
use serde::{Deserialize, Serialize};

/// Summary of a loaded table, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// (rows, columns).
    pub shape: (usize, usize),
    /// Missing cell count per column, in column order.
    pub missing_per_column: Vec<(String, usize)>,
    /// Sum of `missing_per_column`.
    pub total_missing: usize,
    /// Statistics for numeric columns.
    pub describe_table: DescribeTable,
    /// Numeric column names in column order.
    pub numeric_columns: Vec<String>,
}

impl SummaryReport {
    /// Missing count for a column, if it exists.
    pub fn missing(&self, column: &str) -> Option<usize> {
        self.missing_per_column
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, n)| *n)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.shape.0
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.shape.1
    }

    /// Statistics table rendered as HTML.
    pub fn describe_html(&self) -> String {
        self.describe_table.to_html()
    }
}

impl std::fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dataset Summary")?;
        writeln!(f, "===============")?;
        writeln!(f)?;
        writeln!(f, "Shape: {} rows x {} columns", self.shape.0, self.shape.1)?;
        writeln!(f)?;
        writeln!(f, "Missing values:")?;
        let width = self
            .missing_per_column
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, n) in &self.missing_per_column {
            writeln!(f, "  {:<width$}  {}", name, n, width = width)?;
        }
        writeln!(f, "  Total: {}", self.total_missing)?;
        writeln!(f)?;
        writeln!(f, "Numeric columns: {}", self.numeric_columns.join(", "))?;
        writeln!(f)?;
        write!(f, "{}", self.describe_table)?;
        Ok(())
    }
}

/// Summarize a table. Works on any table, including empty ones.
pub fn summarize(table: &Table) -> SummaryReport {
    let missing = profile_missing(table);
    let describe_table = describe(table);
    let numeric_columns = table
        .numeric_columns()
        .into_iter()
        .map(String::from)
        .collect();

    debug!(
        "Summarized {:?} table: {} missing cells, {} numeric columns",
        table.shape(),
        missing.total,
        describe_table.columns.len()
    );

    SummaryReport {
        shape: table.shape(),
        missing_per_column: missing.per_column,
        total_missing: missing.total,
        describe_table,
        numeric_columns,
    }
}
