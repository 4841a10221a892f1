//! Missing value profiling.

use crate::data::Table;
use serde::{Deserialize, Serialize};

/// Missing value counts per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingProfile {
    /// (column, missing count) in column order.
    pub per_column: Vec<(String, usize)>,
    /// Sum of all per-column counts.
    pub total: usize,
}

impl MissingProfile {
    /// Missing count for a column, if it exists.
    pub fn get(&self, column: &str) -> Option<usize> {
        self.per_column
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, n)| *n)
    }

    /// Columns with at least one missing cell.
    pub fn columns_with_missing(&self) -> Vec<&str> {
        self.per_column
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl std::fmt::Display for MissingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Missing Values")?;
        let width = self
            .per_column
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, n) in &self.per_column {
            writeln!(f, "  {:<width$}  {}", name, n, width = width)?;
        }
        writeln!(f, "  Total: {}", self.total)?;
        Ok(())
    }
}

/// Count missing cells in every column of a table.
pub fn profile_missing(table: &Table) -> MissingProfile {
    let per_column: Vec<(String, usize)> = table
        .columns()
        .iter()
        .map(|c| (c.name().to_string(), c.n_missing()))
        .collect();
    let total = per_column.iter().map(|(_, n)| n).sum();

    MissingProfile { per_column, total }
}
