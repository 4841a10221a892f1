//! Descriptive statistics for numeric columns.

use crate::data::{Column, Table};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::fmt::Write as _;

/// Row labels of the statistics table, in display order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// CSS classes attached to the rendered HTML table.
const HTML_CLASSES: &str = "table table-striped table-hover";

/// Descriptive statistics for a single numeric column.
///
/// All statistics ignore missing cells. Values that are undefined for the
/// observed count (e.g. `std` with fewer than two values) are `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Column name.
    pub column: String,
    /// Number of non-missing values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    /// Minimum value.
    pub min: f64,
    /// 25th percentile.
    pub q25: f64,
    /// Median.
    pub q50: f64,
    /// 75th percentile.
    pub q75: f64,
    /// Maximum value.
    pub max: f64,
}

impl ColumnStats {
    /// Statistic values in `STAT_LABELS` order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

/// Statistics table covering every numeric column of a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeTable {
    /// One entry per numeric column, in column order.
    pub columns: Vec<ColumnStats>,
}

impl DescribeTable {
    /// Check if there were no numeric columns to describe.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get statistics for a column.
    pub fn get(&self, column: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|s| s.column == column)
    }

    /// Render as an HTML table fragment.
    ///
    /// Columns become table columns and statistics become rows. An empty
    /// table renders a placeholder paragraph instead.
    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return "<p class=\"text-muted\">No numeric columns to describe.</p>".to_string();
        }

        let mut html = String::new();
        let _ = writeln!(html, "<table border=\"1\" class=\"dataframe {}\">", HTML_CLASSES);
        html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n      <th></th>\n");
        for stats in &self.columns {
            let _ = writeln!(html, "      <th>{}</th>", escape_html(&stats.column));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
        for (row, label) in STAT_LABELS.iter().enumerate() {
            html.push_str("    <tr>\n");
            let _ = writeln!(html, "      <th>{}</th>", label);
            for stats in &self.columns {
                let _ = writeln!(html, "      <td>{}</td>", format_stat(stats.values()[row]));
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>");
        html
    }
}

impl std::fmt::Display for DescribeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(no numeric columns)");
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|s| {
                s.values()
                    .iter()
                    .map(|v| format_stat(*v).len())
                    .chain(std::iter::once(s.column.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<5}", "")?;
        for (stats, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", stats.column, width = *width)?;
        }
        writeln!(f)?;
        for (row, label) in STAT_LABELS.iter().enumerate() {
            write!(f, "{:<5}", label)?;
            for (stats, width) in self.columns.iter().zip(&widths) {
                write!(f, "  {:>width$}", format_stat(stats.values()[row]), width = *width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Compute descriptive statistics for every numeric column.
pub fn describe(table: &Table) -> DescribeTable {
    let numeric: Vec<&Column> = table.columns().iter().filter(|c| c.is_numeric()).collect();
    let columns = numeric.par_iter().map(|c| describe_column(c)).collect();
    DescribeTable { columns }
}

/// Compute descriptive statistics for one column's non-missing values.
pub fn describe_column(column: &Column) -> ColumnStats {
    let mut values = column.numeric_values();
    values.sort_by(|a, b| a.total_cmp(b));
    let data: &[f64] = &values;

    ColumnStats {
        column: column.name().to_string(),
        count: values.len(),
        mean: Statistics::mean(data),
        std: Statistics::std_dev(data),
        min: Statistics::min(data),
        q25: quantile(data, 0.25),
        q50: quantile(data, 0.50),
        q75: quantile(data, 0.75),
        max: Statistics::max(data),
    }
}

/// Quantile of sorted values using linear interpolation between the two
/// nearest ranks. Returns `NaN` for empty input.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn format_stat(value: f64) -> String {
    format!("{:.6}", value)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table_from(header: &[&str], rows: &[&[&str]]) -> Table {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        Table::from_records(header, &rows).unwrap()
    }

    #[test]
    fn test_quantile_interpolation() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile(&v, 0.25), 1.75);
        assert_relative_eq!(quantile(&v, 0.50), 2.5);
        assert_relative_eq!(quantile(&v, 0.75), 3.25);
        assert_relative_eq!(quantile(&v, 0.0), 1.0);
        assert_relative_eq!(quantile(&v, 1.0), 4.0);
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_describe_column() {
        let table = table_from(&["x"], &[&["4"], &["1"], &[""], &["3"], &["2"]]);
        let stats = describe_column(table.column("x").unwrap());

        assert_eq!(stats.count, 4);
        assert_relative_eq!(stats.mean, 2.5);
        // Sample std of 1..=4
        assert_relative_eq!(stats.std, 1.2909944487358056, epsilon = 1e-12);
        assert_relative_eq!(stats.min, 1.0);
        assert_relative_eq!(stats.q25, 1.75);
        assert_relative_eq!(stats.q50, 2.5);
        assert_relative_eq!(stats.q75, 3.25);
        assert_relative_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_single_value_has_nan_std() {
        let table = table_from(&["x"], &[&["7"]]);
        let stats = describe_column(table.column("x").unwrap());
        assert_eq!(stats.count, 1);
        assert_relative_eq!(stats.mean, 7.0);
        assert!(stats.std.is_nan());
        assert_relative_eq!(stats.q75, 7.0);
    }

    #[test]
    fn test_all_missing_column() {
        let table = table_from(&["x"], &[&["NA"], &[""]]);
        let stats = describe_column(table.column("x").unwrap());
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.min.is_nan());
        assert!(stats.max.is_nan());
    }

    #[test]
    fn test_describe_skips_text_columns() {
        let table = table_from(&["name", "age", "score"], &[&["a", "1", "2"], &["b", "3", "4"]]);
        let described = describe(&table);
        let names: Vec<&str> = described.columns.iter().map(|s| s.column.as_str()).collect();
        assert_eq!(names, vec!["age", "score"]);
        assert!(described.get("name").is_none());
    }

    #[test]
    fn test_empty_placeholder() {
        let table = table_from(&["name"], &[&["a"]]);
        let described = describe(&table);
        assert!(described.is_empty());
        assert!(described.to_html().contains("No numeric columns"));
        assert_eq!(described.to_string(), "(no numeric columns)\n");
    }

    #[test]
    fn test_html_rendering() {
        let table = table_from(&["a<b"], &[&["1"], &["2"]]);
        let html = describe(&table).to_html();
        assert!(html.starts_with("<table"));
        assert!(html.contains("table table-striped table-hover"));
        assert!(html.contains("<th>a&lt;b</th>"));
        assert!(html.contains("<th>25%</th>"));
        assert!(html.contains("<td>1.500000</td>"));
    }

    #[test]
    fn test_text_rendering() {
        let table = table_from(&["age"], &[&["30"], &["50"]]);
        let text = describe(&table).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].trim_end().ends_with("age"));
        assert!(lines[2].starts_with("mean"));
        assert!(lines[2].contains("40.000000"));
    }
}
