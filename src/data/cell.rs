//! Cell values and column type tags.

use serde::{Deserialize, Serialize};

/// Tokens read as missing values, matching the defaults of common
/// dataframe readers.
const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single cell in a table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Numeric value.
    Number(f64),
    /// Free-form text.
    Text(String),
    /// Missing value.
    Missing,
}

impl Cell {
    /// Check if this is a missing value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Try to get as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Type tag inferred once per column while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Numeric,
    Text,
}

/// Check if a raw field denotes a missing value.
///
/// Any spelling that parses to NaN (`NAN`, `Nan`, ...) is missing too.
pub fn is_missing_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || MISSING_TOKENS.contains(&trimmed)
        || trimmed.parse::<f64>().is_ok_and(f64::is_nan)
}

/// Parse a raw field as a number, ignoring surrounding whitespace.
/// NaN is never returned.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
