//! Column name normalization.

use crate::error::{InsightError, Result};
use std::collections::HashSet;

/// Normalize a column name: trim surrounding whitespace and lowercase.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalize a full header, failing on the first name that collides with
/// an earlier one.
///
/// Blank names are replaced by `unnamed: {position}`.
pub fn normalize_header<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut normalized = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let mut name = normalize_column_name(name.as_ref());
        if name.is_empty() {
            name = format!("unnamed: {}", idx);
        }
        if !seen.insert(name.clone()) {
            return Err(InsightError::DuplicateColumn(name));
        }
        normalized.push(name);
    }
    Ok(normalized)
}
