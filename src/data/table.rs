//! In-memory tabular data loaded from delimited text.

use super::cell::{is_missing_token, parse_number, Cell, ColumnType};
use super::normalize::normalize_header;
use crate::error::{InsightError, Result};
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A named, typed column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    cells: Vec<Cell>,
}

impl Column {
    /// Build a column from raw fields, inferring its type.
    ///
    /// The column is numeric when it has at least one row and every
    /// non-missing field parses as a number.
    pub fn from_raw<S: AsRef<str>>(name: String, raw: &[S]) -> Self {
        let all_numeric = !raw.is_empty()
            && raw.iter().all(|v| {
                let v = v.as_ref();
                is_missing_token(v) || parse_number(v).is_some()
            });
        let column_type = if all_numeric {
            ColumnType::Numeric
        } else {
            ColumnType::Text
        };

        let cells = raw
            .iter()
            .map(|v| {
                let v = v.as_ref();
                if is_missing_token(v) {
                    return Cell::Missing;
                }
                match column_type {
                    ColumnType::Numeric => parse_number(v).map(Cell::Number).unwrap_or(Cell::Missing),
                    ColumnType::Text => Cell::Text(v.to_string()),
                }
            })
            .collect();

        Self {
            name,
            column_type,
            cells,
        }
    }

    /// Column name (normalized).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inferred type of the column.
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Check if the column is numeric.
    pub fn is_numeric(&self) -> bool {
        self.column_type == ColumnType::Numeric
    }

    /// All cells in row order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of missing cells.
    pub fn n_missing(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    /// Non-missing numeric values in row order.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells.iter().filter_map(Cell::as_number).collect()
    }
}

/// A table of equally long, uniquely named columns.
///
/// Built fresh from file contents on every request and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Create a table from columns, checking that lengths agree and names
    /// are unique.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        let mut seen = HashSet::new();
        for column in &columns {
            if column.len() != n_rows {
                return Err(InsightError::DimensionMismatch {
                    expected: n_rows,
                    actual: column.len(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(InsightError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self { columns, n_rows })
    }

    /// Build a table from a header and row-major records.
    ///
    /// Header names are normalized (trimmed, lowercased) and column types
    /// are inferred from the values.
    pub fn from_records<S: AsRef<str>>(header: &[S], rows: &[Vec<String>]) -> Result<Self> {
        let names = normalize_header(header)?;
        let n_columns = names.len();

        let mut raw_columns: Vec<Vec<&str>> = vec![Vec::with_capacity(rows.len()); n_columns];
        for row in rows {
            if row.len() != n_columns {
                return Err(InsightError::DimensionMismatch {
                    expected: n_columns,
                    actual: row.len(),
                });
            }
            for (col_idx, value) in row.iter().enumerate() {
                raw_columns[col_idx].push(value.as_str());
            }
        }

        let columns = names
            .into_iter()
            .zip(raw_columns)
            .map(|(name, raw)| Column::from_raw(name, &raw))
            .collect();
        Self::new(columns)
    }

    /// Load a table from CSV data.
    ///
    /// The first record is the header. Every record must have the same
    /// number of fields as the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let header: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();
        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        Self::from_records(&header, &rows)
    }

    /// Load a table from a CSV file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} rows x {} columns from {:?}",
            table.n_rows(),
            table.n_columns(),
            path
        );
        Ok(table)
    }

    /// Shape as (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| InsightError::ColumnNotFound(name.to_string()))
    }

    /// Check if a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Names of numeric columns in order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(Column::name)
            .collect()
    }
}
