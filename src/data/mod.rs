//! Data structures for loaded tabular datasets.

mod cell;
mod normalize;
mod table;

pub use cell::{is_missing_token, Cell, ColumnType};
pub use normalize::{normalize_column_name, normalize_header};
pub use table::{Column, Table};
