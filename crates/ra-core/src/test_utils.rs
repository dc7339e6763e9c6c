//! Shared test helpers for building relations

use crate::cell::{Cell, Row};
use crate::relation::Relation;

/// Integer cell
pub fn int(value: i64) -> Cell {
    Cell::Integer(value)
}

/// Text cell
pub fn txt(value: &str) -> Cell {
    Cell::text(value)
}

/// Named relation from column names and rows; panics on invalid input
pub fn rel(name: &str, columns: &[&str], rows: Vec<Row>) -> Relation {
    Relation::named(name, cols(columns), rows).expect("valid test relation")
}

/// Owned column list
pub fn cols(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}
