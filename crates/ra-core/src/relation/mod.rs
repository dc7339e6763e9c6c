//! Immutable relations and the relational-algebra operations on them
//!
//! A relation is an ordered list of uniquely named columns plus a
//! duplicate-free list of rows. Every operation returns a new relation; the
//! operands are never modified.

pub mod join;
pub mod set_op;

use crate::cell::Row;
use crate::error::{CoreError, CoreResult};
use crate::predicate::Predicate;
use crate::relation_name::RelationName;
use serde::Serialize;
use std::collections::HashSet;

/// An immutable relation
#[derive(Debug, Clone, Serialize)]
pub struct Relation {
    /// Optional name (unset for unassigned results)
    name: Option<RelationName>,
    /// Ordered, unique column names
    columns: Vec<String>,
    /// Distinct rows in first-seen order
    rows: Vec<Row>,
}

impl Relation {
    /// Build an unnamed relation from columns and rows.
    ///
    /// Duplicate rows are dropped, keeping the first occurrence.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> CoreResult<Self> {
        validate_columns(&columns)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(CoreError::RowWidthMismatch {
                    row: i + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self::from_parts(columns, rows))
    }

    /// Build a named relation from columns and rows
    pub fn named(
        name: impl Into<RelationName>,
        columns: Vec<String>,
        rows: Vec<Row>,
    ) -> CoreResult<Self> {
        Ok(Self::new(columns, rows)?.with_name(Some(name.into())))
    }

    /// Assemble a relation whose schema is already known to be valid
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            name: None,
            columns,
            rows: dedup_rows(rows),
        }
    }

    /// Return a copy of this relation carrying a different name
    pub fn with_name(self, name: Option<RelationName>) -> Self {
        Self { name, ..self }
    }

    /// Relation name, if assigned
    pub fn name(&self) -> Option<&RelationName> {
        self.name.as_ref()
    }

    /// Name for diagnostics; unnamed relations display as `(unnamed)`
    pub fn label(&self) -> &str {
        self.name.as_ref().map_or("(unnamed)", |n| n.as_str())
    }

    /// Ordered column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in first-seen order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the relation has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the schema
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Position of a column, or `UnknownColumn`
    pub fn require_column(&self, column: &str) -> CoreResult<usize> {
        self.column_index(column)
            .ok_or_else(|| CoreError::UnknownColumn {
                column: column.to_string(),
                relation: self.label().to_string(),
            })
    }

    /// Whether the relation holds this exact tuple
    pub fn contains_row(&self, row: &[crate::cell::Cell]) -> bool {
        self.rows.iter().any(|r| r.as_slice() == row)
    }

    /// Whether both relations have the same columns (in order) and the same row set
    pub fn same_content(&self, other: &Relation) -> bool {
        if self.columns != other.columns || self.rows.len() != other.rows.len() {
            return false;
        }
        let ours: HashSet<&Row> = self.rows.iter().collect();
        other.rows.iter().all(|r| ours.contains(r))
    }

    /// σ: keep the rows for which the predicate holds
    pub fn selection(&self, predicate: &Predicate) -> CoreResult<Relation> {
        let bound = predicate.bind(self)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| bound.matches(row))
            .cloned()
            .collect();
        Ok(Self::from_parts(self.columns.clone(), rows))
    }

    /// π: keep exactly the listed columns, in the listed order
    pub fn projection<S: AsRef<str>>(&self, columns: &[S]) -> CoreResult<Relation> {
        let names: Vec<String> = columns.iter().map(|c| c.as_ref().to_string()).collect();
        validate_columns(&names)?;
        let indices = names
            .iter()
            .map(|c| self.require_column(c))
            .collect::<CoreResult<Vec<_>>>()?;
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(Self::from_parts(names, rows))
    }
}

/// Reject empty or repeated column names
fn validate_columns(columns: &[String]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if column.is_empty() {
            return Err(CoreError::InvalidColumnName {
                column: column.clone(),
            });
        }
        if !seen.insert(column.as_str()) {
            return Err(CoreError::DuplicateColumn {
                column: column.clone(),
            });
        }
    }
    Ok(())
}

/// Drop repeated rows, keeping the first occurrence
fn dedup_rows(rows: Vec<Row>) -> Vec<Row> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|row| seen.insert(row.clone())).collect()
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
