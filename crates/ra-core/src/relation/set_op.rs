//! Union, intersection, and difference over schema-compatible relations

use super::Relation;
use crate::cell::Row;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetOpKind {
    /// ∪
    Union,
    /// ∩
    Intersect,
    /// -
    Difference,
}

impl SetOpKind {
    fn operation_name(self) -> &'static str {
        match self {
            SetOpKind::Union => "union",
            SetOpKind::Intersect => "intersection",
            SetOpKind::Difference => "difference",
        }
    }
}

impl std::fmt::Display for SetOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.operation_name())
    }
}

impl Relation {
    /// Apply a set operation.
    ///
    /// Both operands must have the same column set. Rows of the right operand
    /// are read in the left operand's column order; the result takes the
    /// left schema.
    pub fn set_operation(&self, other: &Relation, kind: SetOpKind) -> CoreResult<Relation> {
        let right_rows = self.aligned_rows(other, kind)?;
        let rows = match kind {
            SetOpKind::Union => self.rows().iter().cloned().chain(right_rows).collect(),
            SetOpKind::Intersect | SetOpKind::Difference => {
                let right_set: HashSet<Row> = right_rows.into_iter().collect();
                let keep = kind == SetOpKind::Intersect;
                self.rows()
                    .iter()
                    .filter(|row| right_set.contains(*row) == keep)
                    .cloned()
                    .collect()
            }
        };
        Ok(Relation::from_parts(self.columns().to_vec(), rows))
    }

    /// ∪: rows of either operand
    pub fn union(&self, other: &Relation) -> CoreResult<Relation> {
        self.set_operation(other, SetOpKind::Union)
    }

    /// ∩: rows present in both operands
    pub fn intersection(&self, other: &Relation) -> CoreResult<Relation> {
        self.set_operation(other, SetOpKind::Intersect)
    }

    /// -: rows of this relation absent from the other
    pub fn difference(&self, other: &Relation) -> CoreResult<Relation> {
        self.set_operation(other, SetOpKind::Difference)
    }

    /// Rows of `other` reordered to this relation's column order
    fn aligned_rows(&self, other: &Relation, kind: SetOpKind) -> CoreResult<Vec<Row>> {
        let mismatch = || CoreError::SchemaMismatch {
            operation: kind.operation_name(),
            left: self.columns().join(", "),
            right: other.columns().join(", "),
        };
        if self.columns().len() != other.columns().len() {
            return Err(mismatch());
        }
        let order = self
            .columns()
            .iter()
            .map(|c| other.column_index(c))
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(mismatch)?;

        Ok(other
            .rows()
            .iter()
            .map(|row| order.iter().map(|&i| row[i].clone()).collect())
            .collect())
    }
}

#[cfg(test)]
#[path = "set_op_test.rs"]
mod tests;
