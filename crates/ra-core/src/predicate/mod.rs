//! Selection predicates
//!
//! A predicate is a boolean combination of comparisons between column
//! references and literals, e.g. `b=='x' and a>=2`. It is parsed once and
//! then bound to a relation's schema before rows are filtered.

mod parser;

use crate::cell::{Cell, Row};
use crate::error::{CoreError, CoreResult};
use crate::relation::Relation;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// Equality (==)
    Eq,
    /// Inequality (!=)
    NotEq,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    LtEq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    GtEq,
}

impl CompareOp {
    /// Apply the operator to two cells.
    ///
    /// A null equals only another null and `!=` negates `==`. Ordering
    /// comparisons involving a null are false.
    pub fn apply(self, left: &Cell, right: &Cell) -> bool {
        match self {
            CompareOp::Eq => left == right,
            CompareOp::NotEq => left != right,
            CompareOp::Lt => left.compare(right) == Some(Ordering::Less),
            CompareOp::LtEq => matches!(
                left.compare(right),
                Some(Ordering::Less | Ordering::Equal)
            ),
            CompareOp::Gt => left.compare(right) == Some(Ordering::Greater),
            CompareOp::GtEq => matches!(
                left.compare(right),
                Some(Ordering::Greater | Ordering::Equal)
            ),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::NotEq => write!(f, "!="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::LtEq => write!(f, "<="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::GtEq => write!(f, ">="),
        }
    }
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// Column reference
    Column(String),
    /// Literal value
    Literal(Cell),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Column(name) => f.write_str(name),
            Operand::Literal(Cell::Text(s)) => write!(f, "'{s}'"),
            Operand::Literal(cell) => write!(f, "{cell}"),
        }
    }
}

/// Parsed selection predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// `left op right`
    Compare {
        left: Operand,
        op: CompareOp,
        right: Operand,
    },
    /// Both sides hold
    And(Box<Predicate>, Box<Predicate>),
    /// Either side holds
    Or(Box<Predicate>, Box<Predicate>),
    /// Negation
    Not(Box<Predicate>),
}

impl Predicate {
    /// Parse predicate text
    pub fn parse(text: &str) -> CoreResult<Self> {
        parser::parse(text)
    }

    /// Column names referenced anywhere in the predicate
    pub fn columns(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Predicate::Compare { left, right, .. } => {
                for operand in [left, right] {
                    if let Operand::Column(name) = operand {
                        out.push(name);
                    }
                }
            }
            Predicate::And(a, b) | Predicate::Or(a, b) => {
                a.collect_columns(out);
                b.collect_columns(out);
            }
            Predicate::Not(inner) => inner.collect_columns(out),
        }
    }

    /// Resolve column references against a relation's schema
    pub(crate) fn bind(&self, relation: &Relation) -> CoreResult<BoundPredicate> {
        let bind_operand = |operand: &Operand| -> CoreResult<BoundOperand> {
            Ok(match operand {
                Operand::Column(name) => BoundOperand::Column(relation.require_column(name)?),
                Operand::Literal(cell) => BoundOperand::Literal(cell.clone()),
            })
        };
        Ok(match self {
            Predicate::Compare { left, op, right } => BoundPredicate::Compare {
                left: bind_operand(left)?,
                op: *op,
                right: bind_operand(right)?,
            },
            Predicate::And(a, b) => {
                BoundPredicate::And(Box::new(a.bind(relation)?), Box::new(b.bind(relation)?))
            }
            Predicate::Or(a, b) => {
                BoundPredicate::Or(Box::new(a.bind(relation)?), Box::new(b.bind(relation)?))
            }
            Predicate::Not(inner) => BoundPredicate::Not(Box::new(inner.bind(relation)?)),
        })
    }
}

impl FromStr for Predicate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Compare { left, op, right } => write!(f, "{left} {op} {right}"),
            Predicate::And(a, b) => write!(f, "({a} and {b})"),
            Predicate::Or(a, b) => write!(f, "({a} or {b})"),
            Predicate::Not(inner) => write!(f, "not {inner}"),
        }
    }
}

/// Operand with column names replaced by row positions
#[derive(Debug, Clone)]
pub(crate) enum BoundOperand {
    Column(usize),
    Literal(Cell),
}

impl BoundOperand {
    fn value<'a>(&'a self, row: &'a Row) -> &'a Cell {
        match self {
            BoundOperand::Column(i) => &row[*i],
            BoundOperand::Literal(cell) => cell,
        }
    }
}

/// Predicate bound to one schema, ready to test rows
#[derive(Debug, Clone)]
pub(crate) enum BoundPredicate {
    Compare {
        left: BoundOperand,
        op: CompareOp,
        right: BoundOperand,
    },
    And(Box<BoundPredicate>, Box<BoundPredicate>),
    Or(Box<BoundPredicate>, Box<BoundPredicate>),
    Not(Box<BoundPredicate>),
}

impl BoundPredicate {
    /// Test a row of the bound relation
    pub(crate) fn matches(&self, row: &Row) -> bool {
        match self {
            BoundPredicate::Compare { left, op, right } => {
                op.apply(left.value(row), right.value(row))
            }
            BoundPredicate::And(a, b) => a.matches(row) && b.matches(row),
            BoundPredicate::Or(a, b) => a.matches(row) || b.matches(row),
            BoundPredicate::Not(inner) => !inner.matches(row),
        }
    }
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod tests;
