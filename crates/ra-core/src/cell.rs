//! Typed cell values
//!
//! Cells are typed once, when a relation literal is loaded, and never
//! re-inferred afterwards. `Null` only appears in rows padded by outer joins.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single tuple: one cell per column
pub type Row = Vec<Cell>;

/// A typed cell value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Integer value
    Integer(i64),
    /// Text value
    Text(String),
    /// Missing value produced by outer joins
    Null,
}

impl Cell {
    /// Type a raw literal from an input document.
    ///
    /// Surrounding single or double quotes are stripped; a remaining run of
    /// ASCII digits becomes an `Integer`, anything else is `Text`.
    pub fn parse_literal(raw: &str) -> Self {
        let trimmed = raw.trim();
        let unquoted = strip_quotes(trimmed).unwrap_or(trimmed);
        if !unquoted.is_empty() && unquoted.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = unquoted.parse::<i64>() {
                return Cell::Integer(value);
            }
        }
        Cell::Text(unquoted.to_string())
    }

    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Returns true for the null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Returns true for integer cells
    pub fn is_integer(&self) -> bool {
        matches!(self, Cell::Integer(_))
    }

    /// Integer payload, if any
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Textual form used for cross-kind comparison and hashing
    pub fn text_form(&self) -> Cow<'_, str> {
        match self {
            Cell::Integer(v) => Cow::Owned(v.to_string()),
            Cell::Text(s) => Cow::Borrowed(s),
            Cell::Null => Cow::Borrowed(""),
        }
    }

    /// Order two cells for predicate evaluation.
    ///
    /// Integers compare numerically, every other pairing compares as text.
    /// Returns `None` when either side is null.
    pub fn compare(&self, other: &Cell) -> Option<Ordering> {
        match (self, other) {
            (Cell::Null, _) | (_, Cell::Null) => None,
            (Cell::Integer(a), Cell::Integer(b)) => Some(a.cmp(b)),
            _ => Some(self.text_form().cmp(&other.text_form())),
        }
    }
}

fn strip_quotes(s: &str) -> Option<&str> {
    ['\'', '"'].iter().find_map(|q| {
        s.strip_prefix(*q)
            .and_then(|rest| rest.strip_suffix(*q))
    })
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Null, Cell::Null) => true,
            (Cell::Null, _) | (_, Cell::Null) => false,
            (Cell::Integer(a), Cell::Integer(b)) => a == b,
            _ => self.text_form() == other.text_form(),
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `eq`: integer 7 and text "7" are equal.
        match self {
            Cell::Null => state.write_u8(0),
            other => {
                state.write_u8(1);
                other.text_form().hash(state);
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Null => f.write_str("NULL"),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod tests;
