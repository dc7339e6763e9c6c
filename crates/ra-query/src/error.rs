//! Error types for ra-query

use ra_core::CoreError;
use thiserror::Error;

/// Query evaluation error type
///
/// Relation-level failures (unknown column, schema mismatch, invalid
/// predicate) arrive wrapped in [`QueryError::Core`].
#[derive(Error, Debug)]
pub enum QueryError {
    /// Q001: Expression does not fit the grammar
    #[error("[Q001] Malformed expression '{expression}': {reason}")]
    MalformedExpression { expression: String, reason: String },

    /// Q002: Operand name not present in the store
    #[error("[Q002] Unknown relation '{name}'")]
    UnknownRelation { name: String },

    /// Q003: More than one operator in a bracket-free expression
    #[error("[Q003] Ambiguous operator in '{expression}': found {operators}")]
    AmbiguousOperator {
        expression: String,
        operators: String,
    },

    /// Q004: A relation with this name is already in the store
    #[error("[Q004] Relation '{name}' is already registered")]
    DuplicateRelation { name: String },

    /// Q005: Source relation uses the intermediate naming scheme
    #[error("[Q005] Relation name '{name}' is reserved for intermediate results")]
    ReservedRelationName { name: String },

    /// Q006: Source relation has no name
    #[error("[Q006] Source relations must be named")]
    UnnamedRelation,

    /// Q007: Relation operation failed
    #[error("[Q007] Relation error: {0}")]
    Core(#[from] CoreError),
}

impl QueryError {
    pub(crate) fn malformed(expression: &str, reason: impl Into<String>) -> Self {
        QueryError::MalformedExpression {
            expression: expression.trim().to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for QueryError
pub type QueryResult<T> = Result<T, QueryError>;
