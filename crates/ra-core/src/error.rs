//! Error types for ra-core

use thiserror::Error;

/// Core error type for relalg
#[derive(Error, Debug)]
pub enum CoreError {
    /// R001: Column referenced by an operation is not part of the relation schema
    #[error("[R001] Unknown column '{column}' in relation {relation}")]
    UnknownColumn { column: String, relation: String },

    /// R002: Set operation operands do not share the same column set
    #[error("[R002] Schema mismatch in {operation}: [{left}] vs [{right}]")]
    SchemaMismatch {
        operation: &'static str,
        left: String,
        right: String,
    },

    /// R003: Selection predicate could not be parsed or bound
    #[error("[R003] Invalid predicate '{predicate}': {reason}")]
    InvalidPredicate { predicate: String, reason: String },

    /// R004: Column name appears twice in a schema or column list
    #[error("[R004] Duplicate column '{column}'")]
    DuplicateColumn { column: String },

    /// R005: Row does not have one cell per column
    #[error("[R005] Row {row} has {found} cells, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// R006: Relation name is empty or does not start with a letter
    #[error("[R006] Invalid relation name '{name}': {reason}")]
    InvalidRelationName { name: String, reason: String },

    /// R007: Column name contains non-alphabetic characters
    #[error("[R007] Column '{column}' must only contain alphabetical characters")]
    InvalidColumnName { column: String },

    /// R008: Two relations in one document share a name
    #[error("[R008] Cannot have two or more relations named '{name}'")]
    DuplicateRelation { name: String },

    /// R009: Query has unbalanced brackets
    #[error("[R009] Unbalanced brackets in query '{query}'")]
    UnbalancedBrackets { query: String },

    /// R010: Input document has no query line
    #[error("[R010] Input contains no query")]
    MissingQuery,

    /// R011: Input document has more than one query line
    #[error("[R011] Input contains more than one query: '{first}' and '{second}'")]
    MultipleQueries { first: String, second: String },

    /// R012: Relation block is never closed
    #[error("[R012] Relation '{name}' is missing its closing '}}'")]
    UnterminatedRelation { name: String },

    /// R013: Relation block has no column line
    #[error("[R013] Relation '{name}' does not declare any columns")]
    MissingColumns { name: String },

    /// R014: Configuration file not found
    #[error("[R014] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// R015: Invalid configuration value
    #[error("[R015] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// R016: IO error with file path context
    #[error("[R016] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// R017: YAML parse error
    #[error("[R017] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
