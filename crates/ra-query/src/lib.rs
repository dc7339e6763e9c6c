//! ra-query - Query evaluation for relalg
//!
//! This crate evaluates one nested relational-algebra expression against a
//! set of named relations. The decomposer peels bracketed subexpressions off
//! left to right, evaluates each into a synthetic intermediate relation, and
//! hands the remaining bracket-free expression to the operator dispatcher.

pub(crate) mod decompose;
pub(crate) mod dispatch;
pub mod error;
pub mod flat;
pub mod lexer;
pub mod operator;
pub mod session;
pub mod store;

pub use error::{QueryError, QueryResult};
pub use flat::FlatExpr;
pub use operator::OperatorKind;
pub use session::{EvaluationStep, QuerySession};
pub use store::RelationStore;

use ra_core::Relation;
use std::sync::Arc;

/// Evaluate `expression` against `relations` in a fresh session
pub fn evaluate(relations: Vec<Relation>, expression: &str) -> QueryResult<Arc<Relation>> {
    let mut session = QuerySession::from_relations(relations)?;
    session.evaluate(expression)
}
