//! Evaluation session and the expression decomposer
//!
//! A session owns the relation store for one query. Nested expressions are
//! reduced by repeatedly taking the leftmost relation-valued bracket group,
//! evaluating its contents under a fresh `relationN` name, and substituting
//! that name back into the surrounding text until no such group is left.

use crate::decompose::{check_balance, leftmost_subexpression};
use crate::error::QueryResult;
use crate::operator::OperatorKind;
use crate::store::RelationStore;
use ra_core::{Relation, RelationName};
use serde::Serialize;
use std::sync::Arc;

/// One evaluated flat expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationStep {
    /// Name the result was registered under; `None` for the final result
    pub target: Option<RelationName>,
    /// The flat expression, with intermediates substituted
    pub expression: String,
    /// `None` when the expression was a bare relation name
    pub operator: Option<OperatorKind>,
    /// Row count of the result
    pub rows: usize,
}

/// State for evaluating one query
#[derive(Debug)]
pub struct QuerySession {
    pub(crate) store: RelationStore,
    synthetic_count: usize,
    steps: Vec<EvaluationStep>,
}

impl QuerySession {
    /// Start a session over an existing store
    pub fn new(store: RelationStore) -> Self {
        Self {
            store,
            synthetic_count: 0,
            steps: Vec::new(),
        }
    }

    /// Start a session over the given source relations
    pub fn from_relations(relations: impl IntoIterator<Item = Relation>) -> QueryResult<Self> {
        Ok(Self::new(RelationStore::with_sources(relations)?))
    }

    pub fn store(&self) -> &RelationStore {
        &self.store
    }

    /// Steps evaluated so far, in evaluation order
    pub fn steps(&self) -> &[EvaluationStep] {
        &self.steps
    }

    /// Evaluate a complete expression.
    ///
    /// The result is unnamed unless the expression is a bare relation name,
    /// in which case the stored relation itself is returned.
    pub fn evaluate(&mut self, expr: &str) -> QueryResult<Arc<Relation>> {
        check_balance(expr)?;
        self.evaluate_as(expr, None)
    }

    /// Evaluate `expr` and, when `target` is given, register the result
    /// under that name
    pub fn evaluate_as(
        &mut self,
        expr: &str,
        target: Option<RelationName>,
    ) -> QueryResult<Arc<Relation>> {
        let Some(group) = leftmost_subexpression(expr)? else {
            return self.evaluate_flat(expr, target);
        };

        let inner = &expr[group.open + 1..group.close];
        let name = self.next_synthetic_name();
        log::debug!("Allocated {name} for ({})", inner.trim());
        self.evaluate_as(inner, Some(name.clone()))?;

        let simplified = format!(
            "{} {} {}",
            expr[..group.open].trim_end(),
            name,
            expr[group.close + 1..].trim_start()
        );
        self.evaluate_as(&simplified, target)
    }

    fn next_synthetic_name(&mut self) -> RelationName {
        self.synthetic_count += 1;
        RelationName::synthetic(self.synthetic_count)
    }

    pub(crate) fn record_step(&mut self, step: EvaluationStep) {
        log::debug!(
            "Evaluated '{}' -> {} ({} rows)",
            step.expression,
            step.target.as_ref().map_or("result", |t| t.as_str()),
            step.rows
        );
        self.steps.push(step);
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
