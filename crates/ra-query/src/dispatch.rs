//! Operator dispatch for flat expressions

use crate::error::QueryResult;
use crate::flat::FlatExpr;
use crate::session::{EvaluationStep, QuerySession};
use ra_core::{Relation, RelationName};
use std::sync::Arc;

impl QuerySession {
    /// Evaluate one bracket-free expression.
    ///
    /// With a `target` the result is renamed and registered in the store.
    /// A bare relation name without a target returns the stored relation.
    pub fn evaluate_flat(
        &mut self,
        expr: &str,
        target: Option<RelationName>,
    ) -> QueryResult<Arc<Relation>> {
        let flat = FlatExpr::parse(expr)?;

        let result = match &flat {
            FlatExpr::Relation(name) => {
                let relation = self.store.get(name)?;
                if target.is_none() {
                    self.record(expr, &flat, None, &relation);
                    return Ok(relation);
                }
                Relation::clone(&relation)
            }
            FlatExpr::Selection {
                predicate,
                relation,
            } => self.store.get(relation)?.selection(predicate)?,
            FlatExpr::Projection { columns, relation } => {
                self.store.get(relation)?.projection(columns.as_slice())?
            }
            FlatExpr::Join {
                kind,
                left,
                right,
                on,
            } => {
                let (left, right) = (self.store.get(left)?, self.store.get(right)?);
                let on = on.as_ref().map(|(l, r)| (l.as_str(), r.as_str()));
                left.join(&right, *kind, on)?
            }
            FlatExpr::SetOp { kind, left, right } => {
                let (left, right) = (self.store.get(left)?, self.store.get(right)?);
                left.set_operation(&right, *kind)?
            }
        };

        let result = Arc::new(result.with_name(target.clone()));
        if let Some(name) = &target {
            self.store.register(name.clone(), Arc::clone(&result))?;
        }
        self.record(expr, &flat, target, &result);
        Ok(result)
    }

    fn record(
        &mut self,
        expr: &str,
        flat: &FlatExpr,
        target: Option<RelationName>,
        result: &Relation,
    ) {
        self.record_step(EvaluationStep {
            target,
            expression: expr.trim().to_string(),
            operator: flat.operator(),
            rows: result.len(),
        });
    }
}

