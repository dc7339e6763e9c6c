//! Bracket-free, single-operator expressions
//!
//! A flat expression is what remains once every relation-valued bracket
//! group has been replaced by the name of its intermediate result:
//!
//! ```text
//! name
//! σ <predicate> name
//! π <col, col, ...> name
//! name <join> name
//! name <join> <left>=<right> name
//! name <set-op> name
//! ```

use crate::error::{QueryError, QueryResult};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::operator::OperatorKind;
use ra_core::{JoinKind, Predicate, SetOpKind};

/// A classified flat expression, ready for dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum FlatExpr {
    /// A bare relation name
    Relation(String),
    Selection {
        predicate: Predicate,
        relation: String,
    },
    Projection {
        columns: Vec<String>,
        relation: String,
    },
    Join {
        kind: JoinKind,
        left: String,
        right: String,
        /// Explicit `(left column, right column)` key; natural join when absent
        on: Option<(String, String)>,
    },
    SetOp {
        kind: SetOpKind,
        left: String,
        right: String,
    },
}

impl FlatExpr {
    /// Tokenize and classify a bracket-free expression
    pub fn parse(expr: &str) -> QueryResult<Self> {
        let tokens = tokenize(expr)?;

        let operators: Vec<(usize, OperatorKind)> = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, t)| match t.kind {
                TokenKind::Operator(op) => Some((i, op)),
                _ => None,
            })
            .collect();

        match operators.as_slice() {
            [] => parse_bare(expr, &tokens),
            [(position, op)] if op.is_unary() => parse_unary(expr, &tokens, *position, *op),
            [(position, op)] => parse_binary(expr, &tokens, *position, *op),
            _ => Err(QueryError::AmbiguousOperator {
                expression: expr.trim().to_string(),
                operators: operators
                    .iter()
                    .map(|(_, op)| op.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
            }),
        }
    }

    /// The operator, or `None` for a bare relation name
    pub fn operator(&self) -> Option<OperatorKind> {
        match self {
            FlatExpr::Relation(_) => None,
            FlatExpr::Selection { .. } => Some(OperatorKind::Selection),
            FlatExpr::Projection { .. } => Some(OperatorKind::Projection),
            FlatExpr::Join { kind, .. } => Some(match kind {
                JoinKind::Inner => OperatorKind::InnerJoin,
                JoinKind::LeftOuter => OperatorKind::LeftOuterJoin,
                JoinKind::RightOuter => OperatorKind::RightOuterJoin,
                JoinKind::FullOuter => OperatorKind::FullOuterJoin,
            }),
            FlatExpr::SetOp { kind, .. } => Some(match kind {
                SetOpKind::Union => OperatorKind::Union,
                SetOpKind::Intersect => OperatorKind::Intersect,
                SetOpKind::Difference => OperatorKind::Difference,
            }),
        }
    }

    /// Names of the relations this expression reads, left to right
    pub fn operands(&self) -> Vec<&str> {
        match self {
            FlatExpr::Relation(name)
            | FlatExpr::Selection { relation: name, .. }
            | FlatExpr::Projection { relation: name, .. } => vec![name.as_str()],
            FlatExpr::Join { left, right, .. } | FlatExpr::SetOp { left, right, .. } => {
                vec![left.as_str(), right.as_str()]
            }
        }
    }
}

fn parse_bare(expr: &str, tokens: &[Token]) -> QueryResult<FlatExpr> {
    match tokens {
        [] => Err(QueryError::malformed(expr, "empty expression")),
        [Token {
            kind: TokenKind::Word(name),
            ..
        }] => Ok(FlatExpr::Relation(name.clone())),
        [Token {
            kind: TokenKind::Group(_),
            ..
        }] => Err(QueryError::malformed(expr, "unexpected bracket group")),
        _ => Err(QueryError::malformed(expr, "no operator found")),
    }
}

fn parse_unary(
    expr: &str,
    tokens: &[Token],
    position: usize,
    op: OperatorKind,
) -> QueryResult<FlatExpr> {
    if position != 0 {
        return Err(QueryError::malformed(
            expr,
            format!("'{op}' must start the expression"),
        ));
    }
    let (relation, arguments) = match &tokens[1..] {
        [arguments @ .., last] if !arguments.is_empty() => (word(expr, last)?, arguments),
        _ => {
            return Err(QueryError::malformed(
                expr,
                format!("'{op}' expects an argument and a relation"),
            ))
        }
    };
    let argument = argument_text(expr, arguments);

    match op {
        OperatorKind::Selection => Ok(FlatExpr::Selection {
            predicate: Predicate::parse(argument)?,
            relation,
        }),
        _ => Ok(FlatExpr::Projection {
            columns: column_list(expr, argument)?,
            relation,
        }),
    }
}

fn parse_binary(
    expr: &str,
    tokens: &[Token],
    position: usize,
    op: OperatorKind,
) -> QueryResult<FlatExpr> {
    if position != 1 || tokens.len() < 3 {
        return Err(QueryError::malformed(
            expr,
            format!("'{op}' expects a relation on each side"),
        ));
    }
    let left = word(expr, &tokens[0])?;
    let right = word(expr, &tokens[tokens.len() - 1])?;
    let middle = &tokens[2..tokens.len() - 1];

    if let Some(kind) = op.join_kind() {
        let on = if middle.is_empty() {
            None
        } else {
            Some(key_pair(expr, argument_text(expr, middle))?)
        };
        return Ok(FlatExpr::Join {
            kind,
            left,
            right,
            on,
        });
    }

    if !middle.is_empty() {
        return Err(QueryError::malformed(
            expr,
            format!("'{op}' takes no arguments"),
        ));
    }
    match op.set_op_kind() {
        Some(kind) => Ok(FlatExpr::SetOp { kind, left, right }),
        None => Err(QueryError::malformed(expr, format!("'{op}' is not binary"))),
    }
}

/// Relation-name token, or a grammar error
fn word(expr: &str, token: &Token) -> QueryResult<String> {
    match &token.kind {
        TokenKind::Word(name) => Ok(name.clone()),
        _ => Err(QueryError::malformed(
            expr,
            format!("expected a relation name, found '{}'", &expr[token.span.clone()]),
        )),
    }
}

/// Source text of an argument: a lone group yields its contents, anything
/// else the verbatim slice it spans
fn argument_text<'a>(expr: &'a str, tokens: &'a [Token]) -> &'a str {
    match tokens {
        [Token {
            kind: TokenKind::Group(inner),
            ..
        }] => inner.trim(),
        [first, .., last] => expr[first.span.start..last.span.end].trim(),
        [only] => expr[only.span.clone()].trim(),
        [] => "",
    }
}

fn column_list(expr: &str, argument: &str) -> QueryResult<Vec<String>> {
    let columns: Vec<String> = argument
        .split(',')
        .map(|c| c.trim().to_string())
        .collect();
    if columns.iter().any(|c| c.is_empty()) {
        return Err(QueryError::malformed(
            expr,
            format!("invalid column list '{argument}'"),
        ));
    }
    Ok(columns)
}

fn key_pair(expr: &str, text: &str) -> QueryResult<(String, String)> {
    let invalid = || QueryError::malformed(expr, format!("invalid join key '{text}'"));
    let (left, right) = text.split_once('=').ok_or_else(invalid)?;
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() || right.contains('=') || text.contains(',') {
        return Err(invalid());
    }
    Ok((left.to_string(), right.to_string()))
}

#[cfg(test)]
#[path = "flat_test.rs"]
mod tests;
