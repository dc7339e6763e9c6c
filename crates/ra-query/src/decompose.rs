//! Bracket scanning for the expression decomposer

use crate::error::{QueryError, QueryResult};
use ra_core::symbol;

/// Byte span of a bracket group: positions of `(` and its matching `)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GroupSpan {
    pub(crate) open: usize,
    pub(crate) close: usize,
}

/// Brackets outside quoted literals, with their byte offsets
pub(crate) fn unquoted_brackets(expr: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut quote: Option<char> = None;
    expr.char_indices().filter(move |&(_, c)| match quote {
        Some(q) => {
            if c == q {
                quote = None;
            }
            false
        }
        None if c == '\'' || c == '"' => {
            quote = Some(c);
            false
        }
        None => c == '(' || c == ')',
    })
}

/// Position of the `)` matching the `(` at `open`
pub(crate) fn matching_close(expr: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in unquoted_brackets(&expr[open..]) {
        if c == '(' {
            depth += 1;
            continue;
        }
        depth = depth.saturating_sub(1);
        if depth == 0 {
            return Some(open + i);
        }
    }
    None
}

/// Fail unless every `)` closes an earlier `(` and none is left open
pub(crate) fn check_balance(expr: &str) -> QueryResult<()> {
    let mut depth = 0usize;
    for (_, c) in unquoted_brackets(expr) {
        if c == '(' {
            depth += 1;
        } else {
            depth = depth
                .checked_sub(1)
                .ok_or_else(|| QueryError::malformed(expr, "unexpected ')'"))?;
        }
    }
    if depth > 0 {
        return Err(QueryError::malformed(expr, "unclosed '('"));
    }
    Ok(())
}

const CONNECTIVE_WORDS: [&str; 3] = ["and", "or", "not"];

/// A group is part of a predicate or column list, not a relation, when it
/// directly follows `σ`, `π`, a connective, or a comparison
fn is_argument_group(expr: &str, open: usize) -> bool {
    let before = expr[..open].trim_end();
    let Some(last) = before.chars().next_back() else {
        return false;
    };
    if last == symbol::SELECTION || last == symbol::PROJECTION {
        return true;
    }
    if matches!(last, '&' | '|' | '~' | '!' | '=' | '<' | '>') {
        return true;
    }
    let word_start = before
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_alphanumeric() || c == '_')
        .last()
        .map_or(before.len(), |(i, _)| i);
    let word = &before[word_start..];
    CONNECTIVE_WORDS
        .iter()
        .any(|connective| word.eq_ignore_ascii_case(connective))
}

/// Leftmost bracket group that wraps a relation-valued subexpression.
///
/// Argument groups (`π(a,b)`, `σ(a>1)`, `and (b==2)`) are stepped over as a
/// whole, so brackets nested inside a predicate are never mistaken for
/// subexpressions. Brackets inside quoted literals are ignored.
pub(crate) fn leftmost_subexpression(expr: &str) -> QueryResult<Option<GroupSpan>> {
    let mut from = 0;
    for (open, c) in unquoted_brackets(expr) {
        if c != '(' || open < from {
            continue;
        }
        let close =
            matching_close(expr, open).ok_or_else(|| QueryError::malformed(expr, "unclosed '('"))?;
        if is_argument_group(expr, open) {
            log::trace!("Skipping argument group {}", &expr[open..=close]);
            from = close + 1;
            continue;
        }
        log::trace!("Matched subexpression at {open}..={close} in '{expr}'");
        return Ok(Some(GroupSpan { open, close }));
    }
    Ok(None)
}
