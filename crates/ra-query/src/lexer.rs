//! Tokenizer for bracket-free expressions
//!
//! Operator symbols are tokens wherever they appear, except `-`, which only
//! counts as the difference operator when it stands alone, and inside quoted
//! literals, which stay part of the surrounding word. A parenthesised group
//! left in a flat expression is an operator argument and is kept whole.

use crate::decompose::matching_close;
use crate::error::{QueryError, QueryResult};
use crate::operator::OperatorKind;
use ra_core::symbol;
use std::ops::Range;

/// Token payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// One of the reserved operator symbols
    Operator(OperatorKind),
    /// Text inside a bracket group, without the brackets
    Group(String),
    /// Relation name, column list, predicate fragment, or key pair
    Word(String),
}

/// A token and its byte span in the source expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// Whether `c` always forms an operator token on its own
fn is_operator_char(c: char) -> bool {
    OperatorKind::from_symbol(c).is_some_and(|op| op != OperatorKind::Difference)
}

fn is_word_char(c: char) -> bool {
    !(c.is_whitespace() || c == '(' || c == ')' || is_operator_char(c))
}

/// Split a flat expression into tokens
pub fn tokenize(expr: &str) -> QueryResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '(' {
            let close = matching_close(expr, start)
                .ok_or_else(|| QueryError::malformed(expr, "unclosed '('"))?;
            tokens.push(Token {
                kind: TokenKind::Group(expr[start + 1..close].to_string()),
                span: start..close + 1,
            });
            while chars.next_if(|&(i, _)| i <= close).is_some() {}
            continue;
        }

        if c == ')' {
            return Err(QueryError::malformed(expr, "unexpected ')'"));
        }

        if let Some(op) = OperatorKind::from_symbol(c).filter(|_| is_operator_char(c)) {
            chars.next();
            tokens.push(Token {
                kind: TokenKind::Operator(op),
                span: start..start + c.len_utf8(),
            });
            continue;
        }

        // quoted literals are part of the word, whatever they contain
        let mut end = start;
        let mut quote: Option<char> = None;
        loop {
            let quoted = quote.is_some();
            let Some((i, ch)) = chars.next_if(|&(_, ch)| quoted || is_word_char(ch)) else {
                break;
            };
            match quote {
                Some(q) if ch == q => quote = None,
                None if ch == '\'' || ch == '"' => quote = Some(ch),
                _ => {}
            }
            end = i + ch.len_utf8();
        }
        let word = &expr[start..end];
        let kind = if word.len() == 1 && word.starts_with(symbol::DIFFERENCE) {
            TokenKind::Operator(OperatorKind::Difference)
        } else {
            TokenKind::Word(word.to_string())
        };
        tokens.push(Token {
            kind,
            span: start..end,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod tests;
