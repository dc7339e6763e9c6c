//! Tokenizer and recursive-descent parser for predicate text
//!
//! Grammar (lowest precedence first):
//!
//! ```text
//! or      := and (("or" | "|" | "||") and)*
//! and     := not (("and" | "&" | "&&") not)*
//! not     := ("not" | "~" | "!") not | primary
//! primary := "(" or ")" | operand cmp operand
//! operand := identifier | integer | 'text' | "text"
//! ```

use super::{CompareOp, Operand, Predicate};
use crate::cell::Cell;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Int(i64),
    Str(String),
    Cmp(CompareOp),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

pub(super) fn parse(text: &str) -> CoreResult<Predicate> {
    let fail = |reason: String| CoreError::InvalidPredicate {
        predicate: text.to_string(),
        reason,
    };
    let tokens = tokenize(text).map_err(fail)?;
    if tokens.is_empty() {
        return Err(fail("predicate is empty".to_string()));
    }
    let mut parser = Parser { tokens, pos: 0 };
    let predicate = parser.parse_or().map_err(fail)?;
    if let Some(extra) = parser.peek() {
        return Err(fail(format!("unexpected {extra:?} after end of predicate")));
    }
    Ok(predicate)
}

fn tokenize(text: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            c if c.is_whitespace() => i += 1,
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '\'' | '"' => {
                let end = chars[i + 1..]
                    .iter()
                    .position(|&ch| ch == c)
                    .ok_or_else(|| format!("unterminated string literal starting at {i}"))?;
                tokens.push(Token::Str(chars[i + 1..i + 1 + end].iter().collect()));
                i += end + 2;
            }
            '=' if next == Some('=') => {
                tokens.push(Token::Cmp(CompareOp::Eq));
                i += 2;
            }
            '=' => return Err("use '==' for equality".to_string()),
            '!' if next == Some('=') => {
                tokens.push(Token::Cmp(CompareOp::NotEq));
                i += 2;
            }
            '<' | '>' => {
                let or_equal = next == Some('=');
                tokens.push(Token::Cmp(match (c, or_equal) {
                    ('<', true) => CompareOp::LtEq,
                    ('<', false) => CompareOp::Lt,
                    (_, true) => CompareOp::GtEq,
                    (_, false) => CompareOp::Gt,
                }));
                i += if or_equal { 2 } else { 1 };
            }
            '!' | '~' => {
                tokens.push(Token::Not);
                i += 1;
            }
            '&' | '|' => {
                tokens.push(if c == '&' { Token::And } else { Token::Or });
                i += if next == Some(c) { 2 } else { 1 };
            }
            c if c.is_ascii_digit() || (c == '-' && next.is_some_and(|n| n.is_ascii_digit())) => {
                let start = i;
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal
                    .parse::<i64>()
                    .map_err(|e| format!("invalid integer '{literal}': {e}"))?;
                tokens.push(Token::Int(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                tokens.push(match word.to_ascii_lowercase().as_str() {
                    "and" => Token::And,
                    "or" => Token::Or,
                    "not" => Token::Not,
                    _ => Token::Ident(word),
                });
            }
            other => return Err(format!("unexpected character '{other}'")),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<Predicate, String> {
        let mut left = self.parse_and()?;
        while self.eat(&Token::Or) {
            let right = self.parse_and()?;
            left = Predicate::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Predicate, String> {
        let mut left = self.parse_not()?;
        while self.eat(&Token::And) {
            let right = self.parse_not()?;
            left = Predicate::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Predicate, String> {
        if self.eat(&Token::Not) {
            return Ok(Predicate::Not(Box::new(self.parse_not()?)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Predicate, String> {
        if self.eat(&Token::LParen) {
            let inner = self.parse_or()?;
            if !self.eat(&Token::RParen) {
                return Err("missing ')'".to_string());
            }
            return Ok(inner);
        }
        let left = self.parse_operand()?;
        let op = match self.next() {
            Some(Token::Cmp(op)) => op,
            Some(other) => return Err(format!("expected comparison operator, found {other:?}")),
            None => return Err("expected comparison operator, found end of predicate".to_string()),
        };
        let right = self.parse_operand()?;
        Ok(Predicate::Compare { left, op, right })
    }

    fn parse_operand(&mut self) -> Result<Operand, String> {
        match self.next() {
            Some(Token::Ident(name)) => Ok(Operand::Column(name)),
            Some(Token::Int(value)) => Ok(Operand::Literal(Cell::Integer(value))),
            Some(Token::Str(value)) => Ok(Operand::Literal(Cell::Text(value))),
            Some(other) => Err(format!("expected column or literal, found {other:?}")),
            None => Err("expected column or literal, found end of predicate".to_string()),
        }
    }
}
