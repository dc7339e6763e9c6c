//! Input document loading
//!
//! An input document declares relation literals in brace-delimited blocks and
//! carries exactly one query line:
//!
//! ```text
//! Students = {
//! id, name
//! 1, 'Bob'
//! }
//! π(name)(σ id>0 Students)
//! ```

use crate::cell::{Cell, Row};
use crate::error::{CoreError, CoreResult};
use crate::relation::Relation;
use crate::relation_name::RelationName;
use crate::symbol;
use std::collections::HashSet;
use std::path::Path;

/// Relations and the query read from one input document
#[derive(Debug, Clone)]
pub struct InputDocument {
    /// Relations in declaration order
    pub relations: Vec<Relation>,
    /// The raw query expression
    pub query: String,
}

/// Read and parse an input document from disk
pub fn load_document(path: &Path) -> CoreResult<InputDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_document(&content)
}

/// Lines of a relation block collected before it is closed
struct PendingBlock {
    name: String,
    lines: Vec<String>,
}

/// Parse an input document
pub fn parse_document(content: &str) -> CoreResult<InputDocument> {
    let mut relations = Vec::new();
    let mut query: Option<String> = None;
    let mut block: Option<PendingBlock> = None;

    for line in content.lines().map(str::trim) {
        if let Some(pending) = block.as_mut() {
            if let Some((before, after)) = line.split_once('}') {
                push_content(&mut pending.lines, before);
                if !after.trim().is_empty() {
                    log::warn!(
                        "Ignoring text after closing brace of '{}': {}",
                        pending.name,
                        after.trim()
                    );
                }
                if let Some(done) = block.take() {
                    relations.push(build_relation(done)?);
                }
            } else {
                push_content(&mut pending.lines, line);
            }
            continue;
        }

        if let Some((header, rest)) = line.split_once('{') {
            let mut pending = PendingBlock {
                name: parse_relation_name(header)?,
                lines: Vec::new(),
            };
            // Single-line blocks: `R = { a, b }`
            match rest.split_once('}') {
                Some((inner, _)) => {
                    push_content(&mut pending.lines, inner);
                    relations.push(build_relation(pending)?);
                }
                None => {
                    push_content(&mut pending.lines, rest);
                    block = Some(pending);
                }
            }
            continue;
        }

        if symbol::contains_operator(line) {
            check_brackets(line)?;
            if let Some(first) = &query {
                return Err(CoreError::MultipleQueries {
                    first: first.clone(),
                    second: line.to_string(),
                });
            }
            query = Some(line.to_string());
        } else if !line.is_empty() {
            log::warn!("Ignoring line outside of any relation block: {line}");
        }
    }

    if let Some(pending) = block {
        return Err(CoreError::UnterminatedRelation { name: pending.name });
    }

    let mut seen = HashSet::new();
    for relation in &relations {
        let name = relation.label();
        if !seen.insert(name.to_string()) {
            return Err(CoreError::DuplicateRelation {
                name: name.to_string(),
            });
        }
    }

    let query = query.ok_or(CoreError::MissingQuery)?;
    Ok(InputDocument { relations, query })
}

fn push_content(lines: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        lines.push(text.to_string());
    }
}

/// Take the name from a block header such as `Students = {`
fn parse_relation_name(header: &str) -> CoreResult<String> {
    let name = header.split('=').next().unwrap_or_default().trim();
    let invalid = |reason: &str| CoreError::InvalidRelationName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name is empty")),
        Some(first) if !first.is_alphabetic() => {
            return Err(invalid("must start with an alphabetical character"))
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Err(invalid("may only contain letters, digits, and underscores"));
    }
    Ok(name.to_string())
}

fn build_relation(block: PendingBlock) -> CoreResult<Relation> {
    let mut lines = block.lines.iter();
    let header = lines.next().ok_or_else(|| CoreError::MissingColumns {
        name: block.name.clone(),
    })?;

    let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();
    if let Some(bad) = columns
        .iter()
        .find(|c| c.is_empty() || !c.chars().all(char::is_alphabetic))
    {
        return Err(CoreError::InvalidColumnName {
            column: bad.clone(),
        });
    }

    let rows: Vec<Row> = lines
        .map(|line| split_cells(line).iter().map(|c| Cell::parse_literal(c)).collect())
        .collect();
    Relation::named(RelationName::new(block.name), columns, rows)
}

/// Split a row on commas that are not inside a quoted literal
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for c in line.chars() {
        match (c, quote) {
            ('\'' | '"', None) => {
                quote = Some(c);
                current.push(c);
            }
            (c, Some(q)) if c == q => {
                quote = None;
                current.push(c);
            }
            (',', None) => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}

/// Verify that every `)` closes an earlier `(`; quoted text is skipped
fn check_brackets(query: &str) -> CoreResult<()> {
    let unbalanced = || CoreError::UnbalancedBrackets {
        query: query.to_string(),
    };
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    for c in query.chars() {
        match (c, quote) {
            (c, Some(q)) if c == q => quote = None,
            (_, Some(_)) => {}
            ('\'' | '"', None) => quote = Some(c),
            ('(', None) => depth += 1,
            (')', None) => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
            _ => {}
        }
    }
    if depth != 0 {
        return Err(unbalanced());
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
