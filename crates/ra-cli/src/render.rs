//! Text rendering of relations
//!
//! A relation is drawn as its name, padded to the table width, above a
//! box-drawn grid with a rule between every row:
//!
//! ```text
//! R
//! ┌─────┬─────┐
//! │   a │ b   │
//! ├─────┼─────┤
//! │   1 │ x   │
//! └─────┴─────┘
//! ```

use ra_core::{Cell, Relation};

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Width of `text` in characters
fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, size: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{text:<size$}"),
        Align::Right => format!("{text:>size$}"),
    }
}

/// Columns holding only integers (ignoring nulls) are right aligned
fn column_alignment(relation: &Relation, index: usize) -> Align {
    let mut values = relation
        .rows()
        .iter()
        .map(|row| &row[index])
        .filter(|cell| !cell.is_null())
        .peekable();
    if values.peek().is_some() && values.all(Cell::is_integer) {
        Align::Right
    } else {
        Align::Left
    }
}

fn rule(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

fn line(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, &w), &align)| format!(" {} ", pad(cell, w, align)))
        .collect();
    format!("│{}│", padded.join("│"))
}

/// Render a relation as lines of text, name line first
pub(crate) fn render_relation(relation: &Relation, null_marker: &str) -> Vec<String> {
    let cell_text = |cell: &Cell| match cell {
        Cell::Null => null_marker.to_string(),
        other => other.to_string(),
    };
    let body: Vec<Vec<String>> = relation
        .rows()
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = relation
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            body.iter()
                .map(|row| width(&row[i]))
                .fold(width(column) + 2, usize::max)
        })
        .collect();
    let aligns: Vec<Align> = (0..widths.len())
        .map(|i| column_alignment(relation, i))
        .collect();

    let mut table = vec![rule(&widths, '┌', '┬', '┐')];
    table.push(line(relation.columns(), &widths, &aligns));
    for row in &body {
        table.push(rule(&widths, '├', '┼', '┤'));
        table.push(line(row, &widths, &aligns));
    }
    table.push(rule(&widths, '└', '┴', '┘'));

    let table_width = width(&table[0]);
    let name = relation.name().map_or("", |n| n.as_str());
    let mut lines = vec![pad(name, table_width, Align::Left)];
    lines.extend(table);
    lines
}

/// Place blocks of lines next to each other, two spaces apart.
///
/// Shorter blocks are padded with blank lines of their own width.
pub(crate) fn side_by_side(blocks: &[Vec<String>]) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|i| {
            blocks
                .iter()
                .map(|block| {
                    let block_width = block.first().map_or(0, |l| width(l));
                    let text = block.get(i).map_or("", String::as_str);
                    pad(text, block_width, Align::Left)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Section title padded with dashes to `line_width`
pub(crate) fn title(text: &str, line_width: usize) -> String {
    let dashes = line_width.saturating_sub(width(text) + 1);
    format!("{text} {}", "-".repeat(dashes))
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
