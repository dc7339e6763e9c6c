//! Natural and explicit-key joins with outer-join null padding

use super::Relation;
use crate::cell::{Cell, Row};
use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Join type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKind {
    /// Inner join
    Inner,
    /// Left outer join
    LeftOuter,
    /// Right outer join
    RightOuter,
    /// Full outer join
    FullOuter,
}

impl JoinKind {
    /// Whether unmatched left rows are kept
    pub fn keeps_left(self) -> bool {
        matches!(self, JoinKind::LeftOuter | JoinKind::FullOuter)
    }

    /// Whether unmatched right rows are kept
    pub fn keeps_right(self) -> bool {
        matches!(self, JoinKind::RightOuter | JoinKind::FullOuter)
    }
}

impl std::fmt::Display for JoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKind::Inner => write!(f, "INNER"),
            JoinKind::LeftOuter => write!(f, "LEFT OUTER"),
            JoinKind::RightOuter => write!(f, "RIGHT OUTER"),
            JoinKind::FullOuter => write!(f, "FULL OUTER"),
        }
    }
}

/// Where an output column takes its value from
#[derive(Debug, Clone, Copy)]
enum Source {
    Left(usize),
    Right(usize),
    /// Shared key column: left value, or right value on right-only rows
    Coalesced(usize, usize),
}

/// Resolved join layout: key positions and output column sources
struct JoinPlan {
    left_keys: Vec<usize>,
    right_keys: Vec<usize>,
    columns: Vec<String>,
    sources: Vec<Source>,
}

impl JoinPlan {
    fn new(left: &Relation, right: &Relation, on: Option<(&str, &str)>) -> CoreResult<Self> {
        // (left index, right index, coalesce into one column)
        let pairs: Vec<(usize, usize, bool)> = match on {
            Some((l, r)) => vec![(left.require_column(l)?, right.require_column(r)?, l == r)],
            None => left
                .columns()
                .iter()
                .enumerate()
                .filter_map(|(li, c)| right.column_index(c).map(|ri| (li, ri, true)))
                .collect(),
        };

        if on.is_none() && pairs.is_empty() {
            log::debug!(
                "No common columns between {} and {}, joining as Cartesian product",
                left.label(),
                right.label()
            );
        }

        let coalesced_right: HashSet<usize> = pairs
            .iter()
            .filter(|(_, _, merge)| *merge)
            .map(|(_, ri, _)| *ri)
            .collect();
        let kept_right: Vec<usize> = (0..right.columns().len())
            .filter(|ri| !coalesced_right.contains(ri))
            .collect();
        let clashing: HashSet<&str> = kept_right
            .iter()
            .map(|&ri| right.columns()[ri].as_str())
            .filter(|c| left.column_index(c).is_some())
            .collect();

        // suffixed names must not collide with any input column or earlier output
        let mut taken: HashSet<String> = left
            .columns()
            .iter()
            .chain(right.columns())
            .cloned()
            .collect();
        let mut columns = Vec::with_capacity(left.columns().len() + kept_right.len());
        let mut sources = Vec::with_capacity(columns.capacity());
        for (li, column) in left.columns().iter().enumerate() {
            let merged = pairs.iter().find(|(l, _, merge)| *l == li && *merge);
            sources.push(match merged {
                Some((_, ri, _)) => Source::Coalesced(li, *ri),
                None => Source::Left(li),
            });
            columns.push(disambiguate(column, &clashing, &mut taken, "_x"));
        }
        for ri in kept_right {
            sources.push(Source::Right(ri));
            columns.push(disambiguate(&right.columns()[ri], &clashing, &mut taken, "_y"));
        }

        Ok(Self {
            left_keys: pairs.iter().map(|(l, _, _)| *l).collect(),
            right_keys: pairs.iter().map(|(_, r, _)| *r).collect(),
            columns,
            sources,
        })
    }

    /// Assemble an output row; a missing side contributes nulls
    fn combine(&self, left: Option<&Row>, right: Option<&Row>) -> Row {
        self.sources
            .iter()
            .map(|source| match *source {
                Source::Left(i) => left.map_or(Cell::Null, |r| r[i].clone()),
                Source::Right(j) => right.map_or(Cell::Null, |r| r[j].clone()),
                Source::Coalesced(i, j) => match (left, right) {
                    (Some(l), _) => l[i].clone(),
                    (None, Some(r)) => r[j].clone(),
                    (None, None) => Cell::Null,
                },
            })
            .collect()
    }
}

/// Suffix a clashing column, repeating the suffix until the name is free
fn disambiguate(
    column: &str,
    clashing: &HashSet<&str>,
    taken: &mut HashSet<String>,
    suffix: &str,
) -> String {
    if !clashing.contains(column) {
        return column.to_string();
    }
    let mut name = format!("{column}{suffix}");
    while taken.contains(&name) {
        name.push_str(suffix);
    }
    taken.insert(name.clone());
    name
}

/// Key values of a row, or `None` when any key cell is null (nulls never match)
fn key_of(row: &Row, keys: &[usize]) -> Option<Vec<Cell>> {
    keys.iter()
        .map(|&i| (!row[i].is_null()).then(|| row[i].clone()))
        .collect()
}

/// Hash the build side on its key columns
fn build_index<'a>(rows: &'a [Row], keys: &[usize]) -> HashMap<Vec<Cell>, Vec<&'a Row>> {
    let mut index: HashMap<Vec<Cell>, Vec<&Row>> = HashMap::new();
    for row in rows {
        if let Some(key) = key_of(row, keys) {
            index.entry(key).or_default().push(row);
        }
    }
    index
}

impl Relation {
    /// Join two relations.
    ///
    /// With `on = None` the key is every column name the two schemas share and
    /// the shared columns appear once; with no shared columns the result is
    /// the Cartesian product. With `on = Some((l, r))` only that pair is
    /// matched, and both key columns are kept unless their names coincide.
    pub fn join(
        &self,
        other: &Relation,
        kind: JoinKind,
        on: Option<(&str, &str)>,
    ) -> CoreResult<Relation> {
        let plan = JoinPlan::new(self, other, on)?;
        let mut rows = Vec::new();

        if kind == JoinKind::RightOuter {
            // Probe with the right side so output follows right row order.
            let index = build_index(self.rows(), &plan.left_keys);
            for right in other.rows() {
                let matches = key_of(right, &plan.right_keys).and_then(|k| index.get(&k));
                match matches {
                    Some(lefts) => {
                        rows.extend(lefts.iter().map(|&l| plan.combine(Some(l), Some(right))))
                    }
                    None => rows.push(plan.combine(None, Some(right))),
                }
            }
        } else {
            let index = build_index(other.rows(), &plan.right_keys);
            let mut matched: HashSet<&Row> = HashSet::new();
            for left in self.rows() {
                let matches = key_of(left, &plan.left_keys).and_then(|k| index.get(&k));
                match matches {
                    Some(rights) => {
                        for &right in rights {
                            matched.insert(right);
                            rows.push(plan.combine(Some(left), Some(right)));
                        }
                    }
                    None if kind.keeps_left() => rows.push(plan.combine(Some(left), None)),
                    None => {}
                }
            }
            if kind.keeps_right() {
                rows.extend(
                    other
                        .rows()
                        .iter()
                        .filter(|r| !matched.contains(r))
                        .map(|r| plan.combine(None, Some(r))),
                );
            }
        }

        Ok(Relation::from_parts(plan.columns, rows))
    }

    /// ⨝: inner join
    pub fn inner_join(&self, other: &Relation, on: Option<(&str, &str)>) -> CoreResult<Relation> {
        self.join(other, JoinKind::Inner, on)
    }

    /// ⟕: left outer join
    pub fn left_outer_join(
        &self,
        other: &Relation,
        on: Option<(&str, &str)>,
    ) -> CoreResult<Relation> {
        self.join(other, JoinKind::LeftOuter, on)
    }

    /// ⟖: right outer join
    pub fn right_outer_join(
        &self,
        other: &Relation,
        on: Option<(&str, &str)>,
    ) -> CoreResult<Relation> {
        self.join(other, JoinKind::RightOuter, on)
    }

    /// ⟗: full outer join
    pub fn full_outer_join(
        &self,
        other: &Relation,
        on: Option<(&str, &str)>,
    ) -> CoreResult<Relation> {
        self.join(other, JoinKind::FullOuter, on)
    }
}

#[cfg(test)]
#[path = "join_test.rs"]
mod tests;
