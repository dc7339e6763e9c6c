//! Eval command implementation

use anyhow::{Context, Result};
use ra_core::Relation;
use ra_query::{EvaluationStep, QuerySession};
use serde::Serialize;

use crate::cli::{EvalArgs, GlobalArgs, OutputFormat};
use crate::commands::common;
use crate::render::{render_relation, side_by_side, title};

const RELATIONS_TITLE: &str = "RELATION(S)";
const QUERY_TITLE: &str = "QUERY";
const STEPS_TITLE: &str = "STEPS";
const RESULT_TITLE: &str = "RESULT";

/// Execute the eval command
pub fn execute(args: &EvalArgs, global: &GlobalArgs) -> Result<()> {
    let loaded = common::load_config(global)?;
    let path = common::resolve_input(args.input.as_deref(), &loaded);
    let document = common::load_document(&path)?;

    let null_marker = args
        .null_marker
        .as_deref()
        .unwrap_or(loaded.config.null_marker.as_str());
    let explain = args.explain || loaded.config.explain;

    let mut session = QuerySession::from_relations(document.relations.iter().cloned())
        .context("Failed to register input relations")?;
    let result = session
        .evaluate(&document.query)
        .with_context(|| format!("Failed to evaluate query: {}", document.query))?;

    match args.output {
        OutputFormat::Table => print_tables(
            &document.relations,
            &document.query,
            &session,
            &result,
            null_marker,
            explain,
        ),
        OutputFormat::Json => {
            let steps = explain.then(|| session.steps());
            print_json(&document.query, &result, steps)?
        }
    }

    Ok(())
}

/// JSON form of an evaluation
#[derive(Debug, Serialize)]
struct EvalReport<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [EvaluationStep]>,
    result: &'a Relation,
}

fn print_json(query: &str, result: &Relation, steps: Option<&[EvaluationStep]>) -> Result<()> {
    let report = EvalReport {
        query,
        steps,
        result,
    };
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_tables(
    relations: &[Relation],
    query: &str,
    session: &QuerySession,
    result: &Relation,
    null_marker: &str,
    explain: bool,
) {
    let blocks: Vec<Vec<String>> = relations
        .iter()
        .map(|r| render_relation(r, null_marker))
        .collect();
    let relation_lines = side_by_side(&blocks);
    let line_width = relation_lines
        .first()
        .map_or(0, |line| line.chars().count());

    println!("\n{}", title(RELATIONS_TITLE, line_width));
    println!();
    for line in &relation_lines {
        println!("{}", line);
    }

    println!("\n{}", title(QUERY_TITLE, line_width));
    println!();
    println!("{}", query);

    if explain {
        println!("\n{}", title(STEPS_TITLE, line_width));
        for (i, step) in session.steps().iter().enumerate() {
            let target = step.target.as_ref().map_or("result", |t| t.as_str());
            println!("\n{}. {} <- {} ({} rows)", i + 1, target, step.expression, step.rows);
            let intermediate = step
                .target
                .as_ref()
                .and_then(|t| session.store().get(t.as_str()).ok());
            if let Some(relation) = intermediate {
                for line in render_relation(&relation, null_marker) {
                    println!("{}", line);
                }
            }
        }
    }

    println!("\n{}", title(RESULT_TITLE, line_width));
    for line in render_relation(result, null_marker) {
        println!("{}", line);
    }
    println!();
}
