//! Check command implementation

use anyhow::{Context, Result};
use ra_query::RelationStore;

use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::common;

/// Execute the check command
pub fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<()> {
    let loaded = common::load_config(global)?;
    let path = common::resolve_input(args.input.as_deref(), &loaded);
    println!("Checking input document: {}\n", path.display());

    let document = common::load_document(&path)?;
    for relation in &document.relations {
        println!(
            "  {} ({} columns, {} rows)",
            relation.label(),
            relation.columns().len(),
            relation.len()
        );
    }

    let store = RelationStore::with_sources(document.relations)
        .context("Relations cannot be used for evaluation")?;

    println!("\nQuery: {}", document.query);
    println!("✓ {} relations, 1 query", store.len());
    Ok(())
}
