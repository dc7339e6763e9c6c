//! ra-core - Core library for relalg
//!
//! This crate provides the typed cell model, immutable relations with their
//! relational-algebra operations, the selection predicate language, the input
//! document loader, and configuration parsing shared by the other crates.

pub mod cell;
pub mod config;
pub mod error;
pub mod loader;
pub mod predicate;
pub mod relation;
pub mod relation_name;
pub mod symbol;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use cell::{Cell, Row};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use loader::{load_document, parse_document, InputDocument};
pub use predicate::{CompareOp, Operand, Predicate};
pub use relation::join::JoinKind;
pub use relation::set_op::SetOpKind;
pub use relation::Relation;
pub use relation_name::RelationName;
