//! CLI command implementations

pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod eval;
