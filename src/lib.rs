// Copyright (C) Brian G. Milnes 2025

//! rename-global - AST-based bulk identifier renaming
//!
//! Renames identifiers across every Rust file of one or more Cargo
//! packages, either by exact name (`--from`/`--to`) or by normalizing
//! underscore and mis-cased names into camel case with canonical
//! initialisms (`--auto`). Files are parsed with ra_ap_syntax, so a
//! rewritten file differs from the original only in the renamed tokens.

pub mod parser;
pub mod naming;
pub mod changes;
pub mod visitor;
pub mod fixer;
pub mod package;
pub mod orchestrator;
pub mod config;
pub mod args;
pub mod error;
pub mod ast_utils;
pub mod logging;
pub mod tool_runner;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used items
pub use parser::parser::{parse_file, SyntaxUnit};
pub use naming::naming::{lint_name, NameTransformer, COMMON_INITIALISMS};
pub use changes::changes::ChangeRecorder;
pub use visitor::visitor::{RenameSite, RenameVisitor};
pub use fixer::fixer::{fix_file, fix_unit, FileOutcome, FileStatus};
pub use package::package::{
    expand_patterns, rename_in_package, resolve_package, Expansion, Package, PackageOutcome,
};
pub use orchestrator::orchestrator::{change_lines, run, site_lines, Change, Failure, RunReport};
pub use config::config::{Config, ConfigError, Mode};
pub use args::args::{format_number, RenameArgs, USAGE};
pub use error::error::RenameError;
pub use ast_utils::ast_utils::*;

/// Rename identifiers in Rust source text, returning the new text.
///
/// Nothing is written; useful for previews and tests.
pub fn rename_source(source: &str, transformer: &NameTransformer) -> Result<String> {
    let mut unit = SyntaxUnit::from_source(Path::new("<source>"), source.to_string())?;
    RenameVisitor::new(transformer).visit(&mut unit);
    Ok(unit.print())
}
