//! Compile command synthesis
//!
//! This module turns the engine and testbed source trees into compilation
//! database entries.

pub mod command;
pub mod config;
pub mod record;
pub mod source_set;

pub use command::CommandBuilder;
pub use config::GeneratorConfig;
pub use record::CompileRecord;
pub use source_set::{SourceSet, SourceSetKind};

use crate::error::GenerateResult;

/// Build the entries for every source set, engine entries first.
pub fn generate_compile_commands(config: &GeneratorConfig) -> GenerateResult<Vec<CompileRecord>> {
    config.validate()?;

    let mut records = Vec::new();
    for set in SourceSet::all(config) {
        records.extend(set.collect_records()?);
    }

    tracing::info!(entries = records.len(), "generated compile commands");
    Ok(records)
}
