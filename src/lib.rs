//! Compilation database generator
//!
//! Walks the engine and testbed source trees of a project and writes a
//! `compile_commands.json` describing how each file would be compiled.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod output;

use std::path::PathBuf;

// Re-export commonly used types
pub use discovery::find_source_files;
pub use error::{DiscoveryError, GenerateError, GenerateErrorKind, GenerateResult};
pub use generator::{generate_compile_commands, CompileRecord, GeneratorConfig, SourceSet};
pub use output::{render_database, write_database};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub entries: usize,
    pub output_path: PathBuf,
}

/// Generate the database and write it to the configured output path
pub fn generate(config: &GeneratorConfig) -> GenerateResult<GenerationReport> {
    let records = generate_compile_commands(config)?;
    let output_path = config.output_path();
    write_database(&records, &output_path)?;

    Ok(GenerationReport {
        entries: records.len(),
        output_path,
    })
}
