//! Compilation database serialization

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{GenerateError, GenerateErrorKind, GenerateResult};
use crate::generator::CompileRecord;

const INDENT: &[u8] = b"    ";

/// Render entries as a JSON array indented with four spaces
pub fn render_database(records: &[CompileRecord]) -> GenerateResult<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    records.serialize(&mut serializer).map_err(|e| {
        GenerateError::generate(GenerateErrorKind::serialize(e.to_string()))
    })?;

    String::from_utf8(buffer).map_err(|e| {
        GenerateError::generate_with_source(
            GenerateErrorKind::serialize("output is not valid UTF-8".to_string()),
            e.into(),
        )
    })
}

/// Write the database to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_database(records: &[CompileRecord], path: &Path) -> GenerateResult<()> {
    let json = render_database(records)?;
    let write_error = |e: std::io::Error| {
        GenerateError::generate(GenerateErrorKind::write(e.to_string(), path.to_path_buf()))
    };

    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(json.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote compilation database");
    Ok(())
}
