use serde::{Deserialize, Serialize};

/// One compilation database entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRecord {
    /// Working directory of the invocation
    pub directory: String,
    /// Full command line, ending with `file`
    pub command: String,
    /// Source file being compiled
    pub file: String,
}
