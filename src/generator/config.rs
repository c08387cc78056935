//! Configuration for compile database generation

use crate::error::{GenerateError, GenerateErrorKind, GenerateResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the SDK installation root
pub const SDK_ENV_VAR: &str = "VULKAN_SDK";

/// Compiler used in every synthesized command
pub const DEFAULT_COMPILER: &str = "clang";

/// File name of the database written into the project root
pub const DATABASE_FILE_NAME: &str = "compile_commands.json";

/// Generator configuration, built once at the entry point
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory holding `engine/` and `testbed/`
    pub project_root: PathBuf,
    /// Include directory of the graphics SDK
    pub sdk_include: PathBuf,
    /// Compiler program placed at the head of each command
    pub compiler: String,
    /// Output path override (default: `<project_root>/compile_commands.json`)
    pub output_path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Create a configuration with no SDK root (include path is `include`)
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            sdk_include: sdk_include_from(None),
            compiler: DEFAULT_COMPILER.to_string(),
            output_path: None,
        }
    }

    /// Create a configuration reading the SDK root from `VULKAN_SDK`
    pub fn from_env(project_root: impl Into<PathBuf>) -> Self {
        Self {
            sdk_include: sdk_include_from(std::env::var_os(SDK_ENV_VAR)),
            ..Self::new(project_root)
        }
    }

    pub fn with_sdk_include(mut self, sdk_include: impl Into<PathBuf>) -> Self {
        self.sdk_include = sdk_include.into();
        self
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Path the database is written to
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.project_root.join(DATABASE_FILE_NAME))
    }

    pub fn engine_dir(&self) -> PathBuf {
        self.project_root.join("engine")
    }

    pub fn testbed_dir(&self) -> PathBuf {
        self.project_root.join("testbed")
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> GenerateResult<()> {
        if self.compiler.trim().is_empty() {
            return Err(configuration_error("Compiler must not be empty"));
        }

        if !self.project_root.is_absolute() {
            return Err(configuration_error(&format!(
                "Project root must be an absolute path: {}",
                self.project_root.display()
            )));
        }

        if !self.project_root.is_dir() {
            return Err(configuration_error(&format!(
                "Project root is not a directory: {}",
                self.project_root.display()
            )));
        }

        Ok(())
    }
}

/// Join `include` onto an SDK root; an unset root yields a bare `include`.
pub fn sdk_include_from(sdk_root: Option<OsString>) -> PathBuf {
    Path::new(&sdk_root.unwrap_or_default()).join("include")
}

fn configuration_error(message: &str) -> GenerateError {
    GenerateError::generate(GenerateErrorKind::configuration(message.to_string()))
}
