//! The engine and testbed source sets

use std::fmt;
use std::path::{Path, PathBuf};

use crate::discovery::find_source_files;
use crate::error::DiscoveryResult;
use crate::generator::command::CommandBuilder;
use crate::generator::config::GeneratorConfig;
use crate::generator::record::CompileRecord;

const ENGINE_SUFFIXES: &[&str] = &[".c", ".m"];
const TESTBED_SUFFIXES: &[&str] = &[".c"];

/// Which module a source set builds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSetKind {
    /// Shared library
    Engine,
    /// Executable linking against the engine
    Testbed,
}

impl fmt::Display for SourceSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSetKind::Engine => write!(f, "engine"),
            SourceSetKind::Testbed => write!(f, "testbed"),
        }
    }
}

/// A source tree paired with the command template used for each of its files
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSet {
    pub kind: SourceSetKind,
    /// Directory walked for sources
    pub base_dir: PathBuf,
    /// Accepted file name suffixes
    pub suffixes: &'static [&'static str],
    /// Working directory recorded for each entry
    pub directory: PathBuf,
    pub template: CommandBuilder,
}

impl SourceSet {
    /// Engine dynamic library: `.c` and `.m` under `engine/src`, run from the project root
    pub fn engine(config: &GeneratorConfig) -> Self {
        let template = CommandBuilder::new(config.compiler.as_str())
            .args(["-g", "-fdeclspec", "-fPIC", "-dynamiclib"])
            .args(["-install_name", "@rpath/libengine.dylib"])
            .define("_DEBUG")
            .define("KEXPORT")
            .include("src")
            .include(&config.sdk_include)
            .link("vulkan")
            .link("objc")
            .framework("AppKit")
            .framework("QuartzCore")
            .arg("-c");

        Self {
            kind: SourceSetKind::Engine,
            base_dir: config.engine_dir().join("src"),
            suffixes: ENGINE_SUFFIXES,
            directory: config.project_root.clone(),
            template,
        }
    }

    /// Testbed executable: `.c` under `testbed/src`, run from `testbed/`
    pub fn testbed(config: &GeneratorConfig) -> Self {
        let template = CommandBuilder::new(config.compiler.as_str())
            .args(["-g", "-fdeclspec", "-fPIC"])
            .define("_DEBUG")
            .define("KIMPORT")
            .include("src")
            .include("../engine/src/")
            .library_path("../bin")
            .link("engine")
            .arg("-Wl,-rpath,@executable_path")
            .arg("-c");

        Self {
            kind: SourceSetKind::Testbed,
            base_dir: config.testbed_dir().join("src"),
            suffixes: TESTBED_SUFFIXES,
            directory: config.testbed_dir(),
            template,
        }
    }

    /// Both source sets, engine first
    pub fn all(config: &GeneratorConfig) -> Vec<Self> {
        vec![Self::engine(config), Self::testbed(config)]
    }

    /// Build the entry for one source file
    pub fn record_for(&self, file: &Path) -> CompileRecord {
        CompileRecord {
            directory: self.directory.to_string_lossy().into_owned(),
            command: self.template.build_for(file),
            file: file.to_string_lossy().into_owned(),
        }
    }

    /// Discover this set's sources and build an entry for each
    pub fn collect_records(&self) -> DiscoveryResult<Vec<CompileRecord>> {
        let files = find_source_files(&self.base_dir, self.suffixes)?;
        tracing::debug!(set = %self.kind, files = files.len(), "synthesizing commands");

        Ok(files.iter().map(|file| self.record_for(file)).collect())
    }
}
