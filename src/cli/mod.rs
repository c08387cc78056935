//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::error::{GenerateError, GenerateErrorKind, GenerateResult};
use crate::generator::GeneratorConfig;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "compdbgen")]
#[command(about = "Generate compile_commands.json for the engine and testbed modules")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Project root containing engine/ and testbed/ (default: current directory)
    #[arg()]
    pub project_root: Option<PathBuf>,

    /// SDK include directory (default: $VULKAN_SDK/include)
    #[arg(long)]
    pub sdk_include: Option<PathBuf>,

    /// Compiler placed at the head of each command (default: clang)
    #[arg(long)]
    pub compiler: Option<String>,

    /// Output file path (default: <project_root>/compile_commands.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the database to standard output instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub generator_config: GeneratorConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> GenerateResult<Self> {
        let generator_config = Self::create_generator_config(&args)?;

        Ok(Self {
            args,
            generator_config,
        })
    }

    fn create_generator_config(args: &Args) -> GenerateResult<GeneratorConfig> {
        let root = args.project_root.clone().unwrap_or_else(|| PathBuf::from("."));
        let project_root = std::fs::canonicalize(&root).map_err(|e| {
            GenerateError::generate(GenerateErrorKind::configuration(format!(
                "Cannot resolve project root '{}': {}",
                root.display(),
                e
            )))
        })?;

        let mut config = GeneratorConfig::from_env(project_root);
        if let Some(sdk_include) = &args.sdk_include {
            config = config.with_sdk_include(sdk_include);
        }
        if let Some(compiler) = &args.compiler {
            config = config.with_compiler(compiler);
        }
        if let Some(output) = &args.output {
            config = config.with_output_path(output);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn to_stdout(&self) -> bool {
        self.args.stdout
    }
}

/// Show a success message (if not in quiet mode)
pub fn show_success(message: &str, quiet: bool) {
    if !quiet {
        println!("✓ {}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &GenerateError) {
    eprintln!("✗ {}", error.user_message());

    if let GenerateError::Discovery(_) = error {
        eprintln!("\nTip: pass the directory containing engine/ and testbed/ as PROJECT_ROOT");
    }

    eprintln!("\nTry 'compdbgen --help' for usage information.");
}
