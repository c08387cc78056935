use clap::Parser;

use anyhow::Result;

use compdbgen::cli::{self, Args, CliConfig};
use compdbgen::{generate, generate_compile_commands, render_database, GenerateResult};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    if let Err(error) = run(args) {
        cli::handle_error(&error);
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> GenerateResult<()> {
    let config = CliConfig::from_args(args)?;
    tracing::debug!(config = ?config.generator_config, "resolved configuration");

    if config.to_stdout() {
        let records = generate_compile_commands(&config.generator_config)?;
        println!("{}", render_database(&records)?);
        return Ok(());
    }

    let report = generate(&config.generator_config)?;
    cli::show_success(
        &format!(
            "Wrote {} entries to {}",
            report.entries,
            report.output_path.display()
        ),
        config.is_quiet(),
    );

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("COMPDBGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
