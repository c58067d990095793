//! umlgen - PlantUML diagrams from a codebase model

mod generate_cli;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "umlgen")]
#[command(about = "Generate PlantUML diagrams from a codebase model", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate package, class and layer diagrams
    Generate(generate_cli::GenerateArgs),
}

/// Usage errors fail like any other failure
const USAGE_ERROR_EXIT_CODE: i32 = 1;

/// `--help` / `--version` output, which exits successfully
fn is_informational(err: &clap::Error) -> bool {
    !err.use_stderr()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_informational(&err) => err.exit(),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(USAGE_ERROR_EXIT_CODE);
        }
    };

    match cli.command {
        Commands::Generate(args) => generate_cli::run(args).await?,
    }

    Ok(())
}
