//! catalog1 CLI - sign and compare files with fuzzy min-hash signatures.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; RUST_LOG overrides the --verbose default
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Sign(args) => {
            let config = cli::load_configuration(cli.config.as_deref(), cli.num_perms)?;
            cli::sign_command(args, &config)?;
        }
        Commands::Compare(args) => {
            let config = cli::load_configuration(cli.config.as_deref(), cli.num_perms)?;
            cli::compare_command(args, &config)?;
        }
        Commands::StrongHash(args) => {
            cli::strong_hash_command(args)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args)?;
        }
    }

    Ok(())
}
