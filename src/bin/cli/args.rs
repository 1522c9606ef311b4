//! CLI argument structures for the catalog1 binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fuzzy min-hash signatures for files
#[derive(Parser)]
#[command(name = "catalog1")]
#[command(version = VERSION)]
#[command(about = "Compute and compare fuzzy min-hash signatures of files")]
#[command(long_about = "
Sign files with a fixed-width min-hash signature and compare signatures by
counting equal slots. Files that differ by a few bytes share most slots.

Common Usage:

  # Print the signature of each file
  catalog1 sign a.bin b.bin

  # Count equal slots between two files
  catalog1 compare a.bin b.bin

  # Use 32 permutations instead of the default 16
  catalog1 --num-perms 32 sign a.bin
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Signer configuration file (YAML)
    #[arg(short, long, global = true, env = "CATALOG1_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the number of permutations per signature
    #[arg(long, global = true)]
    pub num_perms: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the signature of each file
    Sign(SignArgs),

    /// Count equal signature slots between two files
    Compare(CompareArgs),

    /// Print the strong (exact identity) hash of each file
    #[command(name = "strong-hash")]
    StrongHash(StrongHashArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Validate a signer configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args)]
pub struct SignArgs {
    /// Files to sign
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct CompareArgs {
    /// First file
    pub left: PathBuf,

    /// Second file
    pub right: PathBuf,
}

#[derive(Args)]
pub struct StrongHashArgs {
    /// Files to hash
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per file: hex signature followed by the path
    Text,
    /// JSON array of records
    Json,
}
