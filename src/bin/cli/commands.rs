//! Command execution for the catalog1 binary.

use std::path::{Path, PathBuf};

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, info};

use catalog1::core::config::SignerConfig;
use catalog1::signature::{Signature, Signer, StrongHash};

use super::args::{CompareArgs, OutputFormat, SignArgs, StrongHashArgs, ValidateConfigArgs};

/// One signed file in JSON output
#[derive(Serialize)]
struct SignedFile {
    path: PathBuf,
    signature: Signature,
    strong_hash: StrongHash,
}

/// Load configuration from file (if given) and apply CLI overrides
pub fn load_configuration(
    config_path: Option<&Path>,
    num_perms: Option<usize>,
) -> anyhow::Result<SignerConfig> {
    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            SignerConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => SignerConfig::default(),
    };

    if let Some(num_perms) = num_perms {
        config.num_perms = num_perms;
    }

    config.validate()?;
    Ok(config)
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Sign every file and print the signatures
pub fn sign_command(args: SignArgs, config: &SignerConfig) -> anyhow::Result<()> {
    let signer = Signer::new(config)?;

    let buffers = args
        .paths
        .iter()
        .map(|path| read_input(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let signatures = signer.sign_batch(&buffers);
    info!("Signed {} file(s) with {} permutations", buffers.len(), signer.num_perms());

    let mut records = Vec::with_capacity(buffers.len());
    for ((path, buffer), result) in args.paths.into_iter().zip(&buffers).zip(signatures) {
        let signature =
            result.with_context(|| format!("Failed to sign {}", path.display()))?;
        records.push(SignedFile {
            strong_hash: catalog1::strong_hash(buffer),
            path,
            signature,
        });
    }

    match args.format {
        OutputFormat::Text => {
            for record in &records {
                println!("{}  {}", record.signature, record.path.display());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

/// Compare the signatures of two files
pub fn compare_command(args: CompareArgs, config: &SignerConfig) -> anyhow::Result<()> {
    let signer = Signer::new(config)?;

    let left = signer
        .sign(&read_input(&args.left)?)
        .with_context(|| format!("Failed to sign {}", args.left.display()))?;
    let right = signer
        .sign(&read_input(&args.right)?)
        .with_context(|| format!("Failed to sign {}", args.right.display()))?;

    let matches = left.matches(&right);
    let grade = left.similarity(&right).unwrap_or(0.0);

    println!("matches: {}/{}", matches, signer.num_perms());
    println!("grade: {grade:.4}");

    Ok(())
}

/// Print the strong hash of every file
pub fn strong_hash_command(args: StrongHashArgs) -> anyhow::Result<()> {
    for path in &args.paths {
        let data = read_input(path)?;
        println!("{}  {}", catalog1::strong_hash(&data), path.display());
    }

    Ok(())
}

/// Print default configuration in YAML format
///
/// Output is plain text so it can be redirected straight into a config file.
pub fn print_default_config() -> anyhow::Result<()> {
    println!("# Default catalog1 configuration");
    println!("# Usage: catalog1 --config your-config.yml sign <files>");

    let yaml_output = serde_yaml::to_string(&SignerConfig::default())?;
    println!("{yaml_output}");

    Ok(())
}

/// Validate a configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    match SignerConfig::from_yaml_file(&args.path) {
        Ok(config) => {
            println!(
                "{} {}",
                "Configuration file is valid:"
                    .if_supports_color(Stream::Stdout, |text| text.green()),
                args.path.display()
            );
            println!("  num_perms: {}", config.num_perms);
            println!("  seed: {:#018x}", config.seed);
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "Configuration validation failed:"
                    .if_supports_color(Stream::Stderr, |text| text.red()),
                e
            );
            anyhow::bail!("invalid configuration {}", args.path.display())
        }
    }
}
