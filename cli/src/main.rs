//! Streebog CLI
//!
//! GOST R 34.11-2012 hash command-line tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files};
use std::path::PathBuf;
use streebog::Variant;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "streebog")]
#[command(about = "GOST R 34.11-2012 (Streebog) hash", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest size in bits (256 or 512)
    #[arg(short, long, default_value_t = 512)]
    bits: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: streebog [FILE]... or streebog --help");
                std::process::exit(1);
            }

            let variant = Variant::from_bits(cli.bits)?;
            hash_files(&cli.files, variant)?;
        }
    }

    Ok(())
}
