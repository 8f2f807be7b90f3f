//! Check Command
//!
//! Verify checksums from file (like sha256sum -c). The digest size of each
//! line follows from its hex length.

use super::hash::hash_file;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use streebog::{Variant, HASH_SIZE_256, HASH_SIZE_512};

// =============================================================================
// PARSING
// =============================================================================

/// Variant implied by a hex digest of `len` characters.
fn variant_for_hex_len(len: usize) -> Option<Variant> {
    match len {
        l if l == HASH_SIZE_256 * 2 => Some(Variant::Streebog256),
        l if l == HASH_SIZE_512 * 2 => Some(Variant::Streebog512),
        _ => None,
    }
}

/// Split a `hash  filename` line. Blank lines and comments yield `None`.
fn parse_line(line: &str) -> Option<Result<(&str, &str), ()>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    // Format: "hash  filename" (two spaces)
    Some(
        line.split_once("  ")
            .map(|(hash, path)| (hash.trim(), path.trim()))
            .ok_or(()),
    )
}

// =============================================================================
// CHECK
// =============================================================================

/// Outcome of a checksum run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    pub failed: usize,
}

/// Verify every line of `reader`, printing one status line per file.
pub fn verify_checksums<R: BufRead>(reader: R) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for line in reader.lines() {
        let line = line?;
        let (expected_hash, file_path) = match parse_line(&line) {
            None => continue,
            Some(Ok(parts)) => parts,
            Some(Err(())) => {
                log::warn!("Invalid format: {}", line.trim());
                continue;
            }
        };

        let Some(variant) = variant_for_hex_len(expected_hash.len()) else {
            log::warn!(
                "Unrecognised digest length {} for {}",
                expected_hash.len(),
                file_path
            );
            continue;
        };
        report.total += 1;

        match hash_file(Path::new(file_path), variant) {
            Ok(digest) => {
                if hex::encode(digest).eq_ignore_ascii_case(expected_hash) {
                    println!("{file_path}: OK");
                } else {
                    println!("{file_path}: FAILED");
                    report.failed += 1;
                }
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e:#})");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &PathBuf) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let report = verify_checksums(BufReader::new(file))?;

    println!();
    if report.failed == 0 {
        println!("All {} checksums verified", report.total);
    } else {
        eprintln!(
            "WARNING: {} of {} checksums did NOT match",
            report.failed, report.total
        );
        std::process::exit(1);
    }

    Ok(())
}
