//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use streebog::{HashOutput, Hasher, Variant};

/// Read buffer per file.
const READ_BUFFER_SIZE: usize = 128 * 1024;

/// Hash a single file with `variant`.
pub fn hash_file(path: &Path, variant: Variant) -> Result<HashOutput> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut hasher = Hasher::new(variant);
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let n = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    log::debug!(
        "{}: {} bytes with {}",
        path.display(),
        hasher.buffered_len(),
        variant
    );
    Ok(hasher.digest())
}

/// Hash files and print `hex  path` lines in input order.
pub fn hash_files(files: &[PathBuf], variant: Variant) -> Result<()> {
    let results: Vec<(&PathBuf, Result<HashOutput>)> = files
        .par_iter()
        .map(|path| (path, hash_file(path, variant)))
        .collect();

    let mut failed = 0usize;
    for (path, result) in &results {
        match result {
            Ok(digest) => println!("{}  {}", hex::encode(digest), path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {} file(s)", failed);
    }

    Ok(())
}
