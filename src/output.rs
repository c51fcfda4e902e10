//! Wordlist persistence: one candidate per line, no header

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "wordlist.txt";

/// Write candidates to any writer, returning the number of lines written
pub fn write_candidates<W: Write>(writer: W, candidates: &[String]) -> std::io::Result<usize> {
    let mut writer = BufWriter::new(writer);
    for candidate in candidates {
        writer.write_all(candidate.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(candidates.len())
}

/// Write the wordlist to `path`, replacing any existing file
pub fn output_wordlist(path: &Path, candidates: &[String]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create wordlist file {}", path.display()))?;
    let written = write_candidates(file, candidates)
        .with_context(|| format!("Failed to write wordlist to {}", path.display()))?;
    log::debug!("wrote {} candidates to {}", written, path.display());
    Ok(written)
}
