//! Trace files: a reference sequence persisted as comma-separated integers.
//!
//! # Format
//! ```text
//! 12,0,3,3,97,12
//! ```
//! No header and no trailing newline. Whitespace around entries is ignored
//! when reading, so hand-edited or line-wrapped files load as well. A file
//! that is empty (or only whitespace) holds the empty sequence.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::common::{Error, PageId, Result};

/// Write `references` to `path`, replacing any existing file.
///
/// Returns the [`fingerprint`] of the written sequence.
pub fn write_trace<P: AsRef<Path>>(path: P, references: &[PageId]) -> Result<u32> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for (i, page) in references.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write!(writer, "{}", page.0)?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    let crc = fingerprint(references);
    tracing::debug!(
        target: "pagesim::trace",
        path = %path.as_ref().display(),
        references = references.len(),
        fingerprint = crc,
        "wrote trace file"
    );
    Ok(crc)
}

/// Read a trace written by [`write_trace`].
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::MalformedTrace` if an entry is not a non-negative integer
pub fn read_trace<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let references = parse_trace(&contents)?;

    tracing::debug!(
        target: "pagesim::trace",
        path = %path.as_ref().display(),
        references = references.len(),
        "read trace file"
    );
    Ok(references)
}

/// Parse comma-separated page ids.
pub fn parse_trace(contents: &str) -> Result<Vec<PageId>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    contents
        .split(',')
        .enumerate()
        .map(|(position, entry)| {
            let entry = entry.trim();
            entry
                .parse::<u32>()
                .map(PageId)
                .map_err(|_| Error::MalformedTrace {
                    position,
                    entry: entry.to_string(),
                })
        })
        .collect()
}

/// CRC32 of the sequence's page ids in little-endian order.
///
/// Two traces with the same fingerprint are, for practical purposes, the
/// same sequence.
pub fn fingerprint(references: &[PageId]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for page in references {
        hasher.update(&page.0.to_le_bytes());
    }
    hasher.finalize()
}
