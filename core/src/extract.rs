//! Structural redaction: replay the buffered log and rewrite it around a
//! fight selection.
//!
//! Two gates run per line, coarse first. The segment gate drops every
//! line of a zone segment with no selected fight, zone header included.
//! The fight gate, inside kept segments, copies selected fights verbatim
//! and collapses each unselected fight's whole line range into a single
//! placeholder record; lines outside any fight pass through untouched.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::scan::ScanResult;
use crate::selection::Selection;

const OUTPUT_SUFFIX: &str = "_extract.log";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to write extract file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to persist extract file {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Derive the output path from the input path: `foo.log` becomes
/// `foo_extract.log`.
pub fn extract_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// One forward pass over the replayed lines, writing the rewritten stream.
///
/// Both cursors advance monotonically with the line number; no line is
/// visited twice.
pub fn write_extract<W: Write>(
    scan: &ScanResult,
    selection: &Selection,
    out: &mut W,
) -> io::Result<()> {
    let mut segment_idx = 0usize;
    let mut fight_idx = 0usize;

    for line in &scan.lines {
        let number = line.line_number;

        while segment_idx + 1 < scan.segments.len()
            && scan.segments[segment_idx + 1].start_line <= number
        {
            segment_idx += 1;
        }
        let segment_open = scan
            .segments
            .get(segment_idx)
            .is_some_and(|s| s.fights.iter().any(|&f| selection.contains(f)));
        if !segment_open {
            continue;
        }

        while fight_idx < scan.fights.len() && number > scan.fights[fight_idx].end_line {
            fight_idx += 1;
        }
        match scan.fights.get(fight_idx) {
            Some(fight) if fight.start_line <= number && number <= fight.end_line => {
                if selection.contains(fight_idx) {
                    out.write_all(line.raw.as_bytes())?;
                } else if number == fight.start_line {
                    // one placeholder stands in for the whole range
                    out.write_all(placeholder(&line.timestamp_field).as_bytes())?;
                }
            }
            _ => out.write_all(line.raw.as_bytes())?,
        }
    }
    Ok(())
}

/// Rewrite the scanned log next to the input file.
///
/// The stream goes to a temporary file first and is renamed into place,
/// so a failed run never leaves a partial extract behind.
pub fn extract_to_file(
    scan: &ScanResult,
    selection: &Selection,
    input: &Path,
) -> Result<PathBuf, ExtractError> {
    let dest = extract_path(input);
    let tmp = dest.with_extension("log.tmp");

    let file = fs::File::create(&tmp).map_err(|source| ExtractError::Write {
        path: tmp.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    let written = write_extract(scan, selection, &mut out).and_then(|()| out.flush());
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp);
        return Err(ExtractError::Write { path: dest, source });
    }
    drop(out);

    fs::rename(&tmp, &dest).map_err(|source| ExtractError::Persist {
        path: dest.clone(),
        source,
    })?;
    Ok(dest)
}

/// Inert filler record standing in for an excluded fight. Carries the
/// timestamp field of the range's first line so the file stays in
/// chronological order.
fn placeholder(timestamp_field: &str) -> String {
    format!("00|{timestamp_field}|0038||trash fight|0000000000000000\n")
}
