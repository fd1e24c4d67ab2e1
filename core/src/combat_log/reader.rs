use encoding_rs::UTF_8;
use memchr::memchr_iter;
use memmap2::Mmap;
use std::fs;
use std::path::Path;

use super::classifier::classify;
use super::error::ReaderError;
use super::record::LogLine;

/// Read and classify every line of a log file.
///
/// The whole file is buffered so the extraction pass can replay it
/// without reopening. Every physical line counts toward the 1-based
/// numbering, empty ones included, and each `LogLine` keeps its original
/// terminator.
pub fn read_log_file(path: &Path) -> Result<Vec<LogLine>, ReaderError> {
    let file = fs::File::open(path).map_err(|source| ReaderError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mmap = unsafe { Mmap::map(&file) }.map_err(|source| ReaderError::MemoryMap {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = mmap.as_ref();

    let mut lines: Vec<LogLine> = Vec::new();
    let mut start = 0usize;
    for end in memchr_iter(b'\n', bytes) {
        lines.push(decode_line(lines.len() as u64 + 1, &bytes[start..=end]));
        start = end + 1;
    }
    if start < bytes.len() {
        // trailing line without a terminator
        lines.push(decode_line(lines.len() as u64 + 1, &bytes[start..]));
    }

    Ok(lines)
}

fn decode_line(line_number: u64, bytes: &[u8]) -> LogLine {
    let (text, _, _) = UTF_8.decode(bytes);
    classify(line_number, text.into_owned())
}
