//! Discovery pass: one linear read of the log producing the fight list
//! and the zone segmentation.

use std::path::Path;

use crate::combat_log::{LogLine, ReaderError, read_log_file};
use crate::config::DirectorCodes;
use crate::segment::{SegmentIndex, ZoneSegment};
use crate::tracker::{FightRecord, FightTracker};

/// Immutable result of one discovery pass.
///
/// This is the only state shared with the extraction pass: the buffered
/// lines for replay plus the fight and segment lists. It is rebuilt from
/// scratch on every scan.
#[derive(Debug)]
pub struct ScanResult {
    pub lines: Vec<LogLine>,
    pub fights: Vec<FightRecord>,
    pub segments: Vec<ZoneSegment>,
}

pub fn scan_file(path: &Path, codes: DirectorCodes) -> Result<ScanResult, ReaderError> {
    Ok(scan_lines(read_log_file(path)?, codes))
}

pub fn scan_lines(lines: Vec<LogLine>, codes: DirectorCodes) -> ScanResult {
    let mut tracker = FightTracker::new(codes);
    let mut fights = Vec::new();
    for line in &lines {
        if let Some(fight) = tracker.observe(line) {
            fights.push(fight);
        }
    }
    let segments = SegmentIndex::build(&lines, &fights);
    ScanResult {
        lines,
        fights,
        segments,
    }
}
