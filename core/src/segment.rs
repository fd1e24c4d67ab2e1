//! Zone segmentation of the log.
//!
//! Segments are the coarse redaction unit: a segment whose fights are all
//! unselected is removed from the output wholesale, zone-change header
//! included.

use hashbrown::HashMap;

use crate::combat_log::{LogLine, RecordKind};
use crate::tracker::FightRecord;

/// A contiguous run of lines belonging to one zone entry.
///
/// Segments partition the file. When the file does not open with a
/// zone-change record, a leading segment starting at line 1 covers the
/// preamble; fights seen before any zone record belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSegment {
    pub start_line: u64,
    pub end_line: u64,
    /// Indices into the fight list of the fights enclosed by this segment.
    pub fights: Vec<usize>,
}

pub struct SegmentIndex;

impl SegmentIndex {
    /// Group fights under their enclosing zone line and lay out the
    /// segment ranges in file order.
    pub fn build(lines: &[LogLine], fights: &[FightRecord]) -> Vec<ZoneSegment> {
        let total = lines.len() as u64;
        let zone_lines: Vec<u64> = lines
            .iter()
            .filter(|l| matches!(l.kind, RecordKind::ZoneChange { .. }))
            .map(|l| l.line_number)
            .collect();

        // fights with no preceding zone record key on 0 (the preamble)
        let mut by_zone: HashMap<u64, Vec<usize>> = HashMap::new();
        for (idx, fight) in fights.iter().enumerate() {
            by_zone
                .entry(fight.enclosing_zone_line.unwrap_or(0))
                .or_default()
                .push(idx);
        }

        let mut segments = Vec::with_capacity(zone_lines.len() + 1);
        if total > 0 && zone_lines.first().copied() != Some(1) {
            segments.push(ZoneSegment {
                start_line: 1,
                end_line: zone_lines.first().map_or(total, |z| z - 1),
                fights: by_zone.remove(&0).unwrap_or_default(),
            });
        }
        for (i, &zone_line) in zone_lines.iter().enumerate() {
            segments.push(ZoneSegment {
                start_line: zone_line,
                end_line: zone_lines.get(i + 1).map_or(total, |next| next - 1),
                fights: by_zone.remove(&zone_line).unwrap_or_default(),
            });
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat_log::classify;
    use crate::tracker::Outcome;

    fn lines(texts: &[&str]) -> Vec<LogLine> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| classify(i as u64 + 1, format!("{t}\n")))
            .collect()
    }

    fn fight(start: u64, end: u64, zone: Option<u64>) -> FightRecord {
        FightRecord {
            start_line: start,
            end_line: end,
            start_time_label: "00:00:00".to_string(),
            duration_seconds: 0,
            outcome: Outcome::Kill,
            map_name: String::new(),
            self_deaths: 0,
            self_debuffs: 0,
            party_deaths: 0,
            party_debuffs: 0,
            enclosing_zone_line: zone,
        }
    }

    const TS: &str = "2024-03-01T20:15:00.0000000+08:00";

    #[test]
    fn segments_partition_the_file() {
        let lines = lines(&[
            &format!("00|{TS}|junk|"),
            &format!("01|{TS}|2F0|Map A|"),
            &format!("00|{TS}|junk|"),
            &format!("01|{TS}|2F1|Map B|"),
            &format!("00|{TS}|junk|"),
        ]);
        let segments = SegmentIndex::build(&lines, &[]);
        assert_eq!(segments.len(), 3);
        assert_eq!((segments[0].start_line, segments[0].end_line), (1, 1));
        assert_eq!((segments[1].start_line, segments[1].end_line), (2, 3));
        assert_eq!((segments[2].start_line, segments[2].end_line), (4, 5));
    }

    #[test]
    fn fights_group_under_their_zone() {
        let lines = lines(&[
            &format!("01|{TS}|2F0|Map A|"),
            &format!("00|{TS}|junk|"),
            &format!("00|{TS}|junk|"),
            &format!("01|{TS}|2F1|Map B|"),
            &format!("00|{TS}|junk|"),
        ]);
        let fights = [fight(2, 2, Some(1)), fight(3, 3, Some(1)), fight(5, 5, Some(4))];
        let segments = SegmentIndex::build(&lines, &fights);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].fights, vec![0, 1]);
        assert_eq!(segments[1].fights, vec![2]);
    }

    #[test]
    fn preamble_fight_lands_in_leading_segment() {
        let lines = lines(&[
            &format!("00|{TS}|junk|"),
            &format!("00|{TS}|junk|"),
            &format!("01|{TS}|2F0|Map A|"),
        ]);
        let fights = [fight(1, 2, None)];
        let segments = SegmentIndex::build(&lines, &fights);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].fights, vec![0]);
        assert!(segments[1].fights.is_empty());
    }

    #[test]
    fn empty_file_has_no_segments() {
        assert!(SegmentIndex::build(&[], &[]).is_empty());
    }
}
