use chrono::{NaiveDate, NaiveDateTime};
use memchr::memchr_iter;

use super::record::{LogLine, RecordKind};
use crate::game_data::{DIRECTOR_PREFIX, SELF_ID_LEN};

#[cfg(test)]
mod tests;

/// Classify one raw line into a typed record.
///
/// Classification never fails: unknown codes, missing fields and
/// unparseable timestamps all degrade to `RecordKind::Ignored`. A record
/// whose timestamp cannot be read is useless to the tracker even when its
/// code is known, so it is ignored as a whole.
pub fn classify(line_number: u64, raw: String) -> LogLine {
    let text = raw.trim_end_matches(['\r', '\n']);
    let pipes: Vec<usize> = memchr_iter(b'|', text.as_bytes()).collect();

    let timestamp_field = field(text, &pipes, 1).unwrap_or("").to_string();
    let timestamp = parse_timestamp(&timestamp_field);

    let kind = if timestamp.is_some() {
        classify_fields(text, &pipes)
    } else {
        RecordKind::Ignored
    };

    LogLine {
        line_number,
        raw,
        kind,
        timestamp,
        timestamp_field,
    }
}

fn classify_fields(text: &str, pipes: &[usize]) -> RecordKind {
    match field(text, pipes, 0).unwrap_or("") {
        "01" => match field(text, pipes, 3) {
            Some(map_name) if !map_name.is_empty() => RecordKind::ZoneChange {
                map_name: map_name.to_string(),
            },
            _ => RecordKind::Ignored,
        },
        "02" => match field(text, pipes, 2) {
            Some(id) if id.len() == SELF_ID_LEN => RecordKind::SelfIdentity {
                actor_id: id.to_string(),
            },
            _ => RecordKind::Ignored,
        },
        "21" | "22" => {
            let (Some(source_id), Some(category)) =
                (field(text, pipes, 2), field(text, pipes, 6))
            else {
                return RecordKind::Ignored;
            };
            RecordKind::NetworkAction {
                source_id: source_id.to_string(),
                category: category.as_bytes().first().copied().unwrap_or(0),
            }
        }
        "25" => match field(text, pipes, 2) {
            Some(actor_id) if !actor_id.is_empty() => RecordKind::Death {
                actor_id: actor_id.to_string(),
            },
            _ => RecordKind::Ignored,
        },
        "26" => {
            let (Some(status_name), Some(caster_id), Some(target_id)) = (
                field(text, pipes, 3),
                field(text, pipes, 5),
                field(text, pipes, 7),
            ) else {
                return RecordKind::Ignored;
            };
            RecordKind::StatusApply {
                status_name: status_name.to_string(),
                caster_id: caster_id.to_string(),
                target_id: target_id.to_string(),
            }
        }
        "33" => match field(text, pipes, 3) {
            Some(command)
                if command.len() == DIRECTOR_PREFIX.len() + 2
                    && command.starts_with(DIRECTOR_PREFIX) =>
            {
                RecordKind::DirectorEvent {
                    subtype: command[DIRECTOR_PREFIX.len()..].to_string(),
                }
            }
            _ => RecordKind::Ignored,
        },
        _ => RecordKind::Ignored,
    }
}

/// Pipe-delimited field access; field 0 is the 2-digit record code.
fn field<'a>(text: &'a str, pipes: &[usize], idx: usize) -> Option<&'a str> {
    let start = if idx == 0 {
        0
    } else {
        pipes.get(idx - 1).map(|p| p + 1)?
    };
    let end = match pipes.get(idx) {
        Some(&p) => p,
        None if idx == pipes.len() => text.len(),
        None => return None,
    };
    Some(&text[start..end])
}

// parse the YYYY-MM-DDTHH:MM:SS prefix of the timestamp field; sub-second
// digits and the offset suffix are carried along but never interpreted
fn parse_timestamp(segment: &str) -> Option<NaiveDateTime> {
    let b = segment.as_bytes();
    if b.len() < 19
        || b[4] != b'-'
        || b[7] != b'-'
        || b[10] != b'T'
        || b[13] != b':'
        || b[16] != b':'
    {
        return None;
    }

    let num = |range: std::ops::Range<usize>| -> Option<u32> {
        let mut value = 0u32;
        for i in range {
            value = value * 10 + (b[i] as char).to_digit(10)?;
        }
        Some(value)
    };

    let date = NaiveDate::from_ymd_opt(num(0..4)? as i32, num(5..7)?, num(8..10)?)?;
    date.and_hms_opt(num(11..13)?, num(14..16)?, num(17..19)?)
}
