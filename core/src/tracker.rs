//! Encounter lifecycle tracking.
//!
//! A single `FightTracker` consumes classified lines in file order and
//! emits one `FightRecord` per encounter that closes with a kill or wipe
//! marker. Attempts abandoned before a close marker (a new start marker,
//! a self-identity announce, or end of file) are discarded without being
//! reported.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::combat_log::{LogLine, RecordKind};
use crate::config::DirectorCodes;
use crate::game_data::{
    DAMAGE_DOWN_NAMES, ENVIRONMENT_PREFIX, NPC_PREFIX, OFFENSIVE_CATEGORY, PLAYER_PREFIX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Kill,
    Wipe,
}

/// One completed encounter attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightRecord {
    /// First line of the attempt's content, 1-based inclusive.
    pub start_line: u64,
    /// Line of the close marker, 1-based inclusive.
    pub end_line: u64,
    /// HH:MM:SS of the first real action.
    pub start_time_label: String,
    pub duration_seconds: i64,
    pub outcome: Outcome,
    pub map_name: String,
    pub self_deaths: u32,
    pub self_debuffs: u32,
    /// Deaths across all player combatants, self included.
    pub party_deaths: u32,
    pub party_debuffs: u32,
    /// Line of the zone-change record this fight falls under, if any.
    pub enclosing_zone_line: Option<u64>,
}

impl FightRecord {
    pub fn duration_label(&self) -> String {
        format!(
            "{} m {:02} s",
            self.duration_seconds / 60,
            self.duration_seconds % 60
        )
    }
}

#[derive(Debug, Clone)]
struct CombatStart {
    timestamp: NaiveDateTime,
    time_label: String,
    line: u64,
}

/// Per-attempt state, zeroed on every reset.
#[derive(Debug, Default)]
struct Attempt {
    start: Option<CombatStart>,
    /// Start line dictated by the last reset marker; when absent, the
    /// first action's own line opens the range.
    pending_start_line: Option<u64>,
    self_deaths: u32,
    self_debuffs: u32,
    party_deaths: u32,
    party_debuffs: u32,
}

pub struct FightTracker {
    codes: DirectorCodes,
    self_id: Option<String>,
    map_name: String,
    pending_zone_line: Option<u64>,
    attempt: Attempt,
}

impl FightTracker {
    pub fn new(codes: DirectorCodes) -> Self {
        Self {
            codes,
            self_id: None,
            map_name: String::new(),
            pending_zone_line: None,
            attempt: Attempt::default(),
        }
    }

    /// Drop any in-progress attempt without emitting a record.
    pub fn reset(&mut self) {
        self.attempt = Attempt::default();
    }

    fn reset_at(&mut self, next_start_line: u64) {
        self.reset();
        self.attempt.pending_start_line = Some(next_start_line);
    }

    fn in_combat(&self) -> bool {
        self.attempt.start.is_some()
    }

    /// Feed one classified line; returns a completed fight when this line
    /// closes an encounter.
    pub fn observe(&mut self, line: &LogLine) -> Option<FightRecord> {
        match &line.kind {
            RecordKind::ZoneChange { map_name } => {
                self.map_name = map_name.clone();
                self.pending_zone_line = Some(line.line_number);
                None
            }
            RecordKind::SelfIdentity { actor_id } => {
                // Entering an instance mid-session produces no start
                // marker; the identity announce doubles as the reset point.
                self.self_id = Some(actor_id.clone());
                self.reset_at(line.line_number + 1);
                None
            }
            RecordKind::NetworkAction {
                source_id,
                category,
            } => {
                if !self.in_combat()
                    && source_id.as_bytes().first() == Some(&PLAYER_PREFIX)
                    && *category == OFFENSIVE_CATEGORY
                    && let Some(timestamp) = line.timestamp
                {
                    self.attempt.start = Some(CombatStart {
                        timestamp,
                        time_label: timestamp.format("%H:%M:%S").to_string(),
                        line: self
                            .attempt
                            .pending_start_line
                            .unwrap_or(line.line_number),
                    });
                }
                None
            }
            RecordKind::Death { actor_id } => {
                if self.in_combat() && actor_id.as_bytes().first() == Some(&PLAYER_PREFIX) {
                    self.attempt.party_deaths += 1;
                    if self.self_id.as_deref() == Some(actor_id) {
                        self.attempt.self_deaths += 1;
                    }
                }
                None
            }
            RecordKind::StatusApply {
                status_name,
                caster_id,
                target_id,
            } => {
                if self.in_combat() && counts_as_damage_down(status_name, caster_id, target_id) {
                    self.attempt.party_debuffs += 1;
                    if self.self_id.as_deref() == Some(target_id) {
                        self.attempt.self_debuffs += 1;
                    }
                }
                None
            }
            RecordKind::DirectorEvent { subtype } => self.observe_director(subtype, line),
            RecordKind::Ignored => None,
        }
    }

    fn observe_director(&mut self, subtype: &str, line: &LogLine) -> Option<FightRecord> {
        if self.codes.is_start(subtype) {
            self.reset_at(line.line_number + 1);
            return None;
        }
        let outcome = self.codes.outcome(subtype)?;
        let Some(start) = self.attempt.start.take() else {
            // Known quirk carried over from the source tool: a kill/wipe
            // marker with no captured start produces no record.
            debug!(
                line = line.line_number,
                subtype, "close marker with no captured start, dropping"
            );
            return None;
        };
        let end_timestamp = line.timestamp?;

        let record = FightRecord {
            start_line: start.line,
            end_line: line.line_number,
            start_time_label: start.time_label,
            duration_seconds: end_timestamp
                .signed_duration_since(start.timestamp)
                .num_seconds()
                .max(0),
            outcome,
            map_name: self.map_name.clone(),
            self_deaths: self.attempt.self_deaths,
            self_debuffs: self.attempt.self_debuffs,
            party_deaths: self.attempt.party_deaths,
            party_debuffs: self.attempt.party_debuffs,
            enclosing_zone_line: self.pending_zone_line,
        };
        self.reset();
        Some(record)
    }
}

fn counts_as_damage_down(status_name: &str, caster_id: &str, target_id: &str) -> bool {
    DAMAGE_DOWN_NAMES.contains(status_name)
        && matches!(
            caster_id.as_bytes().first(),
            Some(&NPC_PREFIX | &ENVIRONMENT_PREFIX)
        )
        && target_id.as_bytes().first() == Some(&PLAYER_PREFIX)
}
