use chrono::NaiveDateTime;

/// The closed set of record types the tracker cares about. Anything the
/// classifier cannot place lands in `Ignored` and passes through the
/// pipeline untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecordKind {
    /// 21/22: networked ability use. `category` is the leading digit of
    /// the action-category field; `4` marks an outgoing offensive action.
    NetworkAction { source_id: String, category: u8 },
    /// 01: zone/instance entry.
    ZoneChange { map_name: String },
    /// 02: announces which actor id belongs to the log owner.
    SelfIdentity { actor_id: String },
    /// 25: an actor died.
    Death { actor_id: String },
    /// 26: a status effect was applied.
    StatusApply {
        status_name: String,
        caster_id: String,
        target_id: String,
    },
    /// 33: director/system lifecycle event, two-digit subtype.
    DirectorEvent { subtype: String },
    #[default]
    Ignored,
}

/// One classified line of the log.
///
/// `raw` keeps the original bytes, line terminator included, so the
/// extraction pass can reproduce kept lines byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub line_number: u64,
    pub raw: String,
    pub kind: RecordKind,
    pub timestamp: Option<NaiveDateTime>,
    /// The untouched timestamp field, reused verbatim in placeholder lines.
    pub timestamp_field: String,
}
