//! fflsplit-core: combat log fight discovery and extraction.
//!
//! The library makes two passes over an ACT-style pipe-delimited combat
//! log. The discovery pass classifies every line, tracks encounter
//! lifecycle and produces the fight list; the extraction pass replays the
//! buffered lines and rewrites them, dropping zone segments without
//! selected fights and collapsing unselected fights into placeholder
//! records.

pub mod combat_log;
pub mod config;
pub mod extract;
pub mod game_data;
pub mod scan;
pub mod segment;
pub mod selection;
pub mod tracker;

// Re-exports for convenience
pub use combat_log::{LogLine, ReaderError, RecordKind};
pub use config::DirectorCodes;
pub use extract::{ExtractError, extract_path, extract_to_file, write_extract};
pub use scan::{ScanResult, scan_file, scan_lines};
pub use segment::{SegmentIndex, ZoneSegment};
pub use selection::{BadToken, Selection};
pub use tracker::{FightRecord, FightTracker, Outcome};
