mod classifier;
mod error;
mod reader;
mod record;

pub use classifier::classify;
pub use error::ReaderError;
pub use reader::read_log_file;
pub use record::{LogLine, RecordKind};
