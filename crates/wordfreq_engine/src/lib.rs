//! Wordfreq engine: input reading, report rendering and report files.
mod decode;
mod input;
mod persist;
mod report;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use input::{read_text, InputText, InputUnavailable, UnavailableReason};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use report::{Report, ReportFormat, ReportOptions, DEFAULT_LIMIT};
