use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wordfreq_logging::{wf_debug, wf_info};

use crate::decode::{decode_text, DecodeError};

/// Text read from an input file, ready for counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    pub text: String,
    pub encoding_label: String,
    pub byte_len: u64,
}

/// The single failure kind of the input source: the text could not be obtained.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("input unavailable at {}: {reason}", .path.display())]
pub struct InputUnavailable {
    pub path: PathBuf,
    pub reason: UnavailableReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    NotFound,
    Io(String),
    Undecodable { encoding: String },
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::NotFound => write!(f, "file not found"),
            UnavailableReason::Io(message) => write!(f, "io error: {message}"),
            UnavailableReason::Undecodable { encoding } => {
                write!(f, "undecodable as {encoding}")
            }
        }
    }
}

impl InputUnavailable {
    fn new(path: &Path, reason: UnavailableReason) -> Self {
        Self {
            path: path.to_path_buf(),
            reason,
        }
    }
}

/// Read and decode the text file at `path`.
pub fn read_text(path: &Path) -> Result<InputText, InputUnavailable> {
    let bytes = fs::read(path).map_err(|err| {
        let reason = match err.kind() {
            io::ErrorKind::NotFound => UnavailableReason::NotFound,
            _ => UnavailableReason::Io(err.to_string()),
        };
        wf_debug!("Failed to read input {:?}: {}", path, reason);
        InputUnavailable::new(path, reason)
    })?;

    let decoded = decode_text(&bytes).map_err(|err| {
        wf_debug!("Failed to decode input {:?}: {}", path, err);
        let DecodeError::Malformed { encoding } = err;
        InputUnavailable::new(path, UnavailableReason::Undecodable { encoding })
    })?;

    wf_debug!("Decoded {:?} as {}", path, decoded.encoding_label);
    wf_info!("Read {} bytes from {:?}", bytes.len(), path);

    Ok(InputText {
        text: translate_newlines(decoded.text),
        encoding_label: decoded.encoding_label,
        byte_len: bytes.len() as u64,
    })
}

/// Universal newlines: `\r\n` and lone `\r` become `\n`.
fn translate_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
