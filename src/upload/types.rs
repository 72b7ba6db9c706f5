use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// A user-picked local file queued for cleaning. `name` is the dedup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl SelectedFile {
    /// Returns `None` when the path has no usable file name.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        Some(Self { name, path, size })
    }
}

/// The cleaned payload returned by the backend, plus the filename to save it
/// under (from `content-disposition`, or the default).
#[derive(Debug, Clone)]
pub struct CleanedArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum CleanError {
    /// Non-2xx response. The message comes from the server's JSON error body
    /// when present, otherwise a generic fallback.
    #[error("{0}")]
    Server(String),
    /// The request never completed.
    #[error("Failed to connect to the server")]
    Transport(#[from] reqwest::Error),
    /// A queued file could not be read back from disk at submit time.
    #[error("Failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub type CleanOutcome = Result<CleanedArtifact, CleanError>;
