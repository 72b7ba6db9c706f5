mod client;
mod queue;
mod types;

pub use client::{CleanClient, DEFAULT_BASE_URL, DEFAULT_OUTPUT_NAME};
pub use queue::merge_by_name;
pub use types::{CleanError, CleanOutcome, CleanedArtifact, SelectedFile};
