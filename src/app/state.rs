use crate::upload::{CleanOutcome, SelectedFile};
use std::sync::mpsc::Receiver;

/// Transient per-window state: the queued files and the in-flight flag, plus
/// the messages shown in the footer. Nothing here survives the window.
#[derive(Default)]
pub struct CleanState {
    pub files: Vec<SelectedFile>,
    pub is_cleaning: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub outcome_receiver: Option<Receiver<CleanOutcome>>,
}

impl CleanState {
    pub fn clear(&mut self) {
        *self = CleanState::default();
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_cleaning {
            "⏳ Cleaning..."
        } else {
            "🧹 Clean Files"
        }
    }
}
