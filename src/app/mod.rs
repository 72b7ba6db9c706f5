mod state;
mod ui;

use crate::upload::{merge_by_name, CleanClient, CleanedArtifact, SelectedFile, DEFAULT_BASE_URL};
use eframe::{egui, App};
pub use state::CleanState;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{error, info, warn};

pub struct FileCleanerApp {
    state: CleanState,
    client: CleanClient,
}

impl Default for FileCleanerApp {
    fn default() -> Self {
        Self {
            state: CleanState::default(),
            client: CleanClient::new(DEFAULT_BASE_URL),
        }
    }
}

impl FileCleanerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("initializing file cleaner");
        Self::default()
    }

    /// Merges picked paths into the queue, dropping names already queued.
    pub fn add_files(&mut self, paths: Vec<PathBuf>) {
        let picked: Vec<SelectedFile> = paths
            .into_iter()
            .filter_map(SelectedFile::from_path)
            .collect();
        let before = self.state.files.len();
        self.state.files = merge_by_name(std::mem::take(&mut self.state.files), picked);
        info!(
            added = self.state.files.len() - before,
            queued = self.state.files.len(),
            "updated file queue"
        );
    }

    pub fn clear_queue(&mut self) {
        info!("clearing queue");
        self.state.clear();
    }

    /// Submits the queue as one multipart request on a worker thread. With an
    /// empty queue this only surfaces a validation message; no request is made.
    pub fn start_clean(&mut self) {
        if self.state.is_cleaning {
            return;
        }
        if self.state.files.is_empty() {
            warn!("submit attempted with an empty queue");
            self.state.error_message = Some("No files selected".to_string());
            return;
        }

        self.state.is_cleaning = true;
        self.state.error_message = None;
        self.state.status_message = None;

        let client = self.client.clone();
        let files = self.state.files.clone();
        let (sender, receiver) = mpsc::channel();
        self.state.outcome_receiver = Some(receiver);

        info!(files = files.len(), "starting clean request");
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let outcome = rt.block_on(client.clean_files(&files));
            sender.send(outcome).unwrap_or_default();
        });
    }

    /// Drains the worker channel. Every terminal outcome resets `is_cleaning`;
    /// the queue is left untouched so a failed run can simply be retried.
    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.state.is_cleaning {
            ctx.request_repaint();
        }

        let Some(receiver) = &self.state.outcome_receiver else {
            return;
        };
        let Ok(outcome) = receiver.try_recv() else {
            return;
        };

        self.state.outcome_receiver = None;
        self.state.is_cleaning = false;

        match outcome {
            Ok(artifact) => self.save_artifact(artifact),
            Err(err) => {
                error!("clean request failed: {err}");
                self.state.error_message = Some(format!("Error: {}", err));
            }
        }
        ctx.request_repaint();
    }

    /// Desktop analog of the browser download: a save-as dialog pre-seeded
    /// with the derived filename. The payload is dropped on return either way.
    fn save_artifact(&mut self, artifact: CleanedArtifact) {
        let Some(target) = rfd::FileDialog::new()
            .set_file_name(&artifact.file_name)
            .save_file()
        else {
            info!("save dialog dismissed, discarding artifact");
            self.state.status_message = Some("Download canceled".to_string());
            return;
        };

        match std::fs::write(&target, &artifact.bytes) {
            Ok(()) => {
                info!(path = %target.display(), "saved cleaned file");
                self.state.status_message = Some(format!("Saved to {}", target.display()));
            }
            Err(err) => {
                error!("failed to save cleaned file: {err}");
                self.state.error_message = Some(format!("Error: Failed to save file: {}", err));
            }
        }
    }
}

impl App for FileCleanerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::CleanError;

    #[test]
    fn empty_queue_submit_is_rejected_without_a_request() {
        let mut app = FileCleanerApp::default();
        app.start_clean();

        assert!(!app.state.is_cleaning);
        assert!(app.state.outcome_receiver.is_none());
        assert_eq!(app.state.error_message.as_deref(), Some("No files selected"));
    }

    #[test]
    fn reselecting_a_queued_name_is_a_no_op() {
        let mut app = FileCleanerApp::default();
        app.add_files(vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        app.add_files(vec![PathBuf::from("b.txt"), PathBuf::from("c.txt")]);

        let names: Vec<&str> = app.state.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn server_error_resets_the_flag_and_keeps_the_queue() {
        let mut app = FileCleanerApp::default();
        app.add_files(vec![PathBuf::from("a.txt")]);
        app.state.is_cleaning = true;

        let (sender, receiver) = mpsc::channel();
        app.state.outcome_receiver = Some(receiver);
        sender
            .send(Err(CleanError::Server("bad format".to_string())))
            .unwrap();

        let ctx = egui::Context::default();
        app.update_state(&ctx);

        assert!(!app.state.is_cleaning);
        assert!(app.state.outcome_receiver.is_none());
        assert_eq!(app.state.error_message.as_deref(), Some("Error: bad format"));
        assert_eq!(app.state.files.len(), 1);
    }

    #[test]
    fn clearing_resets_everything() {
        let mut app = FileCleanerApp::default();
        app.add_files(vec![PathBuf::from("a.txt")]);
        app.state.error_message = Some("Error: Processing failed".to_string());
        app.clear_queue();

        assert!(app.state.files.is_empty());
        assert!(app.state.error_message.is_none());
    }
}
