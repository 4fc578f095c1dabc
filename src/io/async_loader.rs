//! Asynchronous dataset loading.
//!
//! Datasets are read in a background thread so the GUI stays responsive
//! while large or compressed files are parsed.

use eframe::egui;
use rtreefilter::{Dataset, DatasetContext, DatasetReader, JsonDatasetReader, VirtualDatasetReader};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{debug, info};

/// Result of a completed loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success(DatasetContext),
    /// Loading failed with an error
    Error(String),
    /// No loading operation finished since the last check
    None,
}

/// Manages background loading of dataset files.
///
/// Starting a new load replaces the receiver of the previous one, so a
/// superseded load finishes in the background and its result is dropped.
pub struct AsyncLoader {
    /// Channel receiver for the load in progress
    loading_receiver: Option<Receiver<Result<Dataset, String>>>,

    /// Source of the dataset currently being loaded
    pending_source: Option<String>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_receiver: None,
            pending_source: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_receiver.is_some()
    }

    /// Source being loaded, if any.
    pub fn pending_source(&self) -> Option<&str> {
        self.pending_source.as_deref()
    }

    /// Starts loading a dataset file in a background thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Dataset file (`.json` or `.br`)
    /// * `ctx` - egui context, repainted when the load completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        let source = path.display().to_string();
        self.pending_source = Some(source.clone());
        info!(source = %source, "loading dataset");

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            let result = match path.to_str() {
                Some(path_str) => JsonDatasetReader::new()
                    .read(path_str)
                    .map_err(|e| format!("{:#}", e)),
                None => Err(format!("Path is not valid UTF-8: {}", source)),
            };

            // The receiver is gone when a newer load replaced this one
            if sender.send(result).is_err() {
                debug!(source = %source, "superseded load finished");
            }

            ctx_handle.request_repaint();
        });
    }

    /// Generates the demo dataset synchronously.
    ///
    /// Any file load still in flight is abandoned.
    pub fn load_demo_dataset(&mut self, seed: u64) -> DatasetContext {
        self.loading_receiver = None;
        self.pending_source = None;

        let dataset = VirtualDatasetReader::with_seed(seed).generate();
        info!(seed, nodes = dataset.len(), "demo dataset generated");
        DatasetContext::new(dataset, format!("demo dataset (seed {})", seed))
    }

    /// Returns the result of the background load once it is available.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Loading completed successfully
    /// * `LoadResult::Error` - Loading failed with an error
    /// * `LoadResult::None` - Still loading, or nothing to load
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };

        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let source = self.pending_source.take().unwrap_or_default();
        match result {
            Ok(dataset) => {
                info!(source = %source, nodes = dataset.len(), "dataset loaded");
                LoadResult::Success(DatasetContext::new(dataset, source))
            }
            Err(error_msg) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
