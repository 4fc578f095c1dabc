//! Application-level coordination and workflow management.
//!
//! Handles dataset loading, filter application and the interactions coming
//! back from the panels.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use rtreefilter::{DatasetContext, FilterSession};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing file loading workflows
/// - Applying debounced and immediate filter changes
/// - Click-to-filter
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous file loading.
    ///
    /// Immediately clears the previous dataset to show the loading indicator.
    pub fn open_file(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.reset_dataset_state();
        loader.start_file_load(path, ctx);
    }

    /// Generates the demo dataset and installs it.
    pub fn open_demo_dataset(state: &mut AppState, loader: &mut AsyncLoader) {
        state.reset_dataset_state();
        let context = loader.load_demo_dataset(state.demo_seed);
        Self::install_session(state, context);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success(context) => {
                Self::install_session(state, context);
                true
            }
            LoadResult::Error(error_msg) => {
                warn!(error = %error_msg, "dataset load failed");
                state.error_message = Some(format!("Error loading dataset: {}", error_msg));
                state.session = None;
                true
            }
            LoadResult::None => false,
        }
    }

    /// Starts a filter session for a freshly loaded dataset.
    ///
    /// Whatever is in the filter box is applied right away.
    pub fn install_session(state: &mut AppState, context: DatasetContext) {
        state.session = Some(FilterSession::new(context));
        state.error_message = None;
        state.graph_view.reset();

        let text = state.filter.text().to_string();
        state.filter.set_text(&text);
        Self::apply_filter(state, &text);
    }

    /// Records a keystroke in the filter box; the refresh waits for the debounce.
    pub fn handle_filter_edited(state: &mut AppState, now: Instant) {
        state.filter.signal_edit(now);
    }

    /// Applies a debounced filter edit once its window elapsed.
    ///
    /// # Returns
    /// Time until the next pending edit is due, so the caller can schedule a repaint.
    pub fn poll_filter(state: &mut AppState, now: Instant) -> Option<Duration> {
        if let Some(predicate) = state.filter.poll_due(now) {
            Self::apply_filter(state, &predicate);
        }
        state.filter.time_until_due(now)
    }

    /// Click-to-filter: the clicked node's name becomes the filter text.
    ///
    /// # Arguments
    /// * `index` - Position of the clicked node in the current render frame
    pub fn handle_node_clicked(state: &mut AppState, index: usize) {
        let Some(session) = state.session.as_mut() else {
            return;
        };
        let Some(name) = session.select(index) else {
            debug!(index, "click outside the current frame");
            return;
        };

        state.error_message = session.last_error().map(|e| format!("Filter error: {}", e));
        state.filter.set_text(&name);
        state.filter.mark_applied(&name);
        state.sync_frame();
    }

    /// Empties the filter box and shows the whole dataset.
    pub fn clear_filter(state: &mut AppState) {
        state.filter.set_text("");
        Self::apply_filter(state, "");
    }

    fn apply_filter(state: &mut AppState, predicate: &str) {
        state.filter.mark_applied(predicate);
        let Some(session) = state.session.as_mut() else {
            return;
        };

        state.error_message = match session.set_predicate(predicate) {
            Ok(_) => None,
            Err(err) => Some(format!("Filter error: {}", err)),
        };
        state.sync_frame();
    }
}
