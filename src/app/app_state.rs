//! Centralized application state for the tree filter viewer.
//!
//! The state is composed of focused components so panels can borrow the
//! parts they need independently:
//! - the filter session of the loaded dataset
//! - the filter text and its debouncer
//! - hover, theme and graph view state

use crate::state::{FilterState, GraphView, SelectionState, ThemeState};
use rtreefilter::{compute_layout, FilterSession, LayoutPoint, ViewerConfig};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Session of the loaded dataset (None until the first load)
    pub session: Option<FilterSession>,

    /// Filter text box and debounce
    pub filter: FilterState,

    /// Hovered node
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Pan and zoom of the graph canvas
    pub graph_view: GraphView,

    // ===== Top-Level State =====
    /// Layout of the current render frame, one point per node
    pub layout: Vec<LayoutPoint>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Seed used for the demo dataset
    pub demo_seed: u64,
}

impl AppState {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            session: None,
            filter: FilterState::new(config.debounce),
            selection: SelectionState::new(),
            theme: ThemeState::with_theme(&config.theme),
            graph_view: GraphView::new(),
            layout: Vec::new(),
            error_message: None,
            demo_seed: config.demo_seed,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Recomputes the layout after the render frame changed.
    ///
    /// Hover indices refer to the old frame, so they are dropped too.
    pub fn sync_frame(&mut self) {
        self.layout = match &self.session {
            Some(session) => compute_layout(session.frame()),
            None => Vec::new(),
        };
        self.selection.clear();
    }

    /// Forgets the loaded dataset and everything derived from it.
    pub fn reset_dataset_state(&mut self) {
        self.session = None;
        self.layout.clear();
        self.selection.clear();
        self.graph_view.reset();
        self.error_message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}
