//! Tree Filter Viewer GUI Application
//!
//! Interactive viewer for hierarchical node datasets built on egui:
//! - Name filter with debounce that keeps every ancestor of a match
//! - Tree drawing with pan, zoom and click-to-filter
//! - Node list of the filtered result
//! - Background dataset loading with a loading indicator
//! - Light, Dark and Dracula themes
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Color mapping for nodes and edges
//! - `io/` - Background dataset loading
//! - `utils/` - Formatting helpers
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Graph drawing
//! - `state/` - Filter, hover, theme and view state

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

mod utils;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use rtreefilter::{init_tracing, ViewerConfig};
use ui::panel_manager::{PanelInteraction, PanelManager};

#[derive(Parser)]
#[command(name = "treefilter-gui", about = "Interactive tree filter viewer")]
struct Args {
    /// Dataset to open on startup (overrides TREEFILTER_DATA)
    file: Option<PathBuf>,

    /// Emit logs as JSON lines (overrides TREEFILTER_LOG_JSON)
    #[arg(long)]
    log_json: bool,
}

/// Main application entry point that initializes and launches the viewer.
fn main() -> eframe::Result {
    let args = Args::parse();
    let config = ViewerConfig::from_env().with_data_path(args.file);
    init_tracing(args.log_json || config.log_json);
    info!(?config, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Tree Filter Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Tree Filter Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(TreeFilterApp::new(config)))),
    )
}

/// The main viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading, filtering and click-to-filter
/// - `ThemeCoordinator` applies the selected theme
/// - `PanelManager` handles UI panel layout and rendering
struct TreeFilterApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous dataset loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl TreeFilterApp {
    fn new(config: ViewerConfig) -> Self {
        Self {
            state: AppState::from_config(&config),
            loader: AsyncLoader::new(),
            pending_file_load: config.data_path,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenDemoRequested => {
                ApplicationCoordinator::open_demo_dataset(&mut self.state, &mut self.loader);
            }
            PanelInteraction::FilterEdited => {
                let now = Instant::now();
                ApplicationCoordinator::handle_filter_edited(&mut self.state, now);
                if let Some(remaining) = self.state.filter.time_until_due(now) {
                    ctx.request_repaint_after(remaining);
                }
            }
            PanelInteraction::ClearFilter => {
                ApplicationCoordinator::clear_filter(&mut self.state);
            }
            PanelInteraction::NodeClicked(index) => {
                ApplicationCoordinator::handle_node_clicked(&mut self.state, index);
            }
        }
    }
}

impl eframe::App for TreeFilterApp {
    /// Main update loop.
    ///
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if one was configured
    /// 4. Apply a debounced filter edit that became due
    /// 5. Render all panels via PanelManager
    /// 6. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(remaining) = ApplicationCoordinator::poll_filter(&mut self.state, Instant::now()) {
            ctx.request_repaint_after(remaining);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
