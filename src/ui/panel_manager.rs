//! Panel orchestration and layout management.
//!
//! Lays out the header, node list, graph and status panels and funnels their
//! interactions into a single [`PanelInteraction`] for the application.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::ui::{graph_panel, header, node_list_panel, status_bar};
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(PathBuf),
    /// User requested the demo dataset
    OpenDemoRequested,
    /// The filter text changed
    FilterEdited,
    /// User cleared the filter
    ClearFilter,
    /// A node was clicked in the list or the graph
    NodeClicked(usize),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from `eframe::App::update()`.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name())?.clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, &theme_colors) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => PanelInteraction::OpenFileRequested(path),
                    header::HeaderInteraction::OpenDemoRequested => PanelInteraction::OpenDemoRequested,
                    header::HeaderInteraction::FilterEdited => PanelInteraction::FilterEdited,
                    header::HeaderInteraction::ClearFilter => PanelInteraction::ClearFilter,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        // Left panel: node list
        let list_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::SidePanel::left("node_list_panel")
            .default_width(ctx.content_rect().width() * 0.25)
            .resizable(true)
            .frame(list_frame)
            .show(ctx, |ui| {
                ui.heading("Nodes");
                ui.separator();

                if let Some(node_list_panel::NodeListInteraction::NodeClicked(index)) =
                    node_list_panel::render_node_list_panel(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::NodeClicked(index));
                }
            });

        // Center: graph
        let graph_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(graph_frame).show(ctx, |ui| {
            ui.heading("Tree View");
            ui.separator();

            if let Some(graph_panel::GraphPanelInteraction::NodeClicked(index)) =
                graph_panel::render_graph_panel(ui, state, loader, &theme_colors)
            {
                interaction = Some(PanelInteraction::NodeClicked(index));
            }
        });

        state.selection.finish_frame();

        interaction
    }
}
