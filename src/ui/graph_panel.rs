//! Graph panel UI rendering
//!
//! Draws the filtered tree and turns pointer input into view changes and
//! click-to-filter requests:
//! - drag pans the canvas
//! - scroll or pinch zooms around the pointer
//! - hovering a node shows its details
//! - clicking a node filters by its name

use eframe::egui;
use rtreefilter::ThemeColors;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::graph_renderer::{self, GraphRenderer};

/// Zoom change per scrolled point
const SCROLL_ZOOM_SPEED: f32 = 0.002;

/// Result of graph panel interactions
pub enum GraphPanelInteraction {
    /// A node was clicked (index within the render frame)
    NodeClicked(usize),
}

/// Renders the graph panel
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `loader` - Loader, for the loading indicator
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<GraphPanelInteraction>` - User interaction result
pub fn render_graph_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loader: &AsyncLoader,
    theme_colors: &ThemeColors,
) -> Option<GraphPanelInteraction> {
    if loader.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(format!("Loading {}…", loader.pending_source().unwrap_or("dataset")));
        });
        return None;
    }

    let Some(session) = state.session.as_ref() else {
        ui.label("Open a dataset file or the demo dataset to begin");
        return None;
    };

    ui.horizontal(|ui| {
        ui.label(format!("Zoom: {:.1}x", state.graph_view.zoom()));
        if ui.button("⛶ Reset View").clicked() {
            state.graph_view.reset();
        }
    });

    let frame = session.frame();
    if frame.is_empty() {
        ui.label(format!("No nodes match \"{}\"", session.predicate()));
        return None;
    }

    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let canvas = response.rect;
    graph_renderer::paint_background(&painter, canvas, theme_colors.canvas_background);

    // ===== View Input =====

    if response.dragged() {
        state.graph_view.pan_by(response.drag_delta());
    }

    if let Some(pointer) = response.hover_pos() {
        let (scroll, pinch) = ui.input(|i| (i.smooth_scroll_delta.y, i.zoom_delta()));
        let factor = pinch * (scroll * SCROLL_ZOOM_SPEED).exp();
        if factor != 1.0 {
            state.graph_view.zoom_around(factor, pointer, canvas);
        }
    }

    // ===== Drawing =====

    let positions = graph_renderer::screen_positions(&state.layout, &state.graph_view, canvas);
    let radius = graph_renderer::node_radius(state.graph_view.zoom());
    let under_pointer = response
        .hover_pos()
        .and_then(|pointer| graph_renderer::hit_test(&positions, pointer, radius + 2.0));

    let mut renderer = GraphRenderer {
        painter: &painter,
        positions: &positions,
        zoom: state.graph_view.zoom(),
        hovered: state.selection.hovered_index().or(under_pointer),
        colors: theme_colors,
    };
    session.render_to(&mut renderer);

    // ===== Interaction =====

    let mut interaction = None;
    if let Some(index) = under_pointer {
        state.selection.report_hover(index);
        if response.clicked() {
            interaction = Some(GraphPanelInteraction::NodeClicked(index));
        }

        let node = &frame.nodes[index];
        let kind = if frame.direct_match[index] { "match" } else { "ancestor" };
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(egui::RichText::new(&frame.labels[index]).strong());
            ui.label(format!("Name: {}", node.name));
            ui.label(format!("Id: {} (was {})", node.id, frame.original_ids[index]));
            ui.label(format!("Kept as: {}", kind));
            ui.label("Click to filter by this name");
        });
    }

    interaction
}
