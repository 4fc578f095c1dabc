//! Status bar UI rendering
//!
//! Shows memory usage, the dataset source and filter counts.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::utils::{format_count, format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Loader, for the pending source
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        if let Some(source) = loader.pending_source() {
            ui.label(RichText::new(format!("Loading: {}", source)).strong());
            return;
        }

        let Some(session) = &state.session else {
            ui.label(RichText::new("No dataset loaded").strong());
            return;
        };

        let frame = session.frame();
        let total = session.context().dataset().len();
        ui.label(RichText::new(format!(
            "Source: {} | Nodes: {} / {} | Direct matches: {} | Roots: {}",
            session.context().source(),
            format_count(frame.len()),
            format_count(total),
            format_count(frame.direct_match_count()),
            format_count(session.context().dataset().root_count()),
        )).strong());

        if !session.predicate().is_empty() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Filter: \"{}\"", session.predicate())).strong());
        }

        if let Some(err) = session.last_error() {
            let error_color = ui.visuals().error_fg_color;
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(err.to_string()).strong().color(error_color));
        }
    });
}
