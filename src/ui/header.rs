//! Header panel UI rendering
//!
//! Handles the top bar with dataset controls, the filter box and the theme selector.

use eframe::egui;
use rtreefilter::ThemeColors;
use std::path::PathBuf;

use crate::app::{AppState, ThemeCoordinator};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a dataset file
    OpenFileRequested(PathBuf),
    /// User clicked "Demo Dataset"
    OpenDemoRequested,
    /// The filter text changed
    FilterEdited,
    /// User clicked the clear button
    ClearFilter,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Dataset").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Datasets", &["json", "br"])
                .add_filter("All Files", &["*"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Demo Dataset").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoRequested);
        }

        ui.separator();

        ui.label("Filter:");
        let response = ui.add(
            egui::TextEdit::singleline(state.filter.text_mut())
                .hint_text("node name")
                .desired_width(220.0),
        );
        if response.changed() {
            interaction = Some(HeaderInteraction::FilterEdited);
        }

        let can_clear = !state.filter.text().is_empty() || !state.filter.applied().is_empty();
        if ui.add_enabled(can_clear, egui::Button::new("✖")).on_hover_text("Clear filter").clicked() {
            interaction = Some(HeaderInteraction::ClearFilter);
        }

        if state.filter.is_pending() {
            ui.label(egui::RichText::new("…").color(theme_colors.text_dim));
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut current_theme = state.theme.current_theme_name().to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if current_theme != state.theme.current_theme_name() {
                ThemeCoordinator::change_theme(state, current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(theme_colors.error, err);
    }

    interaction
}
