//! Theme selection and application.

use crate::app::AppState;
use tracing::info;

/// Coordinates theme management.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme_name = state.theme.current_theme_name();
        if let Some(theme) = state.theme.theme_manager().get_theme(theme_name) {
            let mut visuals = if theme.dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };

            state.theme.theme_manager().apply_theme(theme, &mut visuals);
            ctx.set_visuals(visuals);
        }
    }

    /// Switches to another theme by name.
    pub fn change_theme(state: &mut AppState, theme_name: String) {
        if theme_name != state.theme.current_theme_name() {
            info!(theme = %theme_name, "theme changed");
            state.theme.set_theme(theme_name);
        }
    }
}
