//! Node and edge colors derived from the current theme.

use egui::Color32;
use rtreefilter::{with_alpha, ThemeColors, ThemeManager};

/// Returns the current theme's color palette, falling back to "Dark".
pub fn theme_colors<'a>(theme_manager: &'a ThemeManager, current_theme_name: &str) -> Option<&'a ThemeColors> {
    theme_manager
        .get_theme(current_theme_name)
        .or_else(|| theme_manager.get_theme("Dark"))
        .map(|t| &t.colors)
}

/// Fill color of a node.
///
/// Direct matches use the match color; nodes kept only as ancestors are
/// drawn muted so the matches stand out.
///
/// # Arguments
/// * `direct_match` - Whether the node matched the filter text itself
/// * `hovered` - Whether the pointer is over the node
/// * `colors` - The current theme's color palette
pub fn node_fill(direct_match: bool, hovered: bool, colors: &ThemeColors) -> Color32 {
    match (direct_match, hovered) {
        (_, true) => colors.accent,
        (true, false) => colors.node_match,
        (false, false) => colors.node_ancestor,
    }
}

/// Edge color; edges into ancestor-only nodes are faded.
pub fn edge_color(child_is_direct_match: bool, colors: &ThemeColors) -> Color32 {
    if child_is_direct_match {
        colors.edge
    } else {
        with_alpha(colors.edge, 140)
    }
}

/// Label color of a node in the list panel.
pub fn list_label_color(direct_match: bool, colors: &ThemeColors) -> Color32 {
    if direct_match {
        colors.text
    } else {
        colors.text_dim
    }
}
