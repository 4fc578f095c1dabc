//! Theme support for the tree filter viewer
//!
//! Color palettes for the graph view and the surrounding panels, plus a
//! manager that looks themes up by name and applies them to egui visuals.
//!
//! # Examples
//!
//! ```
//! use rtreefilter::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula edges: {:?}", dracula.colors.edge);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Panels
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub canvas_background: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,

    // Interaction
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Graph
    /// Nodes that matched the filter text
    pub node_match: Color32,
    /// Nodes kept only because a descendant matched
    pub node_ancestor: Color32,
    pub node_outline: Color32,
    pub edge: Color32,

    // Status
    pub error: Color32,
    pub warning: Color32,
    pub accent: Color32,
}

/// A named palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Built-in themes indexed by name
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names in alphabetical order
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Writes a theme's colors into egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light panels, steel blue nodes".to_string(),
        dark: false,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),
            canvas_background: Color32::from_rgb(252, 252, 252),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            node_match: hex_to_color32("#4682b4"),
            node_ancestor: Color32::from_rgb(170, 185, 200),
            node_outline: Color32::from_rgb(60, 60, 60),
            edge: Color32::from_rgb(150, 150, 150),

            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),
            accent: Color32::from_rgb(40, 100, 200),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "egui dark panels, steel blue nodes".to_string(),
        dark: true,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            canvas_background: Color32::from_rgb(27, 27, 27),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            node_match: hex_to_color32("#4682b4"),
            node_ancestor: Color32::from_rgb(85, 95, 110),
            node_outline: Color32::from_rgb(200, 200, 200),
            edge: Color32::from_rgb(110, 110, 110),

            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
            accent: Color32::from_rgb(52, 152, 219),
        },
    }
}

fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula palette".to_string(),
        dark: true,
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            canvas_background: hex_to_color32("#1e1f29"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#343746"),
            border: hex_to_color32("#6272a4"),

            node_match: hex_to_color32("#bd93f9"),
            node_ancestor: hex_to_color32("#44475a"),
            node_outline: hex_to_color32("#f8f8f2"),
            edge: hex_to_color32("#6272a4"),

            error: hex_to_color32("#ff5555"),
            warning: hex_to_color32("#ffb86c"),
            accent: hex_to_color32("#8be9fd"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color32::BLACK;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
        assert!(!manager.get_theme("Light").unwrap().dark);
        assert!(manager.get_theme("Missing").is_none());
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#4682b4"), Color32::from_rgb(70, 130, 180));
        assert_eq!(hex_to_color32("4682b4"), Color32::from_rgb(70, 130, 180));
        assert_eq!(hex_to_color32("#fff"), Color32::BLACK);
        assert_eq!(hex_to_color32("#zz0000"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_apply_theme_sets_panel_fill() {
        let manager = ThemeManager::new();
        let theme = manager.get_theme("Dracula").unwrap();
        let mut visuals = egui::Visuals::dark();
        manager.apply_theme(theme, &mut visuals);
        assert_eq!(visuals.panel_fill, hex_to_color32("#282a36"));
        assert_eq!(visuals.override_text_color, Some(hex_to_color32("#f8f8f2")));
    }
}
