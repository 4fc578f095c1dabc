//! Theme selection state.

use rtreefilter::ThemeManager;

/// State related to visual theme and styling.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Creates the state, falling back to "Dark" for unknown theme names.
    pub fn with_theme(theme_name: &str) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(theme_name).is_some() {
            theme_name.to_string()
        } else {
            tracing::warn!(theme = theme_name, "unknown theme, using Dark");
            "Dark".to_string()
        };
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        assert_eq!(ThemeState::with_theme("Neon").current_theme_name(), "Dark");
        assert_eq!(ThemeState::with_theme("Light").current_theme_name(), "Light");
    }
}
