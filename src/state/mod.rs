//! State management modules for the tree filter viewer.
//!
//! State-only logic, no UI code:
//! - Filter state (text buffer, debounce)
//! - Selection state (hovered node)
//! - Theme state (theme manager, current theme)
//! - Graph view (pan, zoom)

mod filter_state;
mod selection;
mod theme_state;
mod graph_view;

pub use filter_state::FilterState;
pub use selection::SelectionState;
pub use theme_state::ThemeState;
pub use graph_view::GraphView;
