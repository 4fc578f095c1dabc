//! UI panel rendering subsystem
//!
//! - Header panel (dataset controls, filter box, theme selector)
//! - Node list panel (filtered nodes in frame order)
//! - Graph panel (tree drawing with pan, zoom and click-to-filter)
//! - Status bar (memory, source and counts)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod node_list_panel;
pub mod graph_panel;
pub mod status_bar;
pub mod panel_manager;
