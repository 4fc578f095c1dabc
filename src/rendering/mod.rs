//! Rendering subsystem for drawing the filtered tree.
//!
//! - Graph renderer (edges, nodes, labels, hit testing)

pub mod graph_renderer;
