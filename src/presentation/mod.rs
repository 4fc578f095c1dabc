//! Presentation layer for visual styling and color mapping.
//!
//! Keeps color decisions out of the panels and the renderer.

pub mod color_mapping;
