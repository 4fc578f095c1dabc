//! Utility modules for the tree filter viewer.

pub mod formatting;

pub use formatting::{format_count, format_memory_mb, get_current_memory_mb};
