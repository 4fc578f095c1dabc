//! I/O modules for dataset loading.

pub mod async_loader;

pub use async_loader::{AsyncLoader, LoadResult};
