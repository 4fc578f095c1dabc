//! Application-level modules for the tree filter viewer.
//!
//! This module contains the application coordinator and centralized state management.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
