//! Gridpad - Elm-style editable grid
//!
//! This crate provides the core types and logic for an in-memory spreadsheet
//! grid implementing the Elm Architecture pattern. The window, renderer and
//! event loop live in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod layout;
pub mod messages;
pub mod model;
pub mod theme;
pub mod toolbar;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::GridTheme;
