//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `input` - Keyboard event to message mapping
//! - `mouse` - Click and wheel handling with hit-testing

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
