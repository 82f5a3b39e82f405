//! VR Assurance Care TUI: the provider directory page in a terminal.
//!
//! Screens:
//! - Directory: nav, hero search form, provider list, tabbed sections
//! - Sign in: country / phone card
//!
//! Rendering is a pure function of [`AppState`]; key events mutate it.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::AppConfig;
pub use input::handle_key;
pub use theme::Theme;
