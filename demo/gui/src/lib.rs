//! # Demo GUI
//!
//! Interactive Black-Scholes heatmap for the terminal.
//!
//! ## Components
//! - **Session**: editable parameters, focus, edit buffer and the stored surfaces
//! - **Heatmap**: matrix → ANSI truecolor rows, green (low) to red (high)
//! - **View**: session → full text frame
//! - **App**: crossterm raw-mode loop feeding key events to the session
//!
//! Everything except [`app`] is pure and can be driven without a terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod heatmap;
pub mod logging;
pub mod session;
pub mod view;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::TuiApp;
    pub use crate::config::{Cli, ConfigError, SessionConfig};
    pub use crate::error::TuiError;
    pub use crate::event::InputEvent;
    pub use crate::session::{EditError, Field, Focus, Mode, Session, Transition};
}
