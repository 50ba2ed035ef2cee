//! Presentation layer for poliscope
//!
//! This crate contains CLI definitions, console output formatters,
//! progress reporters, and the interactive terminal UI.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SimpleProgress;
pub use tui::app::TuiApp;
