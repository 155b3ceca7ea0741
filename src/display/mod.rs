//! Terminal display module
//!
//! Handles styled console output with automatic TTY detection.

mod banner;
mod formatter;
mod terminal;

pub use banner::BannerFonts;
pub use formatter::ConsoleRenderer;
pub use terminal::should_use_colors;
