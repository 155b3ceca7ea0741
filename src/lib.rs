//! Dual-output print helpers
//!
//! Prints values with Markdown emphasis and tables either as styled terminal
//! output (ANSI attributes, ASCII art banners) or as literal Markdown written
//! to any stream.

pub mod config;
pub mod display;
pub mod error;
pub mod printer;
pub mod style;
pub mod table;

pub use error::{MdprintError, Result};
pub use printer::{DictOptions, ListOptions, PrintOptions, Printer};
pub use style::{Heading, Style, StyleWarning};
