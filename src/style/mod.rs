//! Style composition module
//!
//! Turns a set of style flags into either a Markdown prefix/suffix pair or a
//! single terminal rendering plan, applying a fixed precedence:
//! heading, then inline code, then code block, then emphasis.

mod composer;

pub use composer::{
    ConsolePlan, Decoration, Heading, Style, StyleWarning, MAX_BANNER_LEVEL, MAX_MARKDOWN_LEVEL,
};
