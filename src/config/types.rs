use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// mdprint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for literal Markdown output
    pub markdown: Markdown,

    /// Settings for styled terminal output
    pub console: Console,

    /// Separators used when printing objects
    pub output: Output,
}

/// Literal Markdown output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Markdown {
    /// Number of `#` used for a heading without an explicit level
    pub default_heading_level: u8,
}

/// Terminal output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Console {
    /// Banner level used for a heading without an explicit level
    pub default_heading_level: u8,

    /// Column a code block is padded to
    pub code_block_width: usize,

    /// FIGlet font files, one per heading level starting at level 1.
    /// Levels without an entry use the built-in standard font.
    pub heading_fonts: Vec<PathBuf>,
}

/// Object separator and line terminator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    pub sep: String,
    pub end: String,
}

impl Default for Markdown {
    fn default() -> Self {
        Self {
            default_heading_level: 3,
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self {
            default_heading_level: 5,
            code_block_width: 80,
            heading_fonts: Vec::new(),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
        }
    }
}
