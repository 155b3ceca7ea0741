//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - text: Print values with emphasis or as a heading
//! - list: Print a JSON array of rows as a table
//! - dict: Print a JSON object of columns as a table

pub mod config;
pub mod table;
pub mod text;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mdprint::config::{self as mdconfig, Config};
use mdprint::{Printer, Result};

/// Load the config for a print command
fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    mdconfig::load_or_default(config_path.as_deref())
}

/// Printer for `--output`: appended Markdown for a file, the console otherwise
fn open_printer(output: Option<PathBuf>, config: Config) -> Result<Printer<Box<dyn Write>>> {
    match output {
        Some(path) if path != Path::new("-") => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            Ok(Printer::markdown(Box::new(file), config))
        }
        _ => Ok(Printer::console(Box::new(io::stdout()), config)),
    }
}

/// Expand `\n`, `\t` and `\\` typed on the command line
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
