use std::path::PathBuf;

use mdprint::{Heading, PrintOptions, Result, Style};

use super::{load_config, open_printer, unescape};

/// Style flags as given on the command line
pub struct Flags {
    /// `None` without `--heading`, `Some(None)` for a bare `--heading`
    pub heading: Option<Option<u8>>,
    pub bold: bool,
    pub italics: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub code_block: bool,
}

impl Flags {
    fn style(&self) -> Style {
        let heading = match self.heading {
            None => Heading::Off,
            Some(None) => Heading::Default,
            Some(Some(level)) => Heading::Level(level),
        };
        Style::new()
            .heading(heading)
            .bold(self.bold)
            .italics(self.italics)
            .strikethrough(self.strikethrough)
            .code(self.code)
            .code_block(self.code_block)
    }
}

/// Print values with the requested style
pub fn run(
    objects: Vec<String>,
    flags: Flags,
    sep: Option<String>,
    end: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;

    let mut options = PrintOptions::from_output(&config.output).style(flags.style());
    if let Some(sep) = sep {
        options.sep = unescape(&sep);
    }
    if let Some(end) = end {
        options.end = unescape(&end);
    }
    options.flush = true;

    let mut printer = open_printer(output, config)?;
    printer.mdprint(&objects, &options)
}
