//! Printer: writes styled values and tables to a destination
//!
//! The console gets terminal styling and banners when colors are enabled.
//! Every other destination, and a console without colors, gets literal
//! Markdown.

use std::fmt::Display;
use std::io::Write;

use crate::config::{Config, Output};
use crate::display::{should_use_colors, ConsoleRenderer};
use crate::error::Result;
use crate::style::Style;
use crate::table::{self, Row};

/// Options for [`Printer::mdprint`]
#[derive(Debug, Clone)]
pub struct PrintOptions {
    pub style: Style,
    /// Placed between objects
    pub sep: String,
    /// Written after the decorated text
    pub end: String,
    pub flush: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::from_output(&Output::default())
    }
}

impl PrintOptions {
    pub fn from_output(output: &Output) -> Self {
        Self {
            style: Style::default(),
            sep: output.sep.clone(),
            end: output.end.clone(),
            flush: false,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Options for [`Printer::mdprint_list`]
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Treat the first row as the header
    pub first_line_header: bool,
    /// Reorder columns by their values
    pub sort_keys: bool,
    pub start: String,
    pub end: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            first_line_header: true,
            sort_keys: false,
            start: "\n".to_string(),
            end: "\n".to_string(),
        }
    }
}

/// Options for [`Printer::mdprint_dict`]
#[derive(Debug, Clone)]
pub struct DictOptions {
    /// Keys form the header row and values the columns.
    /// Otherwise each key starts its own row.
    pub keys_as_headers: bool,
    /// Sort entries by key
    pub sort_keys: bool,
    pub start: String,
    pub end: String,
}

impl Default for DictOptions {
    fn default() -> Self {
        Self {
            keys_as_headers: true,
            sort_keys: false,
            start: "\n".to_string(),
            end: "\n".to_string(),
        }
    }
}

enum Mode {
    Styled(Box<ConsoleRenderer>),
    Markdown,
}

/// Writes values and tables to a single destination
pub struct Printer<W: Write> {
    out: W,
    mode: Mode,
    config: Config,
}

impl<W: Write> Printer<W> {
    /// Console destination, styled when the terminal supports it
    pub fn console(out: W, config: Config) -> Self {
        if should_use_colors() {
            Self::styled(out, config)
        } else {
            Self::markdown(out, config)
        }
    }

    /// Literal Markdown to `out`
    pub fn markdown(out: W, config: Config) -> Self {
        Self {
            out,
            mode: Mode::Markdown,
            config,
        }
    }

    /// Terminal styling to `out`
    pub fn styled(out: W, config: Config) -> Self {
        let renderer = ConsoleRenderer::new(&config.console);
        Self {
            out,
            mode: Mode::Styled(Box::new(renderer)),
            config,
        }
    }

    pub fn is_styled(&self) -> bool {
        matches!(self.mode, Mode::Styled(_))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `objects` joined by `sep`, decorated according to the style
    pub fn mdprint<T: Display>(&mut self, objects: &[T], options: &PrintOptions) -> Result<()> {
        for warning in options.style.warnings() {
            eprintln!("Warning: {}", warning);
        }

        let text = objects
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&options.sep);

        let rendered = match &self.mode {
            Mode::Styled(renderer) => {
                let plan = options
                    .style
                    .console_plan(self.config.console.default_heading_level);
                match renderer.render(&text, plan) {
                    Ok(styled) => styled,
                    Err(e) => {
                        eprintln!(
                            "Warning: Terminal rendering failed ({}), using plain output",
                            e
                        );
                        self.decorate(&text, options.style)
                    }
                }
            }
            Mode::Markdown => self.decorate(&text, options.style),
        };

        write!(self.out, "{}{}", rendered, options.end)?;
        if options.flush {
            self.out.flush()?;
        }
        Ok(())
    }

    fn decorate(&self, text: &str, style: Style) -> String {
        style
            .markdown_decoration(self.config.markdown.default_heading_level)
            .wrap(text)
    }

    /// Print rows as a table framed by `start` and `end`
    pub fn mdprint_list(&mut self, rows: &[Row], options: &ListOptions) -> Result<()> {
        let sorted;
        let rows = if options.sort_keys {
            sorted = table::sort_columns(rows);
            &sorted
        } else {
            rows
        };

        let markdown = table::render_list(rows, options.first_line_header);
        let rendered = match &self.mode {
            Mode::Styled(renderer) => renderer.render_table(&markdown),
            Mode::Markdown => markdown,
        };

        write!(self.out, "{}{}{}", options.start, rendered, options.end)?;
        Ok(())
    }

    /// Print a key -> column values mapping as a table
    pub fn mdprint_dict(&mut self, items: &[(String, Row)], options: &DictOptions) -> Result<()> {
        let sorted;
        let items = if options.sort_keys {
            sorted = table::sort_items(items);
            &sorted
        } else {
            items
        };

        let rows = if options.keys_as_headers {
            table::transpose_dict(items)
        } else {
            table::dict_rows(items)
        };

        let list_options = ListOptions {
            first_line_header: options.keys_as_headers,
            sort_keys: false,
            start: options.start.clone(),
            end: options.end.clone(),
        };
        self.mdprint_list(&rows, &list_options)
    }
}
