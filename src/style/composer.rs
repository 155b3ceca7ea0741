use std::fmt;

/// Highest heading level Markdown supports
pub const MAX_MARKDOWN_LEVEL: u8 = 6;

/// Number of banner levels available on the console
pub const MAX_BANNER_LEVEL: u8 = 5;

/// Heading request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heading {
    #[default]
    Off,
    /// Heading with the destination's default level
    Default,
    /// Explicit level, `Level(0)` is no heading
    Level(u8),
}

impl Heading {
    /// Whether a heading was requested at all
    pub fn is_on(self) -> bool {
        !matches!(self, Heading::Off | Heading::Level(0))
    }

    /// Resolve to a concrete level, capped at `max`
    fn level(self, default_level: u8, max: u8) -> Option<u8> {
        match self {
            Heading::Off | Heading::Level(0) => None,
            Heading::Default => Some(default_level.clamp(1, max)),
            Heading::Level(n) => Some(n.min(max)),
        }
    }
}

/// Style flags for a single print call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub heading: Heading,
    pub bold: bool,
    pub italics: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub code_block: bool,
}

/// A requested style combination where some flags are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleWarning {
    /// Emphasis requested together with a heading
    Heading,
    /// Emphasis requested together with inline code
    Code,
    /// Emphasis requested together with a code block
    CodeBlock,
    /// Code block requested together with inline code
    CodeOverCodeBlock,
}

impl fmt::Display for StyleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ignored, prioritized) = match self {
            StyleWarning::Heading => ("italics, bold and strikethrough", "heading"),
            StyleWarning::Code => ("italics, bold and strikethrough", "code"),
            StyleWarning::CodeBlock => ("italics, bold and strikethrough", "code block"),
            StyleWarning::CodeOverCodeBlock => ("code block", "code"),
        };
        write!(
            f,
            "Using {} in conjunction with {} will have no effect. {} will be prioritized and other styles will be ignored.",
            ignored,
            prioritized,
            capitalize(prioritized)
        )
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Markdown wrapper around printed text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: String,
    pub suffix: String,
}

impl Decoration {
    /// Wrapper whose suffix mirrors the prefix character by character
    fn symmetric(prefix: String) -> Self {
        let suffix = prefix.chars().rev().collect();
        Self { prefix, suffix }
    }

    /// Wrap `text` in this decoration
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix, text, self.suffix)
    }
}

/// The one terminal rendering a style resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsolePlan {
    /// ASCII art banner at the given level (1 is largest)
    Banner(u8),
    InlineCode,
    CodeBlock,
    /// Any subset of emphasis, possibly none
    Emphasis {
        bold: bool,
        italics: bool,
        strikethrough: bool,
    },
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = on;
        self
    }

    pub fn italics(mut self, on: bool) -> Self {
        self.italics = on;
        self
    }

    pub fn strikethrough(mut self, on: bool) -> Self {
        self.strikethrough = on;
        self
    }

    pub fn code(mut self, on: bool) -> Self {
        self.code = on;
        self
    }

    pub fn code_block(mut self, on: bool) -> Self {
        self.code_block = on;
        self
    }

    fn has_emphasis(&self) -> bool {
        self.bold || self.italics || self.strikethrough
    }

    /// Overridden combinations present in this style
    pub fn warnings(&self) -> Vec<StyleWarning> {
        let mut warnings = Vec::new();

        if self.heading.is_on() {
            if self.has_emphasis() {
                warnings.push(StyleWarning::Heading);
            }
            return warnings;
        }

        if self.code {
            if self.has_emphasis() {
                warnings.push(StyleWarning::Code);
            }
            if self.code_block {
                warnings.push(StyleWarning::CodeOverCodeBlock);
            }
        } else if self.code_block && self.has_emphasis() {
            warnings.push(StyleWarning::CodeBlock);
        }

        warnings
    }

    /// Markdown prefix/suffix for this style
    pub fn markdown_decoration(&self, default_heading_level: u8) -> Decoration {
        if let Some(level) = self.heading.level(default_heading_level, MAX_MARKDOWN_LEVEL) {
            return Decoration {
                prefix: format!("{} ", "#".repeat(usize::from(level))),
                suffix: String::new(),
            };
        }

        if self.code {
            return Decoration::symmetric("`".to_string());
        }

        if self.code_block {
            return Decoration::symmetric("\n```\n".to_string());
        }

        let mut prefix = String::new();
        if self.strikethrough {
            prefix.push_str("~~");
        }
        if self.bold {
            prefix.push_str("**");
        }
        if self.italics {
            prefix.push('_');
        }
        Decoration::symmetric(prefix)
    }

    /// Terminal rendering for this style
    pub fn console_plan(&self, default_heading_level: u8) -> ConsolePlan {
        if let Some(level) = self.heading.level(default_heading_level, MAX_BANNER_LEVEL) {
            return ConsolePlan::Banner(level);
        }

        if self.code {
            return ConsolePlan::InlineCode;
        }

        if self.code_block {
            return ConsolePlan::CodeBlock;
        }

        ConsolePlan::Emphasis {
            bold: self.bold,
            italics: self.italics,
            strikethrough: self.strikethrough,
        }
    }
}
