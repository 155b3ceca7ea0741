//! Styled terminal rendering using termimad

use termimad::crossterm::style::{Attribute, Color::*};
use termimad::MadSkin;

use super::banner::BannerFonts;
use crate::config::Console;
use crate::error::Result;
use crate::style::ConsolePlan;

/// Renders text for the console according to a [`ConsolePlan`]
pub struct ConsoleRenderer {
    skin: MadSkin,
    banners: BannerFonts,
    code_block_width: usize,
}

impl ConsoleRenderer {
    pub fn new(config: &Console) -> Self {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        Self {
            skin,
            banners: BannerFonts::new(config.heading_fonts.clone()),
            code_block_width: config.code_block_width,
        }
    }

    /// Render `text` as styled terminal output, without a line terminator
    pub fn render(&self, text: &str, plan: ConsolePlan) -> Result<String> {
        match plan {
            ConsolePlan::Banner(level) => self.render_banner(text, level),
            ConsolePlan::InlineCode => Ok(self.render_inline_code(text)),
            ConsolePlan::CodeBlock => Ok(self.render_code_block(text)),
            ConsolePlan::Emphasis {
                bold,
                italics,
                strikethrough,
            } => Ok(self.render_emphasis(text, bold, italics, strikethrough)),
        }
    }

    fn render_banner(&self, text: &str, level: u8) -> Result<String> {
        let art = self.banners.render(text, level)?;
        let index = usize::from(level.max(1)) - 1;
        let style = &self.skin.headers[index].compound_style;
        Ok(style.apply_to(art.trim_end_matches('\n')).to_string())
    }

    fn render_inline_code(&self, text: &str) -> String {
        self.skin
            .inline_code
            .apply_to(format!(" {} ", text))
            .to_string()
    }

    /// Reverse-video block, every line padded to the configured width
    fn render_code_block(&self, text: &str) -> String {
        let style = &self.skin.code_block.compound_style;
        let blank = " ".repeat(self.code_block_width + 2);
        let mut lines = vec![style.apply_to(blank.clone()).to_string()];

        for line in text.lines() {
            let padding = self.code_block_width.saturating_sub(line.chars().count());
            let padded = format!(" {}{} ", line, " ".repeat(padding));
            lines.push(style.apply_to(padded).to_string());
        }

        lines.push(style.apply_to(blank).to_string());
        lines.join("\n")
    }

    fn render_emphasis(&self, text: &str, bold: bool, italics: bool, strikethrough: bool) -> String {
        let mut style = self.skin.paragraph.compound_style.clone();
        if bold {
            style.add_attr(Attribute::Bold);
        }
        if italics {
            style.add_attr(Attribute::Italic);
        }
        if strikethrough {
            style.add_attr(Attribute::CrossedOut);
        }
        style.apply_to(text).to_string()
    }

    /// Render a Markdown table with the skin's table style
    pub fn render_table(&self, markdown: &str) -> String {
        self.skin.text(markdown, None).to_string()
    }
}

/// Customize termimad skin for mdprint output
fn customize_skin(skin: &mut MadSkin) {
    // Headers: one look per banner level
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.headers[2].set_fg(Blue);
    skin.headers[3].set_fg(Magenta);
    skin.headers[4].set_fg(White);

    // Code: reverse video
    skin.inline_code.add_attr(Attribute::Reverse);
    skin.code_block.add_attr(Attribute::Reverse);

    // Tables: White
    skin.table.set_fg(White);

    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);
    skin.strikeout.add_attr(Attribute::CrossedOut);
}
