//! ASCII art banners for console headings

use figlet_rs::FIGfont;
use std::path::{Path, PathBuf};

use crate::error::{MdprintError, Result};

/// Bundled fonts for levels 2 to 5, shrinking with the level.
/// Level 1 uses the standard font shipped with figlet-rs.
const BUNDLED_FONTS: [(&str, &str); 4] = [
    ("block", include_str!("fonts/block.flf")),
    ("pixel", include_str!("fonts/pixel.flf")),
    ("dots", include_str!("fonts/dots.flf")),
    ("mini", include_str!("fonts/mini.flf")),
];

/// Loads one FIGlet font per heading level
#[derive(Debug, Clone, Default)]
pub struct BannerFonts {
    /// Font files indexed by level - 1, overriding the bundled fonts
    fonts: Vec<PathBuf>,
}

impl BannerFonts {
    pub fn new(fonts: Vec<PathBuf>) -> Self {
        Self { fonts }
    }

    /// Configured font for a heading level, else the bundled one
    fn font_for(&self, level: u8) -> Result<FIGfont> {
        let index = usize::from(level.max(1)) - 1;
        if let Some(path) = self.fonts.get(index) {
            return load_font(path);
        }
        bundled_font(index)
    }

    /// Render `text` as ASCII art at the given heading level
    pub fn render(&self, text: &str, level: u8) -> Result<String> {
        let font = self.font_for(level)?;
        let figure = font.convert(text).ok_or_else(|| {
            MdprintError::Font(format!("cannot render '{}' with level {} font", text, level))
        })?;
        Ok(figure.to_string())
    }
}

fn bundled_font(index: usize) -> Result<FIGfont> {
    let Some(&(name, content)) = index.checked_sub(1).and_then(|i| BUNDLED_FONTS.get(i)) else {
        return FIGfont::standard()
            .map_err(|e| MdprintError::Font(format!("standard font: {}", e)));
    };
    FIGfont::from_content(content).map_err(|e| MdprintError::Font(format!("{} font: {}", name, e)))
}

fn load_font(path: &Path) -> Result<FIGfont> {
    let name = path.to_str().ok_or_else(|| {
        MdprintError::Font(format!("font path is not valid UTF-8: {}", path.display()))
    })?;
    FIGfont::from_file(name).map_err(|e| MdprintError::Font(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_font_renders_multiline_art() {
        let art = BannerFonts::default().render("Hi", 1).unwrap();
        assert!(art.lines().count() > 1);
        assert!(!art.contains("Hi"));
    }

    #[test]
    fn test_levels_render_different_art() {
        let fonts = BannerFonts::default();
        let top = fonts.render("Hi", 1).unwrap();
        let small = fonts.render("Hi", 4).unwrap();
        assert_ne!(top, small);
        assert!(small.lines().count() < top.lines().count());
    }

    #[test]
    fn test_banner_height_shrinks_with_level() {
        let fonts = BannerFonts::default();
        let heights: Vec<usize> = (1..=5)
            .map(|level| fonts.render("Hi", level).unwrap().lines().count())
            .collect();
        assert_eq!(heights, vec![6, 5, 5, 3, 3]);
    }

    #[test]
    fn test_bundled_fonts_cover_printable_ascii() {
        let printable: String = (32u8..127).map(char::from).collect();
        for level in 2..=5 {
            let art = BannerFonts::default().render(&printable, level).unwrap();
            let widths: Vec<usize> = art.lines().map(str::len).collect();
            assert!(widths.iter().all(|&w| w == widths[0] && w > 0), "level {}", level);
        }
    }

    #[test]
    fn test_pixel_font_shape() {
        let art = BannerFonts::default().render("H", 3).unwrap();
        assert_eq!(art, "# # \n# # \n### \n# # \n# # \n");
    }

    #[test]
    fn test_configured_font_overrides_bundled_level() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("pixel.flf");
        std::fs::write(&path, BUNDLED_FONTS[1].1).unwrap();

        let fonts = BannerFonts::new(vec![path]);
        assert_eq!(
            fonts.render("ok", 1).unwrap(),
            BannerFonts::default().render("ok", 3).unwrap()
        );
    }

    #[test]
    fn test_missing_font_file_is_error() {
        let fonts = BannerFonts::new(vec![PathBuf::from("/nonexistent/font.flf")]);
        let err = fonts.render("x", 1).unwrap_err();
        assert!(err.to_string().starts_with("Font error: /nonexistent/font.flf"));
        assert!(fonts.render("x", 2).is_ok());
    }
}
