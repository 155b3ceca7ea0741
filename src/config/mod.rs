//! Configuration module
//!
//! Reads and writes mdprint.toml. Every section is optional and falls back
//! to its defaults, so a file may hold only the settings it changes.

mod types;

pub use types::{Config, Console, Markdown, Output};

use crate::error::{MdprintError, Result};
use crate::style::{MAX_BANNER_LEVEL, MAX_MARKDOWN_LEVEL};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "mdprint.toml";

/// Parse and validate configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        MdprintError::Config(format!(
            "Cannot read config from '{}': {}. Run 'mdprint config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)
        .map_err(|reason| MdprintError::Config(format!("{}: {}", path.display(), reason)))?;
    Ok(config)
}

/// Explicit path must exist; the implicit `mdprint.toml` may be absent
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    let implicit = Path::new(DEFAULT_CONFIG_FILE);
    match path {
        Some(path) => load(path),
        None if implicit.exists() => load(implicit),
        None => Ok(Config::default()),
    }
}

/// Reject settings that no heading or code block could use
fn validate(config: &Config) -> std::result::Result<(), String> {
    let markdown_level = config.markdown.default_heading_level;
    if !(1..=MAX_MARKDOWN_LEVEL).contains(&markdown_level) {
        return Err(format!(
            "markdown.default_heading_level must be between 1 and {}, got {}",
            MAX_MARKDOWN_LEVEL, markdown_level
        ));
    }

    let console_level = config.console.default_heading_level;
    if !(1..=MAX_BANNER_LEVEL).contains(&console_level) {
        return Err(format!(
            "console.default_heading_level must be between 1 and {}, got {}",
            MAX_BANNER_LEVEL, console_level
        ));
    }

    if config.console.heading_fonts.len() > usize::from(MAX_BANNER_LEVEL) {
        return Err(format!(
            "console.heading_fonts lists {} fonts, only {} heading levels exist",
            config.console.heading_fonts.len(),
            MAX_BANNER_LEVEL
        ));
    }

    Ok(())
}

/// Write configuration as pretty TOML, creating parent directories
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| MdprintError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_saved_defaults_load_back() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/mdprint.toml");

        save(&Config::default(), &config_path).unwrap();

        let loaded = load(&config_path).unwrap();
        assert_eq!(loaded.markdown.default_heading_level, 3);
        assert_eq!(loaded.console.code_block_width, 80);
    }

    #[test]
    fn test_load_missing_config_suggests_init() {
        let err = load(Path::new("/nonexistent/mdprint.toml")).unwrap_err();
        assert!(err.to_string().contains("Run 'mdprint config init'"));
    }

    #[test]
    fn test_load_or_default_explicit_missing_is_error() {
        let result = load_or_default(Some(Path::new("/nonexistent/mdprint.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_fonts_and_sep_survive_save() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("mdprint.toml");

        let mut config = Config::default();
        config.console.heading_fonts.push("/fonts/small.flf".into());
        config.output.sep = ", ".to_string();

        save(&config, &config_path).unwrap();
        let loaded = load(&config_path).unwrap();

        assert_eq!(loaded.console.heading_fonts.len(), 1);
        assert_eq!(loaded.output.sep, ", ");
    }

    #[test]
    fn test_markdown_level_out_of_range() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[markdown]\ndefault_heading_level = 7\n");

        let err = load(&path).unwrap_err();
        assert!(err
            .to_string()
            .contains("markdown.default_heading_level must be between 1 and 6, got 7"));
    }

    #[test]
    fn test_console_level_zero_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[console]\ndefault_heading_level = 0\n");

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("console.default_heading_level"));
    }

    #[test]
    fn test_too_many_heading_fonts_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "[console]\nheading_fonts = [\"a\", \"b\", \"c\", \"d\", \"e\", \"f\"]\n",
        );

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("only 5 heading levels exist"));
    }
}
