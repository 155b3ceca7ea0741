use mdprint::config::{self, Config, DEFAULT_CONFIG_FILE};
use mdprint::Result;
use std::path::PathBuf;

/// Write the default mdprint.toml, leaving an existing file untouched
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let defaults = Config::default();
    config::save(&defaults, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    for line in summary(&defaults) {
        println!("  {}", line);
    }
    println!(
        "\nAdd .flf paths to console.heading_fonts to replace the banner font of a heading level."
    );

    Ok(())
}

/// One line per setting a first-time user is likely to change
fn summary(config: &Config) -> Vec<String> {
    vec![
        format!(
            "markdown.default_heading_level = {}",
            config.markdown.default_heading_level
        ),
        format!(
            "console.default_heading_level = {}",
            config.console.default_heading_level
        ),
        format!("console.code_block_width = {}", config.console.code_block_width),
        format!("output.sep = {:?}", config.output.sep),
    ]
}
