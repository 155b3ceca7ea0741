use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use mdprint::error::MdprintError;
use mdprint::{table, DictOptions, ListOptions, Result};

use super::{load_config, open_printer};

/// Parse JSON from a file, or stdin for `-`
fn read_json(input: &Path) -> Result<Value> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input).map_err(|e| {
            MdprintError::Input(format!("Cannot read '{}': {}", input.display(), e))
        })?
    };
    Ok(serde_json::from_str(&content)?)
}

/// Print a JSON array of rows as a table
pub fn list(
    input: PathBuf,
    first_line_header: bool,
    sort_keys: bool,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let rows = table::list_from_json(&read_json(&input)?)?;

    let options = ListOptions {
        first_line_header,
        sort_keys,
        ..ListOptions::default()
    };

    let mut printer = open_printer(output, config)?;
    printer.mdprint_list(&rows, &options)
}

/// Print a JSON object of columns as a table
pub fn dict(
    input: PathBuf,
    keys_as_headers: bool,
    sort_keys: bool,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let items = table::dict_from_json(&read_json(&input)?)?;

    let options = DictOptions {
        keys_as_headers,
        sort_keys,
        ..DictOptions::default()
    };

    let mut printer = open_printer(output, config)?;
    printer.mdprint_dict(&items, &options)
}
