mod cli;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdprint")]
#[command(about = "Print text and tables as styled terminal output or Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print text with Markdown emphasis
    Text {
        /// Values to print, joined by the separator
        #[arg(required = true)]
        objects: Vec<String>,

        /// Print as a heading, optionally with a level (--heading=2)
        #[arg(long, require_equals = true, num_args = 0..=1)]
        heading: Option<Option<u8>>,

        #[arg(short, long)]
        bold: bool,

        #[arg(short, long)]
        italics: bool,

        #[arg(short, long)]
        strikethrough: bool,

        /// Inline code
        #[arg(long)]
        code: bool,

        /// Fenced code block
        #[arg(long)]
        code_block: bool,

        /// Separator between values (escapes like \t and \n are expanded)
        #[arg(long)]
        sep: Option<String>,

        /// Text written after the output (escapes like \t and \n are expanded)
        #[arg(long)]
        end: Option<String>,

        #[command(flatten)]
        common: Common,
    },
    /// Print a JSON array of rows as a table
    List {
        /// JSON file, or - for stdin
        input: PathBuf,

        /// Do not treat the first row as the header
        #[arg(long)]
        no_header: bool,

        /// Sort columns by their values
        #[arg(long)]
        sort_keys: bool,

        #[command(flatten)]
        common: Common,
    },
    /// Print a JSON object of columns as a table
    Dict {
        /// JSON file, or - for stdin
        input: PathBuf,

        /// One row per key instead of keys as the header
        #[arg(long)]
        rows: bool,

        /// Sort entries by key
        #[arg(long)]
        sort_keys: bool,

        #[command(flatten)]
        common: Common,
    },
}

/// Options shared by every print command
#[derive(Args)]
struct Common {
    /// Append Markdown to this file instead of printing to the console
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file (defaults to mdprint.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize mdprint.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Text {
            objects,
            heading,
            bold,
            italics,
            strikethrough,
            code,
            code_block,
            sep,
            end,
            common,
        } => {
            let flags = cli::text::Flags {
                heading,
                bold,
                italics,
                strikethrough,
                code,
                code_block,
            };
            cli::text::run(objects, flags, sep, end, common.output, common.config)
        }
        Commands::List {
            input,
            no_header,
            sort_keys,
            common,
        } => cli::table::list(input, !no_header, sort_keys, common.output, common.config),
        Commands::Dict {
            input,
            rows,
            sort_keys,
            common,
        } => cli::table::dict(input, !rows, sort_keys, common.output, common.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
