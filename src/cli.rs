use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ldsnip",
    version,
    about = "JSON-LD structured data snippet editor"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to ~/.config/ldsnip/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        help = "How to locate the JSON payload inside pasted text"
    )]
    pub strategy: Option<ExtractStrategy>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the structured data types with a template
    Types,
    /// Print the raw template snippet for a type
    Template { name: String },
    /// Print rule entries, for one type or all of them
    Rules { name: Option<String> },
    /// Merge the templates of one or more types into a single document
    Merge {
        #[arg(required = true)]
        types: Vec<String>,
        #[arg(long, help = "Print the script-tag embed instead of bare JSON")]
        embed: bool,
    },
    /// Print the JSON payload found in the input
    Extract {
        #[arg(help = "Input file, `-` or omitted for stdin")]
        input: Option<PathBuf>,
    },
    /// Reformat the input with stable indentation
    Format {
        #[arg(help = "Input file, `-` or omitted for stdin")]
        input: Option<PathBuf>,
        #[arg(long, help = "Print the script-tag embed instead of bare JSON")]
        embed: bool,
    },
    /// Run the diagnostic rules over the input
    Check {
        #[arg(help = "Input file, `-` or omitted for stdin")]
        input: Option<PathBuf>,
    },
    /// Render the input as an escaped HTML code block
    Preview {
        #[arg(help = "Input file, `-` or omitted for stdin")]
        input: Option<PathBuf>,
    },
    /// Interactive editing session over stdin
    Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtractStrategy {
    /// Read the first complete JSON value after the opening delimiter
    #[default]
    Scanner,
    /// Slice up to the last matching closing delimiter
    Heuristic,
}

impl ExtractStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractStrategy::Scanner => "scanner",
            ExtractStrategy::Heuristic => "heuristic",
        }
    }
}
