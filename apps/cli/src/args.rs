//! # CLI Argument Definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "satchel")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Conversion, validation, formatting and URL tools")]
pub struct Cli {
    /// Config file; `satchel.*` in the working directory is used when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a `{code, message, data}` JSON envelope instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a value to a target type (e.g. 'i32', 'bool', 'date', 'list<i64>', 'u8[]')
    Convert {
        #[arg(short, long)]
        to: String,

        value: String,

        /// Returned when the value cannot be converted
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Check a value against a validation rule
    Validate { kind: ValidateKind, value: String },
    /// Render a '{}' template with positional arguments
    Format { template: String, args: Vec<String> },
    /// LCS similarity of 'a' relative to 'b', between 0 and 1
    Similarity { a: String, b: String },
    /// URL helpers
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },
    /// Convert a camelCase identifier to snake_case
    Camel { value: String },
    /// Hex dump of the first bytes of a file
    Hex {
        path: PathBuf,

        #[arg(short, long, default_value_t = 28)]
        length: usize,

        #[arg(long)]
        lower: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum UrlAction {
    /// Default the scheme, strip leading slashes and collapse repeated ones
    Normalize {
        value: String,

        /// Form-encode the part between scheme and query
        #[arg(long)]
        encode: bool,
    },
    /// application/x-www-form-urlencoded encoding
    Encode {
        value: String,

        #[arg(long, default_value = "UTF-8")]
        charset: String,
    },
    /// Reverse of 'encode'
    Decode {
        value: String,

        #[arg(long, default_value = "UTF-8")]
        charset: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ValidateKind {
    General,
    Letter,
    Number,
    Word,
    Money,
    Email,
    Mobile,
    CitizenId,
    ZipCode,
    Birthday,
    Ipv4,
    Ipv6,
    Mac,
    PlateNumber,
    Url,
    Chinese,
    Uuid,
    Hex,
}
