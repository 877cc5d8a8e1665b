use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "passwords.txt";

/// Generate passwords that contain every selected character class.
#[derive(Parser, Debug, Default)]
#[command(name = "classpass", version)]
pub struct CliFlags {
    /// Characters per password (default: 12)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate (default: 1)
    #[arg(short = 'n', long = "count", visible_alias = "number", value_name = "N")]
    pub count: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Include digits (0-9)
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols (!@#$%^&*_-+=?)
    #[arg(short, long)]
    pub symbols: bool,

    /// Avoid look-alike characters (I, l, 1, O, 0, B, 8, S, 5, Z, 2)
    #[arg(short = 'a', long)]
    pub no_ambiguous: bool,

    /// Append to a file instead of printing
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_OUTPUT
    )]
    pub output: Option<PathBuf>,

    /// Copy to clipboard instead of printing
    #[arg(short, long)]
    pub board: bool,

    /// Show an entropy estimate on stderr
    #[arg(short, long)]
    pub entropy: bool,

    /// Suppress warnings and summaries
    #[arg(short, long)]
    pub quiet: bool,

    /// Save the resulting options as defaults
    #[arg(long)]
    pub save: bool,

    /// Ignore saved defaults and overwrite them with the built-ins
    /// (with --save, the flags given here are stored instead)
    #[arg(long)]
    pub reset: bool,
}
