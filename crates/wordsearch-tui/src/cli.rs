use clap::Parser;

use crate::theme::ThemeKind;

/// Generate and play a word-search puzzle in the terminal.
#[derive(Parser)]
#[command(about, version)]
pub struct Args {
    /// Grid width in columns
    #[arg(long, default_value_t = 6)]
    pub width: usize,

    /// Grid height in rows
    #[arg(long, default_value_t = 4)]
    pub height: usize,

    /// Number of words to hide
    #[arg(short = 'n', long = "words", default_value_t = 3)]
    pub word_count: usize,

    /// Seed for a reproducible puzzle
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Skip the dictionary service and use the builtin word list
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Use an English word list and Latin filler characters
    #[arg(long, default_value_t = false)]
    pub latin: bool,

    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    pub theme: ThemeKind,

    /// Print the puzzle and its hints to stdout instead of starting the
    /// interface
    #[arg(short, long, default_value_t = false)]
    pub print: bool,

    /// Print the puzzle as JSON instead of starting the interface
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
