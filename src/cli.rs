use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use petname::{Casing, Separator, Variant};

#[derive(Parser)]
#[command(name = "petname")]
#[command(about = "Generate human-readable random names", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Number of words per name (adverbs, then an adjective, then a name)
    #[arg(short, long)]
    pub words: Option<usize>,

    /// Letter case: lower, upper or title
    #[arg(short, long)]
    pub casing: Option<Casing>,

    /// Word separator: none, hyphen or underscore
    #[arg(short, long)]
    pub separator: Option<Separator>,

    /// How many names to print, one per line
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output (random when omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Built-in word list: short, medium or long
    #[arg(short, long)]
    pub list: Option<Variant>,

    /// Directory containing adjectives.txt, adverbs.txt and names.txt
    #[arg(long, conflicts_with = "list")]
    pub dir: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the built-in word lists and their sizes
    Lists,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
