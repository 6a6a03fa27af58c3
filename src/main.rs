mod cli;
mod config;
mod telemetry;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::{self, BufWriter, Write};

use cli::{Cli, Commands};
use config::settings::{MergedSettings, UserSettings};
use petname::{Casing, Generator, Separator, Variant, WordLists};

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match cli.command {
        Some(Commands::Lists) => print_lists(),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "petname", &mut io::stdout());
            Ok(())
        }
        None => generate(&cli),
    }
}

/// Print `count` petnames, one per line
fn generate(cli: &Cli) -> Result<()> {
    let user = UserSettings::load()?.unwrap_or_default();
    let settings = MergedSettings::resolve(cli, user);
    tracing::debug!(?settings, "resolved settings");

    let mut generator = Generator::with_lists(settings.source.load()?);
    match settings.seed {
        Some(seed) => generator.seed(seed),
        None => generator.use_non_deterministic_seed(),
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..settings.count {
        let name = generator.generate(settings.words, settings.casing, settings.separator);
        writeln!(out, "{}", name)?;
    }
    out.flush()?;
    Ok(())
}

/// Show the built-in variants with a sample name from each
fn print_lists() -> Result<()> {
    for variant in Variant::ALL {
        let lists = WordLists::builtin(variant);
        let sample =
            Generator::with_lists(lists.clone()).generate(3, Casing::Lower, Separator::Hyphen);
        println!(
            "{:<8} {} {}  {} {}  {} {}  {}",
            variant.to_string().green().bold(),
            lists.adverbs().len(),
            "adverbs".dimmed(),
            lists.adjectives().len(),
            "adjectives".dimmed(),
            lists.names().len(),
            "names".dimmed(),
            sample.cyan()
        );
    }
    Ok(())
}
