use std::path::PathBuf;
use thiserror::Error;

use crate::words::WordKind;

/// Errors returned when configuring a generator.
///
/// Generation itself never fails: every way of installing a word list
/// rejects empty lists up front.
#[derive(Debug, Error)]
pub enum Error {
    /// A word list was empty. The previously active list is kept.
    #[error("{kind} word list must contain at least one word")]
    EmptyWordList { kind: WordKind },

    /// A word list file could not be read.
    #[error("failed to read word list at {path}: {source}")]
    ReadWordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown casing '{0}' (expected lower, upper or title)")]
    ParseCasing(String),

    #[error("unknown separator '{0}' (expected none, hyphen or underscore)")]
    ParseSeparator(String),

    #[error("unknown word list '{0}' (expected short, medium or long)")]
    ParseVariant(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
