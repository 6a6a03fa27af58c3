mod builtin;

pub use builtin::Variant;

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// File names read by [`WordLists::from_dir`]
pub const ADJECTIVES_FILE: &str = "adjectives.txt";
pub const ADVERBS_FILE: &str = "adverbs.txt";
pub const NAMES_FILE: &str = "names.txt";

/// Grammatical role of a word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    Name,
    Adjective,
    Adverb,
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WordKind::Name => "name",
            WordKind::Adjective => "adjective",
            WordKind::Adverb => "adverb",
        })
    }
}

/// The three word lists a generator draws from.
///
/// Every list is guaranteed non-empty. Entries are expected to be lowercase
/// ASCII without surrounding whitespace; this is not checked, and casing
/// rules treat any other content as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    names: Vec<String>,
    adjectives: Vec<String>,
    adverbs: Vec<String>,
}

impl WordLists {
    /// Build from caller supplied lists
    pub fn new<N, J, A>(names: N, adjectives: J, adverbs: A) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Ok(Self {
            names: non_empty(WordKind::Name, names)?,
            adjectives: non_empty(WordKind::Adjective, adjectives)?,
            adverbs: non_empty(WordKind::Adverb, adverbs)?,
        })
    }

    /// One of the lists shipped with the crate
    pub fn builtin(variant: Variant) -> Self {
        let sources = variant.sources();
        Self {
            names: parse_words(sources.names),
            adjectives: parse_words(sources.adjectives),
            adverbs: parse_words(sources.adverbs),
        }
    }

    /// Load `adjectives.txt`, `adverbs.txt` and `names.txt` from a directory,
    /// one word per line. Blank lines are skipped and entries are trimmed.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path)
                .map(|text| parse_words(&text))
                .map_err(|source| Error::ReadWordList { path, source })
        };

        let lists = Self::new(read(NAMES_FILE)?, read(ADJECTIVES_FILE)?, read(ADVERBS_FILE)?)?;
        tracing::debug!(
            dir = %dir.display(),
            names = lists.names.len(),
            adjectives = lists.adjectives.len(),
            adverbs = lists.adverbs.len(),
            "loaded word lists"
        );
        Ok(lists)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    pub fn adverbs(&self) -> &[String] {
        &self.adverbs
    }

    /// List for a given role
    pub fn get(&self, kind: WordKind) -> &[String] {
        match kind {
            WordKind::Name => &self.names,
            WordKind::Adjective => &self.adjectives,
            WordKind::Adverb => &self.adverbs,
        }
    }

    /// Replace the names list wholesale. An empty list is rejected and the
    /// current one kept.
    pub fn set_names<I>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.set(WordKind::Name, words)
    }

    /// Replace the adjectives list wholesale
    pub fn set_adjectives<I>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.set(WordKind::Adjective, words)
    }

    /// Replace the adverbs list wholesale
    pub fn set_adverbs<I>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.set(WordKind::Adverb, words)
    }

    fn set<I>(&mut self, kind: WordKind, words: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let words = non_empty(kind, words)?;
        tracing::debug!(%kind, len = words.len(), "replacing word list");
        let slot = match kind {
            WordKind::Name => &mut self.names,
            WordKind::Adjective => &mut self.adjectives,
            WordKind::Adverb => &mut self.adverbs,
        };
        *slot = words;
        Ok(())
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::builtin(Variant::default())
    }
}

fn non_empty<I>(kind: WordKind, words: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let words: Vec<String> = words.into_iter().map(Into::into).collect();
    if words.is_empty() {
        return Err(Error::EmptyWordList { kind });
    }
    Ok(words)
}

/// Split one-word-per-line text into trimmed, non-blank entries
pub(crate) fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
