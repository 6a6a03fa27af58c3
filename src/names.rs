use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::rng::RandomSource;
use crate::words::{Variant, WordKind, WordLists};

/// Smallest buffer allocated for a petname
const MIN_CAPACITY: usize = 64;

/// Letter case applied to every word of a petname
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// Words as they appear in the lists (which are lowercase)
    #[default]
    Lower,
    /// Every ASCII letter uppercased
    Upper,
    /// First letter of each word uppercased, the rest untouched
    Title,
}

impl Casing {
    /// Append `word` to `out` with this casing applied
    fn push_word(self, out: &mut String, word: &str) {
        match self {
            Casing::Lower => out.push_str(word),
            Casing::Upper => out.extend(word.chars().map(|c| c.to_ascii_uppercase())),
            Casing::Title => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.push(first.to_ascii_uppercase());
                    out.push_str(chars.as_str());
                }
            }
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Casing::Lower => "lower",
            Casing::Upper => "upper",
            Casing::Title => "title",
        })
    }
}

impl FromStr for Casing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" => Ok(Casing::Lower),
            "upper" => Ok(Casing::Upper),
            "title" => Ok(Casing::Title),
            _ => Err(Error::ParseCasing(s.to_string())),
        }
    }
}

/// Character placed between adjacent words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// Words are concatenated directly
    #[default]
    None,
    /// `-`
    Hyphen,
    /// `_`
    Underscore,
}

impl Separator {
    pub fn as_char(self) -> Option<char> {
        match self {
            Separator::None => None,
            Separator::Hyphen => Some('-'),
            Separator::Underscore => Some('_'),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Separator::None => "none",
            Separator::Hyphen => "hyphen",
            Separator::Underscore => "underscore",
        })
    }
}

impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Separator::None),
            "hyphen" | "-" => Ok(Separator::Hyphen),
            "underscore" | "_" => Ok(Separator::Underscore),
            _ => Err(Error::ParseSeparator(s.to_string())),
        }
    }
}

/// Petname generator owning its word lists and random source.
///
/// Independent generators do not share state, so each can live on its own
/// thread without locking.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    lists: WordLists,
    rng: RandomSource,
}

impl Generator {
    /// Short built-in lists, default seed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lists(lists: WordLists) -> Self {
        Self {
            lists,
            rng: RandomSource::new(),
        }
    }

    pub fn from_variant(variant: Variant) -> Self {
        Self::with_lists(WordLists::builtin(variant))
    }

    /// Builder style reseed
    pub fn seeded(mut self, seed: i64) -> Self {
        self.rng.seed(seed);
        self
    }

    pub fn lists(&self) -> &WordLists {
        &self.lists
    }

    pub fn lists_mut(&mut self) -> &mut WordLists {
        &mut self.lists
    }

    /// Swap in a whole new set of lists, e.g. another built-in variant
    pub fn set_lists(&mut self, lists: WordLists) {
        self.lists = lists;
    }

    pub fn set_names<I>(&mut self, words: I) -> crate::Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lists.set_names(words)
    }

    pub fn set_adjectives<I>(&mut self, words: I) -> crate::Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lists.set_adjectives(words)
    }

    pub fn set_adverbs<I>(&mut self, words: I) -> crate::Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lists.set_adverbs(words)
    }

    pub fn seed(&mut self, seed: i64) {
        self.rng.seed(seed);
    }

    pub fn use_non_deterministic_seed(&mut self) {
        self.rng.use_non_deterministic_seed();
    }

    pub fn random_adverb(&mut self) -> &str {
        pick(&mut self.rng, &self.lists, WordKind::Adverb)
    }

    pub fn random_adjective(&mut self) -> &str {
        pick(&mut self.rng, &self.lists, WordKind::Adjective)
    }

    pub fn random_name(&mut self) -> &str {
        pick(&mut self.rng, &self.lists, WordKind::Name)
    }

    /// Generate a petname of `word_count` words: `word_count - 2` adverbs,
    /// then an adjective, then a name. A single word is just a name and zero
    /// words yields an empty string.
    ///
    /// Casing is applied per word and the separator is only placed between
    /// words, allowing `Word-Word-Word` or `WORD_WORD_WORD`.
    pub fn generate(&mut self, word_count: usize, casing: Casing, separator: Separator) -> String {
        tracing::trace!(word_count, %casing, %separator, "generating petname");

        let lists = &self.lists;
        let rng = &mut self.rng;

        // Draw order matches `draw_words` so both paths consume the random
        // source identically.
        match word_count {
            0 => String::new(),
            1 => assemble(&[pick(rng, lists, WordKind::Name)], casing, separator),
            2 => {
                let adjective = pick(rng, lists, WordKind::Adjective);
                let name = pick(rng, lists, WordKind::Name);
                assemble(&[adjective, name], casing, separator)
            }
            3 => {
                let adverb = pick(rng, lists, WordKind::Adverb);
                let adjective = pick(rng, lists, WordKind::Adjective);
                let name = pick(rng, lists, WordKind::Name);
                assemble(&[adverb, adjective, name], casing, separator)
            }
            4 => {
                let first = pick(rng, lists, WordKind::Adverb);
                let second = pick(rng, lists, WordKind::Adverb);
                let adjective = pick(rng, lists, WordKind::Adjective);
                let name = pick(rng, lists, WordKind::Name);
                assemble(&[first, second, adjective, name], casing, separator)
            }
            _ => assemble(&draw_words(rng, lists, word_count), casing, separator),
        }
    }
}

/// The general shape for `word_count >= 2`: adverbs drawn independently,
/// then one adjective and one name.
fn draw_words<'a>(rng: &mut RandomSource, lists: &'a WordLists, word_count: usize) -> Vec<&'a str> {
    let mut words = Vec::with_capacity(word_count);
    for _ in 0..word_count.saturating_sub(2) {
        words.push(pick(rng, lists, WordKind::Adverb));
    }
    words.push(pick(rng, lists, WordKind::Adjective));
    words.push(pick(rng, lists, WordKind::Name));
    words
}

fn pick<'a>(rng: &mut RandomSource, lists: &'a WordLists, kind: WordKind) -> &'a str {
    let list = lists.get(kind);
    &list[rng.next_index(list.len())]
}

fn assemble(words: &[&str], casing: Casing, separator: Separator) -> String {
    let separator = separator.as_char();

    let mut len: usize = words.iter().map(|w| w.len()).sum();
    if let Some(sep) = separator {
        len += sep.len_utf8() * words.len().saturating_sub(1);
    }

    let mut out = String::with_capacity(len.max(MIN_CAPACITY));
    for (i, word) in words.iter().enumerate() {
        if let Some(sep) = separator {
            if i > 0 {
                out.push(sep);
            }
        }
        casing.push_word(&mut out, word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Generator {
        let lists = WordLists::new(["magpie", "otter"], ["giving", "calm"], ["likely", "truly"])
            .unwrap();
        Generator::with_lists(lists)
    }

    #[test]
    fn test_zero_words_is_empty() {
        let mut generator = Generator::new();
        for casing in [Casing::Lower, Casing::Upper, Casing::Title] {
            for separator in [Separator::None, Separator::Hyphen, Separator::Underscore] {
                assert_eq!(generator.generate(0, casing, separator), "");
            }
        }
    }

    #[test]
    fn test_generate_shapes() {
        let mut generator = tiny();
        let lists = generator.lists().clone();

        for count in 1..=7 {
            let name = generator.generate(count, Casing::Lower, Separator::Hyphen);
            let parts: Vec<&str> = name.split('-').collect();
            assert_eq!(parts.len(), count, "{name}");

            let (head, tail) = parts.split_at(count.saturating_sub(2));
            assert!(head.iter().all(|w| lists.adverbs().iter().any(|a| a == w)));
            assert!(lists.names().iter().any(|n| n == tail[tail.len() - 1]));
            if count >= 2 {
                assert!(lists.adjectives().iter().any(|a| a == tail[0]));
            }
        }
    }

    #[test]
    fn test_fast_paths_match_general_rule() {
        for count in 2..=4 {
            for seed in 0..50 {
                let mut fast = Generator::new().seeded(seed);
                let mut general = Generator::new().seeded(seed);

                let expected = draw_words(&mut general.rng, &general.lists, count).join("-");
                assert_eq!(fast.generate(count, Casing::Lower, Separator::Hyphen), expected);
            }
        }
    }

    #[test]
    fn test_no_separator_concatenates() {
        let mut a = Generator::new().seeded(5);
        let mut b = Generator::new().seeded(5);
        let joined = a.generate(4, Casing::Lower, Separator::Underscore);
        let plain = b.generate(4, Casing::Lower, Separator::None);
        assert_eq!(joined.replace('_', ""), plain);
        assert!(!joined.starts_with('_') && !joined.ends_with('_'));
    }

    #[test]
    fn test_casing_is_per_word() {
        let lists = WordLists::new(["magpie"], ["giving"], ["likely"]).unwrap();
        let mut generator = Generator::with_lists(lists);

        assert_eq!(
            generator.generate(3, Casing::Lower, Separator::None),
            "likelygivingmagpie"
        );
        assert_eq!(
            generator.generate(3, Casing::Upper, Separator::None),
            "LIKELYGIVINGMAGPIE"
        );
        assert_eq!(
            generator.generate(3, Casing::Title, Separator::None),
            "LikelyGivingMagpie"
        );
        assert_eq!(
            generator.generate(5, Casing::Title, Separator::Hyphen),
            "Likely-Likely-Likely-Giving-Magpie"
        );
    }

    #[test]
    fn test_casing_leaves_non_letters() {
        let lists = WordLists::new(["r2d2"], ["élan"], ["x"]).unwrap();
        let mut generator = Generator::with_lists(lists);
        assert_eq!(generator.generate(2, Casing::Upper, Separator::Hyphen), "éLAN-R2D2");
        assert_eq!(generator.generate(2, Casing::Title, Separator::Hyphen), "élan-R2d2");
    }

    #[test]
    fn test_title_handles_empty_word() {
        let lists = WordLists::new([""], ["calm"], ["very"]).unwrap();
        let mut generator = Generator::with_lists(lists);
        assert_eq!(generator.generate(2, Casing::Title, Separator::Hyphen), "Calm-");
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = Generator::from_variant(Variant::Medium).seeded(99);
        let mut b = Generator::from_variant(Variant::Medium).seeded(99);
        for count in 0..10 {
            assert_eq!(
                a.generate(count, Casing::Title, Separator::Underscore),
                b.generate(count, Casing::Title, Separator::Underscore)
            );
        }
    }

    #[test]
    fn test_reseed_restarts_output() {
        let mut generator = Generator::new();
        let first = generator.generate(3, Casing::Lower, Separator::None);
        generator.seed(crate::rng::DEFAULT_SEED);
        assert_eq!(generator.generate(3, Casing::Upper, Separator::None), first.to_uppercase());
    }

    #[test]
    fn test_random_word_accessors() {
        let mut generator = tiny();
        assert!(["likely", "truly"].contains(&generator.random_adverb()));
        assert!(["giving", "calm"].contains(&generator.random_adjective()));
        assert!(["magpie", "otter"].contains(&generator.random_name()));
    }

    #[test]
    fn test_setters_replace_lists() {
        let mut generator = Generator::new();
        generator.set_names(["yak"]).unwrap();
        generator.set_adjectives(["wild"]).unwrap();
        generator.set_adverbs(["very"]).unwrap();
        assert_eq!(generator.generate(4, Casing::Lower, Separator::Hyphen), "very-very-wild-yak");
        assert!(generator.set_names(Vec::<String>::new()).is_err());
        assert_eq!(generator.random_name(), "yak");
    }

    #[test]
    fn test_casing_and_separator_parsing() {
        assert_eq!("TITLE".parse::<Casing>().unwrap(), Casing::Title);
        assert!("camel".parse::<Casing>().is_err());
        assert_eq!("-".parse::<Separator>().unwrap(), Separator::Hyphen);
        assert_eq!("underscore".parse::<Separator>().unwrap(), Separator::Underscore);
        assert!("dot".parse::<Separator>().is_err());
        assert_eq!(Separator::Hyphen.to_string(), "hyphen");
        assert_eq!(Separator::None.as_char(), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&(Casing::Title, Separator::Underscore)).unwrap();
        assert_eq!(json, r#"["title","underscore"]"#);
    }
}
