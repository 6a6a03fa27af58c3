use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const SHORT_ADJECTIVES: &str = include_str!("../../data/short/adjectives.txt");
const SHORT_ADVERBS: &str = include_str!("../../data/short/adverbs.txt");
const SHORT_NAMES: &str = include_str!("../../data/short/names.txt");

const MEDIUM_ADJECTIVES: &str = include_str!("../../data/medium/adjectives.txt");
const MEDIUM_ADVERBS: &str = include_str!("../../data/medium/adverbs.txt");
const MEDIUM_NAMES: &str = include_str!("../../data/medium/names.txt");

const LONG_ADJECTIVES: &str = include_str!("../../data/long/adjectives.txt");
const LONG_ADVERBS: &str = include_str!("../../data/long/adverbs.txt");
const LONG_NAMES: &str = include_str!("../../data/long/names.txt");

/// Built-in word list variants, embedded at compile time from `data/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Short,
    Medium,
    Long,
}

/// Raw newline-separated sources for one variant
pub(crate) struct Sources {
    pub adjectives: &'static str,
    pub adverbs: &'static str,
    pub names: &'static str,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Short, Variant::Medium, Variant::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Short => "short",
            Variant::Medium => "medium",
            Variant::Long => "long",
        }
    }

    pub(crate) fn sources(self) -> Sources {
        match self {
            Variant::Short => Sources {
                adjectives: SHORT_ADJECTIVES,
                adverbs: SHORT_ADVERBS,
                names: SHORT_NAMES,
            },
            Variant::Medium => Sources {
                adjectives: MEDIUM_ADJECTIVES,
                adverbs: MEDIUM_ADVERBS,
                names: MEDIUM_NAMES,
            },
            Variant::Long => Sources {
                adjectives: LONG_ADJECTIVES,
                adverbs: LONG_ADVERBS,
                names: LONG_NAMES,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Variant::Short),
            "medium" => Ok(Variant::Medium),
            "long" => Ok(Variant::Long),
            _ => Err(Error::ParseVariant(s.to_string())),
        }
    }
}
