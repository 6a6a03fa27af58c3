//! Human-readable random names ("petnames") for hosts, containers, blobs and
//! other short-lived things where a UUID would be unreadable.
//!
//! A petname is a number of adverbs followed by an adjective and a name,
//! e.g. `likely-giving-magpie`. Output is not cryptographically random and
//! carries no uniqueness guarantee.
//!
//! [`Generator`] owns its word lists and random source. The free functions
//! in this crate drive a shared default generator (short lists, seed 1),
//! guarded by a mutex so they can be called from any thread.

mod error;
mod names;
mod rng;
pub mod words;

pub use error::{Error, Result};
pub use names::{Casing, Generator, Separator};
pub use rng::{RandomSource, DEFAULT_SEED};
pub use words::{Variant, WordKind, WordLists};

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static DEFAULT: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::new()));

fn default_generator() -> MutexGuard<'static, Generator> {
    // Generation never leaves the generator half-updated, so a panic in
    // another holder does not invalidate it.
    DEFAULT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the names used by the shared generator.
///
/// Entries are expected to be lowercase ASCII without surrounding
/// whitespace. An empty list is rejected.
pub fn set_names<I>(words: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    default_generator().set_names(words)
}

/// Replace the adjectives used by the shared generator
pub fn set_adjectives<I>(words: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    default_generator().set_adjectives(words)
}

/// Replace the adverbs used by the shared generator
pub fn set_adverbs<I>(words: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    default_generator().set_adverbs(words)
}

/// Switch the shared generator to one of the built-in variants
pub fn use_variant(variant: Variant) {
    default_generator().set_lists(WordLists::builtin(variant));
}

/// Reseed the shared generator for reproducible output
pub fn seed(seed: i64) {
    default_generator().seed(seed);
}

/// Reseed the shared generator from the current time
pub fn use_non_deterministic_seed() {
    default_generator().use_non_deterministic_seed();
}

pub fn random_adverb() -> String {
    default_generator().random_adverb().to_string()
}

pub fn random_adjective() -> String {
    default_generator().random_adjective().to_string()
}

pub fn random_name() -> String {
    default_generator().random_name().to_string()
}

/// Generate a petname with the shared generator. See [`Generator::generate`].
pub fn generate(word_count: usize, casing: Casing, separator: Separator) -> String {
    default_generator().generate(word_count, casing, separator)
}
