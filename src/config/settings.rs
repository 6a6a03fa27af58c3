use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use petname::{Casing, Separator, Variant, WordLists};

use super::paths;
use crate::cli::Cli;

/// User-scoped settings (~/.config/petname/config.json)
/// Every field is optional; missing ones fall back to built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub casing: Option<Casing>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,

    /// Built-in word list variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Variant>,

    /// Directory with custom word list files, takes precedence over `list`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl UserSettings {
    /// Load user settings from the default location, if present
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&paths::user_config_file()?)
    }

    /// Load user settings from a specific file, if present
    pub fn load_from(config_path: &Path) -> Result<Option<Self>> {
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "loaded user settings");
        Ok(Some(settings))
    }
}

/// Where the word lists come from
#[derive(Debug, Clone, PartialEq)]
pub enum ListSource {
    Builtin(Variant),
    Dir(PathBuf),
}

impl ListSource {
    pub fn load(&self) -> Result<WordLists> {
        match self {
            ListSource::Builtin(variant) => Ok(WordLists::builtin(*variant)),
            ListSource::Dir(dir) => WordLists::from_dir(dir)
                .with_context(|| format!("Failed to load word lists from {}", dir.display())),
        }
    }
}

/// Merged settings for runtime use
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSettings {
    pub words: usize,
    pub casing: Casing,
    pub separator: Separator,
    pub count: usize,
    /// None means seed from the clock
    pub seed: Option<i64>,
    pub source: ListSource,
}

impl MergedSettings {
    /// Merge with priority: command line > user settings > defaults
    pub fn resolve(cli: &Cli, user: UserSettings) -> Self {
        let source = match (&cli.dir, cli.list) {
            (Some(dir), _) => ListSource::Dir(dir.clone()),
            (None, Some(variant)) => ListSource::Builtin(variant),
            (None, None) => match user.dir {
                Some(dir) => ListSource::Dir(dir),
                None => ListSource::Builtin(user.list.unwrap_or_default()),
            },
        };

        Self {
            words: cli.words.or(user.words).unwrap_or(default_words()),
            casing: cli.casing.or(user.casing).unwrap_or_default(),
            separator: cli
                .separator
                .or(user.separator)
                .unwrap_or(default_separator()),
            count: cli.count,
            seed: cli.seed,
            source,
        }
    }
}

fn default_words() -> usize {
    3
}
fn default_separator() -> Separator {
    Separator::Hyphen
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["petname"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_settings() {
        let merged = MergedSettings::resolve(&cli(&[]), UserSettings::default());
        assert_eq!(merged.words, 3);
        assert_eq!(merged.casing, Casing::Lower);
        assert_eq!(merged.separator, Separator::Hyphen);
        assert_eq!(merged.count, 1);
        assert_eq!(merged.seed, None);
        assert_eq!(merged.source, ListSource::Builtin(Variant::Short));
    }

    #[test]
    fn test_user_settings_json_parsing() {
        let json = r#"{
            "words": 5,
            "casing": "title",
            "separator": "underscore",
            "list": "medium"
        }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.words, Some(5));
        assert_eq!(settings.casing, Some(Casing::Title));
        assert_eq!(settings.separator, Some(Separator::Underscore));
        assert_eq!(settings.list, Some(Variant::Medium));
        assert!(settings.dir.is_none());
    }

    #[test]
    fn test_user_settings_empty_json() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_user_settings_apply_when_flags_absent() {
        let user = UserSettings {
            words: Some(2),
            casing: Some(Casing::Upper),
            separator: Some(Separator::None),
            list: Some(Variant::Long),
            dir: None,
        };
        let merged = MergedSettings::resolve(&cli(&[]), user);
        assert_eq!(merged.words, 2);
        assert_eq!(merged.casing, Casing::Upper);
        assert_eq!(merged.separator, Separator::None);
        assert_eq!(merged.source, ListSource::Builtin(Variant::Long));
    }

    #[test]
    fn test_flags_override_user_settings() {
        let user = UserSettings {
            words: Some(2),
            casing: Some(Casing::Upper),
            dir: Some(PathBuf::from("/words")),
            ..Default::default()
        };
        let merged = MergedSettings::resolve(&cli(&["-w", "6", "-c", "lower", "-l", "medium"]), user);
        assert_eq!(merged.words, 6);
        assert_eq!(merged.casing, Casing::Lower);
        assert_eq!(merged.source, ListSource::Builtin(Variant::Medium));
    }

    #[test]
    fn test_user_dir_beats_user_list() {
        let user = UserSettings {
            list: Some(Variant::Long),
            dir: Some(PathBuf::from("/words")),
            ..Default::default()
        };
        let merged = MergedSettings::resolve(&cli(&[]), user);
        assert_eq!(merged.source, ListSource::Dir(PathBuf::from("/words")));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = UserSettings::load_from(&dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_from_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = UserSettings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
