//! Configuration management

use crate::domain::{LinkClassifier, NoteSeries, SeriesDirs, SeriesSynonyms};
use crate::error::{DaylinkError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory, then the home directory
pub const CONFIG_FILE_NAME: &str = ".daylink.toml";

pub const DEFAULT_SEARCH_WINDOW_DAYS: i64 = 30;

/// Default configuration with an explanation of every key
pub const CONFIG_TEMPLATE: &str = r#"# daylink configuration
#
# Looked up as ./.daylink.toml, then ~/.daylink.toml, unless --config is given.
# DAYLINK_SEARCH_WINDOW_DAYS, DAYLINK_JOURNAL_DIR and DAYLINK_STANDUP_DIR
# override the values below.

# How many days to search when the linked note does not exist.
# "Previous" and cross-reference links walk back from the wanted date,
# "next" links walk forward. Example: if 2025-01-09 is missing and
# 2025-01-08 exists, a previous link from 2025-01-10 lands on 2025-01-08.
search_window_days = 30

[journal]
# Directory holding journal entries named YYYY-MM-DD.md.
# Relative paths resolve against the current directory.
dir = "./journal"

# Link texts meaning "the entry before this one" (case-insensitive).
# [Yesterday](2025-01-07) is repointed at the nearest earlier note.
link_previous_titles = ["Yesterday", "Previous", "Last Week"]

# Link texts meaning "the entry after this one" (case-insensitive).
link_next_titles = ["Tomorrow", "Next", "Next Week"]

[standup]
# Directory holding standup notes named YYYY-MM-DD.md.
dir = "./standup"

# Synonyms from both series apply to every note.
link_previous_titles = ["Yesterday", "Previous", "Last Week"]
link_next_titles = ["Tomorrow", "Next", "Next Week"]
"#;

const ENV_SEARCH_WINDOW_DAYS: &str = "DAYLINK_SEARCH_WINDOW_DAYS";
const ENV_JOURNAL_DIR: &str = "DAYLINK_JOURNAL_DIR";
const ENV_STANDUP_DIR: &str = "DAYLINK_STANDUP_DIR";

/// Per-series settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Root directory of the series; `./<series>` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Link texts meaning "previous entry" (case-insensitive)
    #[serde(default = "default_previous_titles")]
    pub link_previous_titles: Vec<String>,

    /// Link texts meaning "next entry" (case-insensitive)
    #[serde(default = "default_next_titles")]
    pub link_next_titles: Vec<String>,
}

impl SeriesConfig {
    fn with_dir(series: NoteSeries) -> Self {
        SeriesConfig {
            dir: Some(default_dir(series)),
            link_previous_titles: default_previous_titles(),
            link_next_titles: default_next_titles(),
        }
    }

    pub fn synonyms(&self) -> SeriesSynonyms {
        SeriesSynonyms {
            previous: self.link_previous_titles.clone(),
            next: self.link_next_titles.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How many days the note finder probes before giving up
    #[serde(default = "default_search_window_days")]
    pub search_window_days: i64,

    #[serde(default = "default_journal")]
    pub journal: SeriesConfig,

    #[serde(default = "default_standup")]
    pub standup: SeriesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_window_days: DEFAULT_SEARCH_WINDOW_DAYS,
            journal: default_journal(),
            standup: default_standup(),
        }
    }
}

fn default_search_window_days() -> i64 {
    DEFAULT_SEARCH_WINDOW_DAYS
}

fn default_previous_titles() -> Vec<String> {
    vec!["Yesterday".into(), "Previous".into(), "Last Week".into()]
}

fn default_next_titles() -> Vec<String> {
    vec!["Tomorrow".into(), "Next".into(), "Next Week".into()]
}

fn default_journal() -> SeriesConfig {
    SeriesConfig::with_dir(NoteSeries::Journal)
}

fn default_standup() -> SeriesConfig {
    SeriesConfig::with_dir(NoteSeries::Standup)
}

fn default_dir(series: NoteSeries) -> PathBuf {
    Path::new(".").join(series.as_str())
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `.daylink.toml` is looked up in the
    /// current directory and then the home directory, falling back to defaults.
    /// Environment overrides are applied last, then the result is validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(DaylinkError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_from_file(path)?
            }
            None => match Self::discover_file() {
                Some(path) => Self::load_from_file(&path)?,
                None => {
                    debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    Config::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file; missing keys take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        debug!("loading config from {}", path.display());

        toml::from_str(&contents).map_err(|e| {
            DaylinkError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write the config as pretty TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn discover_file() -> Option<PathBuf> {
        let local = std::env::current_dir().ok().map(|dir| dir.join(CONFIG_FILE_NAME));
        let home = dirs::home_dir().map(|dir| dir.join(CONFIG_FILE_NAME));

        [local, home].into_iter().flatten().find(|path| path.is_file())
    }

    /// Apply `DAYLINK_*` overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SEARCH_WINDOW_DAYS) {
            self.search_window_days = raw.trim().parse().map_err(|_| {
                DaylinkError::Config(format!(
                    "search_window_days must be an integer, got '{}' from {}",
                    raw, ENV_SEARCH_WINDOW_DAYS
                ))
            })?;
        }
        if let Some(dir) = lookup(ENV_JOURNAL_DIR) {
            self.journal.dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = lookup(ENV_STANDUP_DIR) {
            self.standup.dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.search_window_days <= 0 {
            return Err(DaylinkError::Config(format!(
                "search_window_days must be positive, got {}",
                self.search_window_days
            )));
        }

        for series in NoteSeries::ALL {
            if self
                .series(series)
                .dir
                .as_ref()
                .is_some_and(|dir| dir.as_os_str().is_empty())
            {
                return Err(DaylinkError::Config(format!("{}.dir must not be empty", series)));
            }
        }

        Ok(())
    }

    pub fn series(&self, series: NoteSeries) -> &SeriesConfig {
        match series {
            NoteSeries::Journal => &self.journal,
            NoteSeries::Standup => &self.standup,
        }
    }

    /// Absolute root directory of a series; relative paths resolve against the
    /// current working directory
    pub fn series_dir(&self, series: NoteSeries) -> Result<PathBuf> {
        let dir = self
            .series(series)
            .dir
            .clone()
            .unwrap_or_else(|| default_dir(series));

        if dir.is_absolute() {
            Ok(dir)
        } else {
            let relative = dir.strip_prefix(".").unwrap_or(dir.as_path());
            Ok(std::env::current_dir()?.join(relative))
        }
    }

    pub fn series_dirs(&self) -> Result<SeriesDirs> {
        Ok(SeriesDirs::new(
            self.series_dir(NoteSeries::Journal)?,
            self.series_dir(NoteSeries::Standup)?,
        ))
    }

    pub fn classifier(&self) -> LinkClassifier {
        LinkClassifier::new(&self.journal.synonyms(), &self.standup.synonyms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search_window_days, 30);
        assert_eq!(config.journal.dir, Some(PathBuf::from("./journal")));
        assert_eq!(config.standup.dir, Some(PathBuf::from("./standup")));
        assert_eq!(
            config.journal.link_previous_titles,
            vec!["Yesterday", "Previous", "Last Week"]
        );
        assert_eq!(
            config.standup.link_next_titles,
            vec!["Tomorrow", "Next", "Next Week"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_matches_defaults() {
        let parsed: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.search_window_days = 14;
        config.standup.link_previous_titles = vec!["Last time".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.toml");
        fs::write(
            &path,
            "[journal]\ndir = \"/notes/journal\"\nlink_next_titles = [\"Onward\"]\n",
        )
        .unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.search_window_days, 30);
        assert_eq!(loaded.journal.dir, Some(PathBuf::from("/notes/journal")));
        assert_eq!(loaded.journal.link_next_titles, vec!["Onward"]);
        assert_eq!(
            loaded.journal.link_previous_titles,
            vec!["Yesterday", "Previous", "Last Week"]
        );
        assert_eq!(loaded.standup, default_standup());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "search_window_days = \"many\"").unwrap();

        match Config::load_from_file(&path) {
            Err(err @ DaylinkError::Config(_)) => {
                assert!(err.to_string().contains("Failed to parse"));
                assert!(err.to_string().contains("bad.toml"));
                assert_eq!(err.exit_code(), 4);
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(&temp.path().join("missing.toml")));

        match result {
            Err(DaylinkError::Config(msg)) => assert!(msg.contains("config file not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup_from(&[
                ("DAYLINK_SEARCH_WINDOW_DAYS", " 7 "),
                ("DAYLINK_JOURNAL_DIR", "/j"),
                ("DAYLINK_STANDUP_DIR", "/s"),
            ]))
            .unwrap();

        assert_eq!(config.search_window_days, 7);
        assert_eq!(config.journal.dir, Some(PathBuf::from("/j")));
        assert_eq!(config.standup.dir, Some(PathBuf::from("/s")));
    }

    #[test]
    fn test_override_rejects_non_integer_window() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("DAYLINK_SEARCH_WINDOW_DAYS", "soon")]));
        assert!(matches!(result, Err(DaylinkError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_window() {
        let mut config = Config::default();
        config.search_window_days = 0;
        match config.validate() {
            Err(DaylinkError::Config(msg)) => assert!(msg.contains("search_window_days")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_dir() {
        let mut config = Config::default();
        config.standup.dir = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_series_dir_absolute_and_relative() {
        let mut config = Config::default();
        config.journal.dir = Some(PathBuf::from("/abs/journal"));
        config.standup.dir = None;

        assert_eq!(
            config.series_dir(NoteSeries::Journal).unwrap(),
            PathBuf::from("/abs/journal")
        );

        let standup = config.series_dir(NoteSeries::Standup).unwrap();
        assert!(standup.is_absolute());
        assert!(standup.ends_with("standup"));
    }
}
