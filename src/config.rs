//! Runtime configuration from environment variables.
//!
//! | Variable                 | Meaning                          | Default |
//! |--------------------------|----------------------------------|---------|
//! | `TREEFILTER_DATA`        | dataset loaded at startup        | none    |
//! | `TREEFILTER_DEBOUNCE_MS` | filter input debounce window     | 300     |
//! | `TREEFILTER_LOG_JSON`    | JSON log lines instead of text   | false   |
//! | `TREEFILTER_DEMO_SEED`   | seed of the demo dataset         | 42      |
//! | `TREEFILTER_THEME`       | initial theme name               | Dark    |
//!
//! Log verbosity itself comes from `RUST_LOG` (see [`crate::logging`]).

use crate::virtual_dataset::DEFAULT_SEED;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_THEME: &str = "Dark";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub data_path: Option<PathBuf>,
    pub debounce: Duration,
    pub log_json: bool,
    pub demo_seed: u64,
    pub theme: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            log_json: false,
            demo_seed: DEFAULT_SEED,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            data_path: lookup("TREEFILTER_DATA")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            debounce: Duration::from_millis(parse_u64(
                lookup("TREEFILTER_DEBOUNCE_MS"),
                DEFAULT_DEBOUNCE_MS,
            )),
            log_json: parse_bool(lookup("TREEFILTER_LOG_JSON"), defaults.log_json),
            demo_seed: parse_u64(lookup("TREEFILTER_DEMO_SEED"), defaults.demo_seed),
            theme: lookup("TREEFILTER_THEME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.theme),
        }
    }

    /// Overrides the dataset path (e.g. from a command-line argument).
    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.data_path = path;
        }
        self
    }
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn parse_u64(value: Option<String>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
