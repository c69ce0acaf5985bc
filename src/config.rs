//! Runtime configuration from environment variables.
//!
//! | Variable                   | Meaning                                        |
//! |----------------------------|------------------------------------------------|
//! | `GANTT_DOCS_CATALOG`       | catalog TOML replacing the built-in sections   |
//! | `GANTT_DOCS_THEME_FILE`    | where the theme preference is stored           |
//! | `GANTT_DOCS_PREFER_DARK`   | system dark-mode preference (`1`, `true`, ...) |
//! | `GANTT_DOCS_SEARCH_LIMIT`  | default number of ranked results               |

use std::path::PathBuf;

pub const CATALOG_ENV: &str = "GANTT_DOCS_CATALOG";
pub const THEME_FILE_ENV: &str = "GANTT_DOCS_THEME_FILE";
pub const PREFER_DARK_ENV: &str = "GANTT_DOCS_PREFER_DARK";
pub const SEARCH_LIMIT_ENV: &str = "GANTT_DOCS_SEARCH_LIMIT";

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

const APP_DIR: &str = "gantt-docs";
const THEME_FILE: &str = "theme.toml";
const FALLBACK_THEME_FILE: &str = ".gantt-docs-theme.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog override; `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub theme_path: PathBuf,
    pub prefer_dark: bool,
    pub search_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            theme_path: default_theme_path(),
            prefer_dark: false,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(CATALOG_ENV).filter(|v| !v.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup(THEME_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.theme_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(PREFER_DARK_ENV) {
            match parse_flag(&value) {
                Some(flag) => config.prefer_dark = flag,
                None => tracing::warn!("Ignoring {}={:?}: not a boolean", PREFER_DARK_ENV, value),
            }
        }

        if let Some(value) = lookup(SEARCH_LIMIT_ENV) {
            match value.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.search_limit = limit,
                _ => tracing::warn!(
                    "Ignoring {}={:?}: expected a positive integer",
                    SEARCH_LIMIT_ENV,
                    value
                ),
            }
        }

        config
    }
}

fn default_theme_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(FALLBACK_THEME_FILE),
        |dir| dir.join(APP_DIR).join(THEME_FILE),
    )
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        check!(config.catalog_path.is_none());
        check!(!config.prefer_dark);
        check!(config.search_limit == DEFAULT_SEARCH_LIMIT);
        check!(
            config.theme_path.ends_with(THEME_FILE)
                || config.theme_path.ends_with(FALLBACK_THEME_FILE)
        );
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (CATALOG_ENV, "/srv/catalog.toml"),
            (THEME_FILE_ENV, "/tmp/theme.toml"),
            (PREFER_DARK_ENV, "yes"),
            (SEARCH_LIMIT_ENV, "25"),
        ]);
        check!(config.catalog_path == Some(PathBuf::from("/srv/catalog.toml")));
        check!(config.theme_path == PathBuf::from("/tmp/theme.toml"));
        check!(config.prefer_dark);
        check!(config.search_limit == 25);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    fn invalid_limit_keeps_default(#[case] value: &str) {
        check!(config_from(&[(SEARCH_LIMIT_ENV, value)]).search_limit == DEFAULT_SEARCH_LIMIT);
    }

    #[rstest]
    #[case("TRUE", true)]
    #[case("off", false)]
    #[case("maybe", false)]
    fn prefer_dark_flag(#[case] value: &str, #[case] expected: bool) {
        check!(config_from(&[(PREFER_DARK_ENV, value)]).prefer_dark == expected);
    }

    #[test]
    fn blank_catalog_path_is_ignored() {
        check!(config_from(&[(CATALOG_ENV, "  ")]).catalog_path.is_none());
    }
}
