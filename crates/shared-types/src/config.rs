use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays for the transient UI effects, in milliseconds.
///
/// Every field has a default so a partial `config.toml` only overrides
/// what it names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Timings {
    /// How long an alert banner stays up before it removes itself.
    #[serde(default = "default_alert_dismiss_ms")]
    pub alert_dismiss_ms: u64,
    /// How long a search may be in flight before the progress notice shows.
    #[serde(default = "default_search_notice_ms")]
    pub search_notice_ms: u64,
    /// How long a PDF link shows its loading state.
    #[serde(default = "default_download_revert_ms")]
    pub download_revert_ms: u64,
}

fn default_alert_dismiss_ms() -> u64 {
    5_000
}

fn default_search_notice_ms() -> u64 {
    2_000
}

fn default_download_revert_ms() -> u64 {
    10_000
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: default_alert_dismiss_ms(),
            search_notice_ms: default_search_notice_ms(),
            download_revert_ms: default_download_revert_ms(),
        }
    }
}

impl Timings {
    pub fn alert_dismiss(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }

    pub fn search_notice(&self) -> Duration {
        Duration::from_millis(self.search_notice_ms)
    }

    pub fn download_revert(&self) -> Duration {
        Duration::from_millis(self.download_revert_ms)
    }
}

/// Where the court data backend lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Origin such as `https://courts.example.org`. Empty means same origin.
    #[serde(default)]
    pub base_url: String,
}

impl BackendConfig {
    /// Join a backend path onto the configured origin.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub timings: Timings,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings() {
        let t = Timings::default();
        assert_eq!(t.alert_dismiss(), Duration::from_secs(5));
        assert_eq!(t.search_notice(), Duration::from_secs(2));
        assert_eq!(t.download_revert(), Duration::from_secs(10));
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: UiConfig = toml::from_str("").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn deserialize_partial_toml_keeps_other_defaults() {
        let config: UiConfig = toml::from_str(
            r#"
            [timings]
            search_notice_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.timings.search_notice_ms, 500);
        assert_eq!(config.timings.alert_dismiss_ms, 5_000);
        assert_eq!(config.timings.download_revert_ms, 10_000);
        assert!(config.backend.base_url.is_empty());
    }

    #[test]
    fn deserialize_full_toml() {
        let config: UiConfig = toml::from_str(
            r#"
            [timings]
            alert_dismiss_ms = 1
            search_notice_ms = 2
            download_revert_ms = 3

            [backend]
            base_url = "https://courts.example.org"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.timings,
            Timings {
                alert_dismiss_ms: 1,
                search_notice_ms: 2,
                download_revert_ms: 3,
            }
        );
        assert_eq!(config.backend.base_url, "https://courts.example.org");
    }

    #[test]
    fn backend_url_joins_without_double_slash() {
        let backend = BackendConfig {
            base_url: "https://courts.example.org/".into(),
        };
        assert_eq!(backend.url("/search"), "https://courts.example.org/search");
        assert_eq!(BackendConfig::default().url("/search"), "/search");
    }

    #[test]
    fn repository_config_file_parses() {
        let config: UiConfig = toml::from_str(include_str!("../../../config.toml")).unwrap();
        assert_eq!(config.timings, Timings::default());
    }
}
