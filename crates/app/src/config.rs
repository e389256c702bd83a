use shared_types::UiConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<UiConfig> = OnceLock::new();

/// `config.toml` from the workspace root, baked in at build time since the
/// client has no filesystem.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse a config document, falling back to defaults if it is malformed.
pub fn parse_config(contents: &str) -> UiConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse config.toml: {e}; using defaults");
        UiConfig::default()
    })
}

/// The UI config, parsed on first use.
pub fn ui_config() -> &'static UiConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(CONFIG_TOML);
        tracing::debug!(?config, "ui config loaded");
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Timings;

    #[test]
    fn embedded_config_uses_standard_timings() {
        assert_eq!(ui_config().timings, Timings::default());
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let config = parse_config("[timings\nalert_dismiss_ms = ");
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn wrong_types_fall_back_to_defaults() {
        let config = parse_config("[timings]\nalert_dismiss_ms = \"soon\"");
        assert_eq!(config, UiConfig::default());
    }
}
