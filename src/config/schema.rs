use serde::{Deserialize, Serialize};

use crate::pipeline::SortKey;

/// User configuration (~/.config/shortlist/config.yaml).
///
/// Every key is optional. Score weights are fixed and cannot be configured.
///
/// Example YAML:
/// ```yaml
/// dataset: ~/hiring/candidates.json
/// default_sort: sustainability
/// theme: dark
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to a candidates JSON document (defaults to the bundled dataset)
    #[serde(default)]
    pub dataset: Option<String>,

    /// Sort key applied at startup and on reset
    #[serde(default)]
    pub default_sort: Option<SortKey>,

    /// Color theme for the TUI
    #[serde(default)]
    pub theme: ThemeChoice,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
dataset: /tmp/candidates.json
default_sort: experience
theme: light
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.dataset.as_deref(), Some("/tmp/candidates.json"));
        assert_eq!(config.default_sort, Some(SortKey::Experience));
        assert_eq!(config.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, ThemeChoice::Auto);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = "weights:\n  crisis: 0.5\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_invalid_sort_key_rejected() {
        let yaml = "default_sort: salary\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            dataset: Some("data.json".to_string()),
            default_sort: Some(SortKey::Crisis),
            theme: ThemeChoice::Dark,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
