//! `[base]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in miniblog.toml - blog metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Notes"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Blog name, appended to post titles in the document `<title>`.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_title() {
        let config: SiteConfig = toml::from_str("[base]\ntitle = \"Notes 🚀\"").unwrap();
        assert_eq!(config.base.title, "Notes 🚀");
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();
        assert_eq!(config.base.title, "Mini GitHub Blog");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[base]\nauthor = \"Alice\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
