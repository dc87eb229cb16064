//! Analytics configuration.
//!
//! Builder-style, serde-deserializable, and loadable from TOML:
//!
//! ```toml
//! top_names = 3
//!
//! [hour_basis]
//! kind = "fixed"
//! offset_minutes = 540
//! ```
//!
//! Omitted keys take their defaults (UTC hours, five named slices).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::time::HourBasis;

/// Names kept by the name distribution before folding into "Others".
pub const DEFAULT_TOP_NAMES: usize = 5;

/// Settings for analytics and chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Clock used for "hour of day".
    pub hour_basis: HourBasis,
    /// Names kept by [`crate::distribution::name_distribution`].
    pub top_names: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            hour_basis: HourBasis::Utc,
            top_names: DEFAULT_TOP_NAMES,
        }
    }
}

impl AnalyticsConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hour-of-day clock.
    pub fn with_hour_basis(mut self, basis: HourBasis) -> Self {
        self.hour_basis = basis;
        self
    }

    /// Sets how many names the name distribution keeps.
    pub fn with_top_names(mut self, top_names: usize) -> Self {
        self.top_names = top_names;
        self
    }

    /// Parses and checks a TOML document.
    ///
    /// # Errors
    /// [`Error::ConfigParse`] on malformed TOML, [`Error::InvalidConfig`] on
    /// out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        self.hour_basis
            .check()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyticsConfig::new();
        assert_eq!(config.hour_basis, HourBasis::Utc);
        assert_eq!(config.top_names, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AnalyticsConfig::new()
            .with_hour_basis(HourBasis::Recorded)
            .with_top_names(3);
        assert_eq!(config.hour_basis, HourBasis::Recorded);
        assert_eq!(config.top_names, 3);
    }

    #[test]
    fn test_from_toml() {
        let config = AnalyticsConfig::from_toml_str(
            r#"
            top_names = 3

            [hour_basis]
            kind = "fixed"
            offset_minutes = 540
            "#,
        )
        .unwrap();
        assert_eq!(config.top_names, 3);
        assert_eq!(config.hour_basis, HourBasis::Fixed { offset_minutes: 540 });
    }

    #[test]
    fn test_from_toml_defaults() {
        let config = AnalyticsConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalyticsConfig::default());

        let config = AnalyticsConfig::from_toml_str("hour_basis = { kind = \"recorded\" }").unwrap();
        assert_eq!(config.hour_basis, HourBasis::Recorded);
        assert_eq!(config.top_names, 5);
    }

    #[test]
    fn test_from_toml_errors() {
        let err = AnalyticsConfig::from_toml_str("top_names = \"many\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));

        let err = AnalyticsConfig::from_toml_str(
            "hour_basis = { kind = \"fixed\", offset_minutes = 1500 }",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
