//! Lead capture configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bridge::ImpactStyle;
use crate::lead::DEFAULT_BRAND;

/// Page background used when the host theme has no `bg_color`.
pub const DEFAULT_BG_COLOR: &str = "#0d1018";

/// Delay between a successful send and the close request.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 500;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Settings for the lead capture handler. Every field has a default, so a
/// partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadConfig {
    /// Value of the `brand` field in every lead.
    pub brand: String,
    /// Fallback page background.
    pub default_bg_color: String,
    /// Milliseconds to wait after a successful send before closing the view.
    pub close_delay_ms: u64,
    /// Haptic pulse fired after a successful send.
    pub haptic_style: ImpactStyle,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            default_bg_color: DEFAULT_BG_COLOR.to_string(),
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
            haptic_style: ImpactStyle::Heavy,
        }
    }
}

impl LeadConfig {
    /// Parse a (possibly partial) JSON config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from environment variables with defaults.
    ///
    /// | Variable                          | Default   |
    /// |-----------------------------------|-----------|
    /// | `VIMLY_BRAND` / `BRAND_NAME`      | `Vimly`   |
    /// | `VIMLY_BG_COLOR`                  | `#0d1018` |
    /// | `VIMLY_CLOSE_DELAY_MS`            | `500`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LeadConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let brand = non_blank("VIMLY_BRAND")
            .or_else(|| non_blank("BRAND_NAME"))
            .unwrap_or(defaults.brand);
        let default_bg_color = non_blank("VIMLY_BG_COLOR").unwrap_or(defaults.default_bg_color);
        let close_delay_ms = match non_blank("VIMLY_CLOSE_DELAY_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "VIMLY_CLOSE_DELAY_MS",
                reason: format!("{e}"),
            })?,
            None => defaults.close_delay_ms,
        };

        let config = Self {
            brand,
            default_bg_color,
            close_delay_ms,
            haptic_style: defaults.haptic_style,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "brand",
                reason: "must not be empty".into(),
            });
        }
        if self.default_bg_color.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "defaultBgColor",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}
