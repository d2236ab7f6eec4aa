//! # Application configuration (`safety.toml`)
//!
//! Tunables for the simulated backend and the UI state holders. The web app
//! embeds a `safety.toml` at build time and parses it on startup; any missing
//! section or field falls back to the defaults below, so an empty document is
//! equivalent to [`SafetyConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! alerts_latency_ms = 600
//! tips_latency_ms = 450
//! risk_areas_latency_ms = 700
//! report_latency_ms = 600
//! auth_latency_ms = 500
//! fault_rate = 0.0        # probability in 0..=1 that a call fails
//!
//! [session]
//! bootstrap_delay_ms = 50
//!
//! [notices]
//! auto_hide_ms = 5000
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SafetyConfig`] | Top-level config with TOML (de)serialisation and validation. |
//! | [`ApiConfig`] | Per-operation latencies of the mock backend and the dormant fault rate. |
//! | [`SessionConfig`] | Delay before the simulated session check completes. |
//! | [`NoticeConfig`] | How long a notice stays visible without interaction. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors raised while building configuration or validated domain values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("fault rate must be within 0..=1, got {0}")]
    FaultRateOutOfRange(f64),

    #[error("risk level must be within 1..=5, got {0}")]
    RiskLevelOutOfRange(u8),

    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Top-level configuration stored in `safety.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SafetyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
}

/// Mock backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub alerts_latency_ms: u64,
    pub tips_latency_ms: u64,
    pub risk_areas_latency_ms: u64,
    pub report_latency_ms: u64,
    pub auth_latency_ms: u64,
    /// Probability that a call fails. 0 keeps the fault seam dormant.
    pub fault_rate: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            alerts_latency_ms: 600,
            tips_latency_ms: 450,
            risk_areas_latency_ms: 700,
            report_latency_ms: 600,
            auth_latency_ms: 500,
            fault_rate: 0.0,
        }
    }
}

impl ApiConfig {
    /// Every latency set to zero. Used by tests that do not care about timing.
    pub fn instant() -> Self {
        Self {
            alerts_latency_ms: 0,
            tips_latency_ms: 0,
            risk_areas_latency_ms: 0,
            report_latency_ms: 0,
            auth_latency_ms: 0,
            fault_rate: 0.0,
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_bootstrap_delay")]
    pub bootstrap_delay_ms: u64,
}

fn default_bootstrap_delay() -> u64 {
    50
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bootstrap_delay_ms: default_bootstrap_delay(),
        }
    }
}

impl SessionConfig {
    pub fn bootstrap_delay(&self) -> Duration {
        Duration::from_millis(self.bootstrap_delay_ms)
    }
}

/// Notice broadcaster configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_auto_hide")]
    pub auto_hide_ms: u64,
}

fn default_auto_hide() -> u64 {
    5000
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_auto_hide(),
        }
    }
}

impl NoticeConfig {
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }
}

impl SafetyConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "safety.toml"
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            fault_rate = config.api.fault_rate,
            auto_hide_ms = config.notices.auto_hide_ms,
            "parsed safety config"
        );
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to set the fault rate of the mock backend.
    pub fn with_fault_rate(mut self, rate: f64) -> Self {
        self.api.fault_rate = rate;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.api.fault_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::FaultRateOutOfRange(rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = SafetyConfig::from_toml("").unwrap();
        assert_eq!(config, SafetyConfig::default());
        assert_eq!(config.notices.auto_hide(), Duration::from_millis(5000));
        assert_eq!(config.session.bootstrap_delay(), Duration::from_millis(50));
        assert_eq!(config.api.fault_rate, 0.0);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = SafetyConfig::from_toml(
            r#"
            [api]
            tips_latency_ms = 10

            [notices]
            auto_hide_ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(config.api.tips_latency_ms, 10);
        assert_eq!(config.api.alerts_latency_ms, 600);
        assert_eq!(config.notices.auto_hide_ms, 1500);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_fault_rate_validated() {
        let err = SafetyConfig::from_toml("[api]\nfault_rate = 1.5\n").unwrap_err();
        assert_eq!(err, ConfigError::FaultRateOutOfRange(1.5));
        assert!(SafetyConfig::from_toml("[api]\nfault_rate = 0.25\n").is_ok());
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            SafetyConfig::from_toml("[api\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_roundtrip() {
        let config = SafetyConfig::default().with_fault_rate(0.1);
        let text = config.to_toml().unwrap();
        assert_eq!(SafetyConfig::from_toml(&text).unwrap(), config);
    }
}
