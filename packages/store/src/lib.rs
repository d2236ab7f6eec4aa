pub mod config;
pub mod models;
pub mod seed;

pub use config::{ApiConfig, ConfigError, NoticeConfig, SafetyConfig, SessionConfig};
pub use models::{Alert, RiskArea, RiskLevel, Severity, Tip, TipCategory, User};
pub use seed::SeedStore;
