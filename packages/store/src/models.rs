//! # Domain models for safety information
//!
//! Plain records returned by the facade in the `api` crate. Every type is
//! `Serialize + Deserialize` so the same shapes can cross a real network
//! boundary once the mock backend is replaced.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Alert`] | A reported safety event at a named location, with a [`Severity`]. |
//! | [`Tip`] | A piece of safety advice filed under a [`TipCategory`]. |
//! | [`RiskArea`] | A circular zone (centre + radius in metres) scored by a [`RiskLevel`]. |
//! | [`User`] | The identity held by the session after a successful sign-in. |
//!
//! [`RiskLevel`] can only hold values in `1..=5`, and a [`RiskArea`] radius is
//! only set through [`RiskArea::new`], which rejects non-positive radii. Both
//! checks also run on deserialization.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How serious a reported alert or incident is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Tone used when rendering the severity as a coloured chip.
    pub fn tone(&self) -> &'static str {
        match self {
            Severity::High => "error",
            Severity::Medium => "warning",
            Severity::Low => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Severity::Low),
            "Medium" => Ok(Severity::Medium),
            "High" => Ok(Severity::High),
            other => Err(ConfigError::UnknownVariant {
                kind: "severity",
                value: other.to_string(),
            }),
        }
    }
}

/// Grouping used on the tips page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipCategory {
    General,
    Night,
    PublicTransport,
    Online,
}

impl TipCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TipCategory::General => "General",
            TipCategory::Night => "Night",
            TipCategory::PublicTransport => "Public Transport",
            TipCategory::Online => "Online",
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TipCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(TipCategory::General),
            "Night" => Ok(TipCategory::Night),
            "PublicTransport" | "Public Transport" => Ok(TipCategory::PublicTransport),
            "Online" => Ok(TipCategory::Online),
            other => Err(ConfigError::UnknownVariant {
                kind: "tip category",
                value: other.to_string(),
            }),
        }
    }
}

/// Integer risk score in `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskLevel(u8);

impl RiskLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ConfigError::RiskLevelOutOfRange(level))
        }
    }

    /// For compile-time literals inside this crate, e.g. the seed data.
    pub(crate) const fn new_unchecked(level: u8) -> Self {
        debug_assert!(level >= Self::MIN && level <= Self::MAX);
        Self(level)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Outline and fill colour for the zone on the map.
    pub fn color(&self) -> &'static str {
        match self.0 {
            1 => "#00FF00",
            2 => "#FFFF00",
            3 => "#FFA500",
            4 => "#FF4500",
            _ => "#FF0000",
        }
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> Self {
        level.0
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// A safety alert shown on the alerts page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    /// Serialised as an ISO-8601 string.
    pub timestamp: DateTime<Utc>,
    /// Free text, e.g. "Near Central Park"
    pub location: String,
    pub description: String,
    pub severity: Severity,
}

impl Alert {
    /// Timestamp in the viewer's local time zone.
    pub fn local_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%b %-d, %Y %H:%M")
            .to_string()
    }

    /// Coarse relative age such as "3 hours ago".
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(self.timestamp);
        let (count, unit) = if age.num_days() > 0 {
            (age.num_days(), "day")
        } else if age.num_hours() > 0 {
            (age.num_hours(), "hour")
        } else if age.num_minutes() > 0 {
            (age.num_minutes(), "minute")
        } else {
            return "just now".to_string();
        };
        if count == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{count} {unit}s ago")
        }
    }
}

/// A safety tip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub details: String,
    pub category: TipCategory,
}

/// A georeferenced circular zone with an associated risk score.
///
/// Deserialization goes through [`RiskArea::new`], so a document with a
/// non-positive radius is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRiskArea")]
pub struct RiskArea {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub(crate) radius: f64,
    pub risk_level: RiskLevel,
    pub description: Option<String>,
}

/// Wire shape of [`RiskArea`] before validation.
#[derive(Deserialize)]
struct RawRiskArea {
    id: String,
    latitude: f64,
    longitude: f64,
    radius: f64,
    risk_level: RiskLevel,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawRiskArea> for RiskArea {
    type Error = ConfigError;

    fn try_from(raw: RawRiskArea) -> Result<Self, Self::Error> {
        RiskArea::new(
            raw.id,
            raw.latitude,
            raw.longitude,
            raw.radius,
            raw.risk_level,
            raw.description,
        )
    }
}

impl RiskArea {
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        radius: f64,
        risk_level: RiskLevel,
        description: Option<String>,
    ) -> Result<Self, ConfigError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(radius));
        }
        Ok(Self {
            id: id.into(),
            latitude,
            longitude,
            radius,
            risk_level,
            description,
        })
    }

    /// Radius in metres, always > 0.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Popup text, falling back to a generic label.
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("Designated risk area.")
    }
}

/// An authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Upper-cased first letter of the name, for avatar badges.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_bounds() {
        assert!(RiskLevel::new(0).is_err());
        assert!(RiskLevel::new(6).is_err());
        for level in 1..=5 {
            assert_eq!(RiskLevel::new(level).unwrap().get(), level);
        }
    }

    #[test]
    fn test_risk_level_rejected_on_deserialize() {
        let doc = "id = \"r9\"\nlatitude = 1.0\nlongitude = 2.0\nradius = 10.0\nrisk_level = 7\n";
        assert!(toml::from_str::<RiskArea>(doc).is_err());

        let doc = doc.replace("risk_level = 7", "risk_level = 2");
        let area: RiskArea = toml::from_str(&doc).unwrap();
        assert_eq!(area.risk_level.get(), 2);
        assert!(area.description.is_none());
    }

    #[test]
    fn test_risk_area_requires_positive_radius() {
        let level = RiskLevel::new(3).unwrap();
        assert!(RiskArea::new("r1", 0.0, 0.0, 0.0, level, None).is_err());
        assert!(RiskArea::new("r1", 0.0, 0.0, -5.0, level, None).is_err());
        assert!(RiskArea::new("r1", 0.0, 0.0, f64::NAN, level, None).is_err());
        let area = RiskArea::new("r1", 0.0, 0.0, 25.0, level, None).unwrap();
        assert_eq!(area.description_or_default(), "Designated risk area.");
    }

    #[test]
    fn test_non_positive_radius_rejected_on_deserialize() {
        let doc = "id = \"r9\"\nlatitude = 1.0\nlongitude = 2.0\nradius = -10.0\nrisk_level = 2\n";
        assert!(toml::from_str::<RiskArea>(doc).is_err());
        assert!(toml::from_str::<RiskArea>(&doc.replace("-10.0", "0.0")).is_err());

        let area: RiskArea = toml::from_str(&doc.replace("-10.0", "10.0")).unwrap();
        assert_eq!(area.radius(), 10.0);
    }

    #[test]
    fn test_severity_parse_and_default() {
        assert_eq!(Severity::default(), Severity::Medium);
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>().unwrap(), severity);
        }
        assert!("Critical".parse::<Severity>().is_err());
        assert_eq!(Severity::High.tone(), "error");
    }

    #[test]
    fn test_alert_age_label() {
        let now = Utc::now();
        let mut alert = Alert {
            id: "a1".to_string(),
            timestamp: now,
            location: "Here".to_string(),
            description: "Something".to_string(),
            severity: Severity::Low,
        };
        assert_eq!(alert.age_label(now), "just now");
        alert.timestamp = now - chrono::Duration::minutes(1);
        assert_eq!(alert.age_label(now), "1 minute ago");
        alert.timestamp = now - chrono::Duration::hours(5);
        assert_eq!(alert.age_label(now), "5 hours ago");
        alert.timestamp = now - chrono::Duration::hours(48);
        assert_eq!(alert.age_label(now), "2 days ago");
    }

    #[test]
    fn test_risk_colors() {
        assert_eq!(RiskLevel::new(1).unwrap().color(), "#00FF00");
        assert_eq!(RiskLevel::new(5).unwrap().color(), "#FF0000");
        assert_eq!(RiskLevel::new(4).unwrap().to_string(), "4/5");
    }
}
