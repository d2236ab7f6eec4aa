//! Static seed collections backing the mock backend.
//!
//! The collections are built once and shared read-only; callers only ever get
//! clones out of a [`SeedStore`].

use chrono::{DateTime, Duration, Utc};

use crate::models::{Alert, RiskArea, RiskLevel, Severity, Tip, TipCategory};

/// Read-only seed data for alerts, tips and risk areas.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedStore {
    alerts: Vec<Alert>,
    tips: Vec<Tip>,
    risk_areas: Vec<RiskArea>,
}

impl Default for SeedStore {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl SeedStore {
    /// Build the seed data, timestamping alerts relative to `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        let store = Self {
            alerts: seed_alerts(now),
            tips: seed_tips(),
            risk_areas: seed_risk_areas(),
        };
        tracing::debug!(
            alerts = store.alerts.len(),
            tips = store.tips.len(),
            risk_areas = store.risk_areas.len(),
            "seed store built"
        );
        store
    }

    /// A store holding exactly the given collections.
    pub fn from_parts(alerts: Vec<Alert>, tips: Vec<Tip>, risk_areas: Vec<RiskArea>) -> Self {
        Self {
            alerts,
            tips,
            risk_areas,
        }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn risk_areas(&self) -> &[RiskArea] {
        &self.risk_areas
    }
}

fn alert(
    now: DateTime<Utc>,
    id: &str,
    hours_ago: i64,
    location: &str,
    description: &str,
    severity: Severity,
) -> Alert {
    Alert {
        id: id.to_string(),
        timestamp: now - Duration::hours(hours_ago),
        location: location.to_string(),
        description: description.to_string(),
        severity,
    }
}

fn seed_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        alert(
            now,
            "a1",
            1,
            "Downtown Crossing",
            "Reports of suspicious individual following pedestrians.",
            Severity::Medium,
        ),
        alert(
            now,
            "a2",
            24,
            "City Park West Entrance",
            "Area lighting malfunctioning, reduced visibility.",
            Severity::Low,
        ),
        alert(
            now,
            "a3",
            48,
            "Maple Street (100 block)",
            "Attempted mugging reported last evening.",
            Severity::High,
        ),
    ]
}

fn tip(id: &str, title: &str, details: &str, category: TipCategory) -> Tip {
    Tip {
        id: id.to_string(),
        title: title.to_string(),
        details: details.to_string(),
        category,
    }
}

fn seed_tips() -> Vec<Tip> {
    vec![
        tip(
            "t1",
            "Stay Aware of Surroundings",
            "Avoid distractions like phones or headphones, especially when walking alone.",
            TipCategory::General,
        ),
        tip(
            "t2",
            "Share Your Location",
            "Let a trusted friend or family member know your route and ETA when travelling, especially at night.",
            TipCategory::Night,
        ),
        tip(
            "t3",
            "Trust Your Instincts",
            "If a situation feels unsafe, leave immediately. Don't worry about being polite.",
            TipCategory::General,
        ),
        tip(
            "t4",
            "Sit Near the Driver",
            "On buses or trains, choose a seat near the driver or in a well-lit, populated area.",
            TipCategory::PublicTransport,
        ),
    ]
}

fn area(id: &str, latitude: f64, longitude: f64, radius: f64, level: u8, description: &str) -> RiskArea {
    RiskArea {
        id: id.to_string(),
        latitude,
        longitude,
        radius,
        risk_level: RiskLevel::new_unchecked(level),
        description: Some(description.to_string()),
    }
}

// Around Boston.
fn seed_risk_areas() -> Vec<RiskArea> {
    vec![
        area("r1", 42.3584, -71.0598, 200.0, 4, "High frequency of petty theft reports"),
        area("r2", 42.3601, -71.0589, 100.0, 2, "Poor lighting reported"),
        area("r3", 42.3550, -71.0630, 300.0, 5, "Recent assault reports"),
    ]
}
