//! In-memory [`SafetyBackend`] with simulated latency.

use std::sync::Arc;
use std::time::Duration;

use store::{Alert, ApiConfig, RiskArea, SeedStore, Tip, User};

use crate::delay;
use crate::fault::{FaultPolicy, NeverFail, Operation, RandomFaults};
use crate::{auth, ApiError, Credentials, ReportPayload, ReportResponse, SafetyBackend, SignupRequest};

/// Message returned after a successful sign-up.
pub const SIGNUP_ACCEPTED_MESSAGE: &str = "Account created! Please sign in.";

/// Backend over static seed collections.
///
/// Cloning is cheap: the seed data and the fault policy are shared. Every
/// fetch hands out a fresh `Vec`, so callers can never modify what another
/// caller will see.
#[derive(Clone)]
pub struct MockBackend {
    seed: Arc<SeedStore>,
    config: ApiConfig,
    faults: Arc<dyn FaultPolicy>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(SeedStore::default(), ApiConfig::default())
    }
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MockBackend {
    /// A backend over `seed`. A non-zero `config.fault_rate` installs
    /// [`RandomFaults`]; otherwise no call ever fails.
    pub fn new(seed: SeedStore, config: ApiConfig) -> Self {
        let faults: Arc<dyn FaultPolicy> = if config.fault_rate > 0.0 {
            Arc::new(RandomFaults::new(config.fault_rate))
        } else {
            Arc::new(NeverFail)
        };
        Self {
            seed: Arc::new(seed),
            config,
            faults,
        }
    }

    /// Builder method to replace the fault policy.
    pub fn with_faults(mut self, faults: impl FaultPolicy + 'static) -> Self {
        self.faults = Arc::new(faults);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn simulate(&self, operation: Operation, latency_ms: u64) -> Result<(), ApiError> {
        delay::sleep(Duration::from_millis(latency_ms)).await;
        if self.faults.should_fail(operation) {
            tracing::warn!(%operation, "injected backend fault");
            return Err(ApiError::Unavailable(format!(
                "{operation} failed, please try again later"
            )));
        }
        Ok(())
    }
}

impl SafetyBackend for MockBackend {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        tracing::info!("fetching alerts");
        self.simulate(Operation::FetchAlerts, self.config.alerts_latency_ms)
            .await?;
        let alerts = self.seed.alerts().to_vec();
        tracing::debug!(count = alerts.len(), "alerts fetched");
        Ok(alerts)
    }

    async fn fetch_tips(&self) -> Result<Vec<Tip>, ApiError> {
        tracing::info!("fetching tips");
        self.simulate(Operation::FetchTips, self.config.tips_latency_ms)
            .await?;
        let tips = self.seed.tips().to_vec();
        tracing::debug!(count = tips.len(), "tips fetched");
        Ok(tips)
    }

    async fn fetch_risk_areas(&self) -> Result<Vec<RiskArea>, ApiError> {
        tracing::info!("fetching risk areas");
        self.simulate(Operation::FetchRiskAreas, self.config.risk_areas_latency_ms)
            .await?;
        let areas = self.seed.risk_areas().to_vec();
        tracing::debug!(count = areas.len(), "risk areas fetched");
        Ok(areas)
    }

    async fn report_incident(&self, payload: ReportPayload) -> Result<ReportResponse, ApiError> {
        tracing::info!(severity = %payload.severity, location = %payload.location, "reporting incident");
        payload.validate()?;
        self.simulate(Operation::ReportIncident, self.config.report_latency_ms)
            .await?;
        Ok(ReportResponse::accepted())
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<User, ApiError> {
        tracing::info!(email = %credentials.email, "signing in");
        self.simulate(Operation::SignIn, self.config.auth_latency_ms)
            .await?;
        auth::authenticate(&credentials).ok_or(ApiError::InvalidCredentials)
    }

    async fn sign_up(&self, request: SignupRequest) -> Result<String, ApiError> {
        tracing::info!(email = %request.email, "signing up");
        request.validate()?;
        self.simulate(Operation::SignUp, self.config.auth_latency_ms)
            .await?;
        Ok(SIGNUP_ACCEPTED_MESSAGE.to_string())
    }
}
