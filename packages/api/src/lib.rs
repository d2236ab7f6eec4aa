//! # API crate: the boundary between the views and the mock backend
//!
//! Every piece of data the application shows comes through [`SafetyBackend`].
//! Today the only implementation is [`MockBackend`], which serves the seed
//! collections from the `store` crate after a fixed per-operation delay. A real
//! HTTP client can implement the same trait without touching the views.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | The single demo account accepted by `sign_in` |
//! | [`delay`] | Non-blocking sleep (`gloo-timers` on WASM, `tokio` natively) |
//! | [`fault`] | [`FaultPolicy`] seam for injecting failures; dormant by default |
//! | [`models`] | Request/response shapes: reports, credentials, sign-up |
//!
//! ## Operations
//!
//! | Method | Default latency | Result |
//! |--------|-----------------|--------|
//! | `fetch_alerts` | 600 ms | copy of the seed alerts |
//! | `fetch_tips` | 450 ms | copy of the seed tips |
//! | `fetch_risk_areas` | 700 ms | copy of the seed risk areas |
//! | `report_incident` | 600 ms | `{ success: true, message: "Incident reported successfully!" }` |
//! | `sign_in` | 500 ms | the demo [`store::User`] or [`ApiError::InvalidCredentials`] |
//! | `sign_up` | 500 ms | confirmation message |

use std::future::Future;

pub mod auth;
pub mod delay;
mod error;
pub mod fault;
mod mock;
pub mod models;

pub use error::ApiError;
pub use fault::{FailOperations, FaultPolicy, NeverFail, Operation, RandomFaults};
pub use mock::{MockBackend, SIGNUP_ACCEPTED_MESSAGE};
pub use models::{Credentials, ReportPayload, ReportResponse, SignupRequest, REPORT_ACCEPTED_MESSAGE};

pub use store::{Alert, RiskArea, Severity, Tip, TipCategory, User};

/// Async interface to the safety backend.
pub trait SafetyBackend {
    fn fetch_alerts(&self) -> impl Future<Output = Result<Vec<Alert>, ApiError>>;

    fn fetch_tips(&self) -> impl Future<Output = Result<Vec<Tip>, ApiError>>;

    fn fetch_risk_areas(&self) -> impl Future<Output = Result<Vec<RiskArea>, ApiError>>;

    fn report_incident(
        &self,
        payload: ReportPayload,
    ) -> impl Future<Output = Result<ReportResponse, ApiError>>;

    fn sign_in(&self, credentials: Credentials) -> impl Future<Output = Result<User, ApiError>>;

    fn sign_up(&self, request: SignupRequest) -> impl Future<Output = Result<String, ApiError>>;
}
