//! Request and response shapes for the backend operations.

mod account;
mod report;

pub use account::{Credentials, SignupRequest};
pub use report::{ReportPayload, ReportResponse, REPORT_ACCEPTED_MESSAGE};
