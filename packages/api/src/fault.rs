//! Fault injection seam for the mock backend.
//!
//! The default policy never fails. [`RandomFaults`] is kept for exercising the
//! error states of the views before a real backend exists.

use std::fmt;

use rand::Rng;

/// Identifies a backend operation, for fault decisions and log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchAlerts,
    FetchTips,
    FetchRiskAreas,
    ReportIncident,
    SignIn,
    SignUp,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::FetchAlerts => "fetch_alerts",
            Operation::FetchTips => "fetch_tips",
            Operation::FetchRiskAreas => "fetch_risk_areas",
            Operation::ReportIncident => "report_incident",
            Operation::SignIn => "sign_in",
            Operation::SignUp => "sign_up",
        })
    }
}

/// Decides whether a simulated call should fail.
pub trait FaultPolicy {
    fn should_fail(&self, operation: Operation) -> bool;
}

/// Never injects a failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverFail;

impl FaultPolicy for NeverFail {
    fn should_fail(&self, _operation: Operation) -> bool {
        false
    }
}

/// Fails each call independently with probability `rate`.
#[derive(Clone, Copy, Debug)]
pub struct RandomFaults {
    rate: f64,
}

impl RandomFaults {
    /// `rate` is clamped into `0..=1`.
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl FaultPolicy for RandomFaults {
    fn should_fail(&self, _operation: Operation) -> bool {
        self.rate > 0.0 && rand::thread_rng().gen_bool(self.rate)
    }
}

/// Fails only the listed operations, every time.
#[derive(Clone, Debug, Default)]
pub struct FailOperations(pub Vec<Operation>);

impl FaultPolicy for FailOperations {
    fn should_fail(&self, operation: Operation) -> bool {
        self.0.contains(&operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_faults_extremes() {
        let never = RandomFaults::new(0.0);
        let always = RandomFaults::new(1.0);
        for _ in 0..100 {
            assert!(!never.should_fail(Operation::FetchAlerts));
            assert!(always.should_fail(Operation::FetchAlerts));
        }
    }

    #[test]
    fn test_random_faults_clamped() {
        assert_eq!(RandomFaults::new(3.0).rate(), 1.0);
        assert_eq!(RandomFaults::new(-1.0).rate(), 0.0);
        assert_eq!(RandomFaults::new(f64::NAN).rate(), 0.0);
    }

    #[test]
    fn test_fail_operations_is_selective() {
        let policy = FailOperations(vec![Operation::FetchTips]);
        assert!(policy.should_fail(Operation::FetchTips));
        assert!(!policy.should_fail(Operation::FetchAlerts));
        assert!(!NeverFail.should_fail(Operation::ReportIncident));
    }
}
