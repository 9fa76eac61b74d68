//!
//! Convergence criteria of EM
//!
use crate::common::DEFAULT_DELTA;
use crate::params::ProbabilityModel;
use serde::{Deserialize, Serialize};

///
/// When to stop iterating
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Criterion {
    ///
    /// every parameter changed by less than `delta`
    ///
    Params { delta: f64 },
    ///
    /// observed-data log-likelihood changed by less than `delta`
    ///
    LogLikelihood { delta: f64 },
}

impl Criterion {
    pub fn delta(&self) -> f64 {
        match self {
            Criterion::Params { delta } | Criterion::LogLikelihood { delta } => *delta,
        }
    }
    ///
    /// Test a pair of successive estimates and their log-likelihoods.
    ///
    pub fn is_converged(
        &self,
        old: &ProbabilityModel,
        new: &ProbabilityModel,
        old_log_likelihood: f64,
        new_log_likelihood: f64,
    ) -> bool {
        match self {
            Criterion::Params { delta } => new.is_close_to(old, *delta),
            Criterion::LogLikelihood { delta } => {
                (new_log_likelihood - old_log_likelihood).abs() < *delta
            }
        }
    }
}

impl Default for Criterion {
    fn default() -> Self {
        Criterion::Params {
            delta: DEFAULT_DELTA,
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Criterion::Params { delta } => write!(f, "params(delta={})", delta),
            Criterion::LogLikelihood { delta } => write!(f, "loglik(delta={})", delta),
        }
    }
}
