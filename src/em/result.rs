//!
//! Log information of EM iterations
//!
use super::EmConfig;
use crate::params::ProbabilityModel;
use derive_new::new;
use serde::{Deserialize, Serialize};

///
/// State of an EM run
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Iterating,
    Converged,
}

///
/// Log information store of each iteration
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct IterationLog {
    /// 1-origin iteration number
    pub iteration: usize,
    /// estimate produced by the M-step of this iteration
    pub model: ProbabilityModel,
    /// observed-data log-likelihood of `model`
    pub log_likelihood: f64,
}

impl std::fmt::Display for IterationLog {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Iteration {}", self.iteration)?;
        writeln!(f, "Likelihood: {:.3}", self.log_likelihood)
    }
}

///
/// Result of a whole EM run
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EMResult {
    pub config: EmConfig,
    pub initial: ProbabilityModel,
    pub initial_log_likelihood: f64,
    pub logs: Vec<IterationLog>,
    pub status: Status,
    /// converged estimate, or the last one if the iteration cap was hit
    pub model: ProbabilityModel,
}

impl EMResult {
    pub fn n_iterations(&self) -> usize {
        self.logs.len()
    }
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
    pub fn final_model(&self) -> &ProbabilityModel {
        &self.model
    }
    pub fn final_log_likelihood(&self) -> f64 {
        self.logs
            .last()
            .map_or(self.initial_log_likelihood, |log| log.log_likelihood)
    }
    /// log-likelihood of the initial model followed by that of each iteration
    pub fn log_likelihoods(&self) -> Vec<f64> {
        std::iter::once(self.initial_log_likelihood)
            .chain(self.logs.iter().map(|log| log.log_likelihood))
            .collect()
    }
}
