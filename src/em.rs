//!
//! EM estimation of the naive-Bayes model from partially observed records
//!
//! ## E-step
//!
//! Compute `P(Z=0 | w, h)` under the current model and distribute each
//! record with missing `Z` over both completions.
//!
//! ## M-step
//!
//! Closed-form re-estimation of the five parameters from hard + expected counts.
//!
//! ## Convergence
//!
//! Stop when `Criterion` holds between two successive estimates.
//!
pub mod criterion;
pub mod result;
use crate::common::{DEFAULT_MAX_ITER, N_OBSERVED_CONFIGS};
use crate::config::ObservedConfig;
use crate::error::{Error, Result};
use crate::params::ProbabilityModel;
use crate::stats::{ClassSums, ExpectedCounts, SufficientStats};
pub use criterion::Criterion;
pub use result::{EMResult, IterationLog, Status};
use serde::{Deserialize, Serialize};

///
/// Settings of an EM run
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmConfig {
    pub criterion: Criterion,
    ///
    /// safety bound on the number of iterations
    ///
    pub max_iter: usize,
}

impl EmConfig {
    pub fn with_criterion(self, criterion: Criterion) -> Self {
        EmConfig { criterion, ..self }
    }
    pub fn with_max_iter(self, max_iter: usize) -> Self {
        EmConfig { max_iter, ..self }
    }
}

impl Default for EmConfig {
    fn default() -> Self {
        EmConfig {
            criterion: Criterion::default(),
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

///
/// Output of the E-step
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EStep {
    ///
    /// `P(Z=0 | wh)` for each `wh` with missing records.
    /// `None` where no missing record has `wh`, since it is never evaluated.
    ///
    pub posterior: [Option<f64>; N_OBSERVED_CONFIGS],
    pub expected: ExpectedCounts,
}

///
/// Owner of the sufficient statistics that drives the E/M iterations
///
#[derive(Clone, Debug)]
pub struct Engine {
    stats: SufficientStats,
    config: EmConfig,
}

impl Engine {
    pub fn new(stats: SufficientStats, config: EmConfig) -> Result<Engine> {
        if stats.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(Engine { stats, config })
    }
    pub fn stats(&self) -> &SufficientStats {
        &self.stats
    }
    pub fn config(&self) -> &EmConfig {
        &self.config
    }
    ///
    /// E-step
    ///
    /// `expected` is rebuilt from zero on every call.
    ///
    pub fn e_step(&self, model: &ProbabilityModel) -> Result<EStep> {
        let mut posterior = [None; N_OBSERVED_CONFIGS];
        let mut expected = ExpectedCounts::zero();

        for wh in ObservedConfig::all() {
            let n = self.stats.missing(wh);
            if n == 0 {
                continue;
            }
            if model.likelihood_incomplete(wh).is_zero() {
                return Err(Error::ZeroProbabilityObservation { wh: wh.index() });
            }
            let p_male = model.posterior_male(wh);
            posterior[wh.index()] = Some(p_male);
            let n = n as f64;
            expected.set(wh.with_z(0), p_male * n);
            expected.set(wh.with_z(1), (1.0 - p_male) * n);
        }
        log::debug!("posterior={:?} expected={:?}", posterior, expected.as_array());

        Ok(EStep {
            posterior,
            expected,
        })
    }
    ///
    /// M-step
    ///
    pub fn m_step(&self, e_step: &EStep) -> Result<ProbabilityModel> {
        let sums = ClassSums::from_counts(&self.stats, &e_step.expected);
        ProbabilityModel::reestimate(&sums)
    }
    ///
    /// One E-step followed by one M-step
    ///
    pub fn step(&self, model: &ProbabilityModel) -> Result<ProbabilityModel> {
        let e_step = self.e_step(model)?;
        self.m_step(&e_step)
    }
    ///
    /// Observed-data log-likelihood of the dataset under `model`
    ///
    pub fn log_likelihood(&self, model: &ProbabilityModel) -> f64 {
        model.log_likelihood(&self.stats).to_log_value()
    }
    ///
    /// Run EM from `init` until convergence or `max_iter` iterations.
    ///
    pub fn run(&self, init: &ProbabilityModel) -> Result<EMResult> {
        if !init.is_interior() {
            return Err(Error::InvalidInitialModel(init.as_array()));
        }
        let initial_log_likelihood = self.log_likelihood(init);
        log::info!(
            "em start {} criterion={} log_likelihood={}",
            self.stats,
            self.config.criterion,
            initial_log_likelihood
        );

        let mut current = *init;
        let mut current_log_likelihood = initial_log_likelihood;
        let mut logs = Vec::new();

        for iteration in 1..=self.config.max_iter {
            let new = self.step(&current)?;
            let new_log_likelihood = self.log_likelihood(&new);
            log::info!(
                "#{} log_likelihood={} max_diff={} model={:?}",
                iteration,
                new_log_likelihood,
                new.max_abs_diff(&current),
                new.as_array()
            );
            logs.push(IterationLog::new(iteration, new, new_log_likelihood));

            if self.config.criterion.is_converged(
                &current,
                &new,
                current_log_likelihood,
                new_log_likelihood,
            ) {
                return Ok(EMResult {
                    config: self.config,
                    initial: *init,
                    initial_log_likelihood,
                    logs,
                    status: Status::Converged,
                    model: new,
                });
            }

            current = new;
            current_log_likelihood = new_log_likelihood;
        }

        log::warn!(
            "em did not converge in {} iterations",
            self.config.max_iter
        );
        Ok(EMResult {
            config: self.config,
            initial: *init,
            initial_log_likelihood,
            logs,
            status: Status::Iterating,
            model: current,
        })
    }
}
