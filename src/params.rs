//!
//! ProbabilityModel, the five Bernoulli parameters of the naive-Bayes model
//!
//! ```text
//!     Z
//!    / \
//!   W   H
//! ```
//!
//! `W` and `H` are conditionally independent given `Z`, so the joint is
//! `P(z, w, h) = P(z) P(w|z) P(h|z)`.
//!
use crate::common::{Freq, DEFAULT_INITIAL_MODEL};
use crate::config::{FullConfig, ObservedConfig};
use crate::error::{Error, Result};
use crate::prob::Prob;
use crate::stats::{ClassSums, SufficientStats};
use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

///
/// Immutable snapshot of the model parameters
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityModel {
    /// `P(Z=0)`
    p_male: f64,
    /// `P(W=0|Z=0)`
    p_weight_given_male: f64,
    /// `P(W=0|Z=1)`
    p_weight_given_female: f64,
    /// `P(H=0|Z=0)`
    p_height_given_male: f64,
    /// `P(H=0|Z=1)`
    p_height_given_female: f64,
}

const NAMES: [&str; 5] = [
    "p_male",
    "p_weight_given_male",
    "p_weight_given_female",
    "p_height_given_male",
    "p_height_given_female",
];

/// `P(X=x)` of a binary variable with `P(X=0) = p0`
fn bernoulli(p0: f64, x: u8) -> f64 {
    if x == 0 {
        p0
    } else {
        1.0 - p0
    }
}

impl ProbabilityModel {
    ///
    /// Create a model from the five probabilities.
    ///
    /// Every value must be finite and in `[0, 1]`.
    ///
    pub fn new(
        p_male: f64,
        p_weight_given_male: f64,
        p_weight_given_female: f64,
        p_height_given_male: f64,
        p_height_given_female: f64,
    ) -> Result<ProbabilityModel> {
        ProbabilityModel::from_array([
            p_male,
            p_weight_given_male,
            p_weight_given_female,
            p_height_given_male,
            p_height_given_female,
        ])
    }
    ///
    /// Create a model from an array in the order of `as_array`.
    ///
    pub fn from_array(values: [f64; 5]) -> Result<ProbabilityModel> {
        for (&name, &value) in NAMES.iter().zip(values.iter()) {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidProbability { name, value });
            }
        }
        Ok(ProbabilityModel {
            p_male: values[0],
            p_weight_given_male: values[1],
            p_weight_given_female: values[2],
            p_height_given_male: values[3],
            p_height_given_female: values[4],
        })
    }
    ///
    /// The usual starting guess `(0.7, 0.8, 0.4, 0.7, 0.3)`
    ///
    pub fn default_initial() -> ProbabilityModel {
        let [m, wm, wf, hm, hf] = DEFAULT_INITIAL_MODEL;
        ProbabilityModel {
            p_male: m,
            p_weight_given_male: wm,
            p_weight_given_female: wf,
            p_height_given_male: hm,
            p_height_given_female: hf,
        }
    }
    ///
    /// `[P(Z=0), P(W=0|Z=0), P(W=0|Z=1), P(H=0|Z=0), P(H=0|Z=1)]`
    ///
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.p_male,
            self.p_weight_given_male,
            self.p_weight_given_female,
            self.p_height_given_male,
            self.p_height_given_female,
        ]
    }
    pub fn p_male(&self) -> f64 {
        self.p_male
    }
    pub fn p_weight_given_male(&self) -> f64 {
        self.p_weight_given_male
    }
    pub fn p_weight_given_female(&self) -> f64 {
        self.p_weight_given_female
    }
    pub fn p_height_given_male(&self) -> f64 {
        self.p_height_given_male
    }
    pub fn p_height_given_female(&self) -> f64 {
        self.p_height_given_female
    }
    ///
    /// All five probabilities are strictly inside `(0, 1)`.
    ///
    pub fn is_interior(&self) -> bool {
        self.as_array().iter().all(|&v| v > 0.0 && v < 1.0)
    }
    /// `P(Z=z)`
    pub fn p_gender(&self, z: u8) -> f64 {
        bernoulli(self.p_male, z)
    }
    /// `P(W=w|Z=z)`
    pub fn p_weight(&self, w: u8, z: u8) -> f64 {
        if z == 0 {
            bernoulli(self.p_weight_given_male, w)
        } else {
            bernoulli(self.p_weight_given_female, w)
        }
    }
    /// `P(H=h|Z=z)`
    pub fn p_height(&self, h: u8, z: u8) -> f64 {
        if z == 0 {
            bernoulli(self.p_height_given_male, h)
        } else {
            bernoulli(self.p_height_given_female, h)
        }
    }
    /// `P(z, w, h)` in linear space
    fn joint(&self, config: FullConfig) -> f64 {
        let z = config.z();
        self.p_weight(config.w(), z) * self.p_height(config.h(), z) * self.p_gender(z)
    }
    ///
    /// `P(Z=0 | W=w, H=h)` by Bayes' rule.
    ///
    /// Returns NaN if `P(W=w, H=h) = 0`; check `likelihood_incomplete` first
    /// when the model may be degenerate.
    ///
    pub fn posterior_male(&self, wh: ObservedConfig) -> f64 {
        (self.likelihood_complete(wh.with_z(0)) / self.likelihood_incomplete(wh)).to_value()
    }
    ///
    /// `P(Z=1 | W=w, H=h)`
    ///
    pub fn posterior_female(&self, wh: ObservedConfig) -> f64 {
        (self.likelihood_complete(wh.with_z(1)) / self.likelihood_incomplete(wh)).to_value()
    }
    ///
    /// Joint probability `P(Z=z, W=w, H=h)` of a fully observed configuration
    ///
    pub fn likelihood_complete(&self, config: FullConfig) -> Prob {
        Prob::from_prob(self.joint(config))
    }
    ///
    /// Marginal probability `P(W=w, H=h) = sum_z P(z, w, h)`
    ///
    pub fn likelihood_incomplete(&self, wh: ObservedConfig) -> Prob {
        (0..=1).map(|z| self.likelihood_complete(wh.with_z(z))).sum()
    }
    ///
    /// `posterior_male` of an integer code `wh`, failing outside `[0, 3]`
    ///
    pub fn posterior_male_of(&self, index: usize) -> Result<f64> {
        Ok(self.posterior_male(ObservedConfig::try_from(index)?))
    }
    ///
    /// `likelihood_complete` of an integer code `zwh`, failing outside `[0, 7]`
    ///
    pub fn likelihood_complete_of(&self, index: usize) -> Result<Prob> {
        Ok(self.likelihood_complete(FullConfig::try_from(index)?))
    }
    ///
    /// `likelihood_incomplete` of an integer code `wh`, failing outside `[0, 3]`
    ///
    pub fn likelihood_incomplete_of(&self, index: usize) -> Result<Prob> {
        Ok(self.likelihood_incomplete(ObservedConfig::try_from(index)?))
    }
    ///
    /// Observed-data likelihood of the whole dataset
    ///
    /// ```text
    /// prod_zwh P(z,w,h)^hard[zwh] * prod_wh P(w,h)^missing[wh]
    /// ```
    ///
    /// Use `to_log_value()` for the log-likelihood.
    ///
    pub fn log_likelihood(&self, stats: &SufficientStats) -> Prob {
        let hard: Prob = FullConfig::all()
            .map(|c| self.likelihood_complete(c).powi(stats.hard(c)))
            .product();
        let missing: Prob = ObservedConfig::all()
            .map(|wh| self.likelihood_incomplete(wh).powi(stats.missing(wh)))
            .product();
        hard * missing
    }
    ///
    /// M-step: closed-form maximum likelihood estimate from the completed counts.
    ///
    /// Fails with `DegenerateModel` if either class has no mass.
    ///
    pub fn reestimate(sums: &ClassSums) -> Result<ProbabilityModel> {
        let sum_z0 = sums.sum_z0;
        let sum_z1 = sums.sum_z1();
        if !(sum_z0 > 0.0 && sum_z1 > 0.0) {
            return Err(Error::DegenerateModel {
                sum_z0,
                total: sums.total,
            });
        }
        // subset sums can exceed their superset by rounding
        let ratio = |x: Freq, y: Freq| (x / y).min(1.0);
        ProbabilityModel::new(
            ratio(sum_z0, sums.total),
            ratio(sums.sum_z0_w0, sum_z0),
            ratio(sums.sum_z1_w0, sum_z1),
            ratio(sums.sum_z0_h0, sum_z0),
            ratio(sums.sum_z1_h0, sum_z1),
        )
    }
    ///
    /// Largest absolute difference among the five parameters
    ///
    pub fn max_abs_diff(&self, other: &ProbabilityModel) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
    ///
    /// Every parameter differs from `other` by less than `tolerance`.
    ///
    pub fn is_close_to(&self, other: &ProbabilityModel, tolerance: f64) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| (a - b).abs() < tolerance)
    }
}

impl Default for ProbabilityModel {
    fn default() -> Self {
        ProbabilityModel::default_initial()
    }
}

///
/// Parse `"m,wm,wf,hm,hf"`
///
impl std::str::FromStr for ProbabilityModel {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let values: Vec<f64> = s
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| Error::ParseModel(s.to_string()))?;
        if values.len() != 5 {
            return Err(Error::ParseModel(s.to_string()));
        }
        ProbabilityModel::from_array([values[0], values[1], values[2], values[3], values[4]])
    }
}

/// for approx `assert_abs_diff_eq`
impl AbsDiffEq for ProbabilityModel {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| f64::abs_diff_eq(a, b, epsilon))
    }
}

impl std::fmt::Display for ProbabilityModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Z = 0: {:.3}", self.p_male)?;
        writeln!(f, "Z = 0, W = 0: {:.3}", self.p_weight_given_male)?;
        writeln!(f, "Z = 1, W = 0: {:.3}", self.p_weight_given_female)?;
        writeln!(f, "Z = 0, H = 0: {:.3}", self.p_height_given_male)?;
        writeln!(f, "Z = 1, H = 0: {:.3}", self.p_height_given_female)
    }
}
