///
/// probability calculation in log space
///
/// `+` is logaddexp, used to marginalize `Z` out of the joint.
///
use crate::common::Count;
use approx::AbsDiffEq;

///
/// Wrapper of f64 that represents probability `0 <= p <= 1`
///
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prob(f64);

impl Prob {
    ///
    ///
    pub fn from_prob(value: f64) -> Prob {
        Prob(value.ln())
    }
    ///
    ///
    pub fn from_log_prob(log_value: f64) -> Prob {
        Prob(log_value)
    }
    ///
    /// Get the probability (in `[0, 1]`)
    pub fn to_value(self) -> f64 {
        self.0.exp()
    }
    ///
    /// Get the log probability
    pub fn to_log_value(self) -> f64 {
        self.0
    }
    ///
    /// Is `p == 0` or not? (log p = -inf)
    ///
    pub fn is_zero(self) -> bool {
        self.0.is_infinite() && self.0.is_sign_negative()
    }
    ///
    /// Is `p == 1`? (log p = 0)
    ///
    pub fn is_one(self) -> bool {
        self.0 == 0.0
    }
    ///
    /// prob=0.0
    ///
    pub fn zero() -> Prob {
        Prob(f64::NEG_INFINITY)
    }
    ///
    /// prob=1.0
    ///
    pub fn one() -> Prob {
        Prob(0.0)
    }
    ///
    /// `p^n`, the probability of `n` independent occurrences.
    ///
    /// `p^0 = 1` even if `p = 0`, so configurations that never occur
    /// do not contribute to a likelihood.
    ///
    pub fn powi(self, n: Count) -> Prob {
        if n == 0 {
            Prob::one()
        } else {
            Prob(self.0 * n as f64)
        }
    }
}

/// Addition of two probabilities `px + py` in log space
///
/// If `px > py`:
///
/// ```text
/// log(exp(x) + exp(y))
///  = log(exp(x) (1 + exp(y-x)))
///  = log(exp(x)) + log(1 + exp(y-x))
///  = x + log(1 + exp(y-x))
/// ```
impl std::ops::Add for Prob {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let x = self.0;
        let y = other.0;
        let (x, y) = if x >= y { (x, y) } else { (y, x) };
        if y == f64::NEG_INFINITY {
            // x + 0 = x
            Prob(x)
        } else if x == y {
            // x + x = 2x
            Prob(x + 2f64.ln())
        } else {
            Prob(x + (y - x).exp().ln_1p())
        }
    }
}

/// Multiplication of two probabilities `px * py` in log space
///
/// ```text
/// log(px * py) = log(px) + log(py)
/// ```
impl std::ops::Mul for Prob {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Prob(self.0 + other.0)
    }
}

/// Division of two probabilities `px / py` in log space
///
/// ```text
/// log(px / py) = log(px) - log(py)
/// ```
impl std::ops::Div for Prob {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Prob(self.0 - other.0)
    }
}

// sum/prod
impl std::iter::Sum for Prob {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Prob::zero(), |a, b| a + b)
    }
}
impl std::iter::Product for Prob {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Prob::one(), |a, b| a * b)
    }
}

/// for approx `assert_abs_diff_eq`
impl AbsDiffEq for Prob {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(p: f64) -> Prob {
        Prob::from_prob(p)
    }

    #[test]
    fn prob_add_mul() {
        assert_eq!(p(0.0) + p(1.0), p(1.0));
        assert_eq!(p(0.0) * p(1.0), p(0.0));
        assert_abs_diff_eq!((p(0.3) + p(0.3)).0, p(0.6).0);
        assert_abs_diff_eq!((p(0.3) * p(0.3)).0, p(0.09).0);
        assert_abs_diff_eq!((p(0.5) + p(0.00001)).0, p(0.50001).0);
        assert_abs_diff_eq!((p(0.5) / p(0.25)).0, p(2.0).0);
        assert!((p(0.0) + p(0.0)).is_zero());
        assert!((p(0.0) / p(0.0)).to_value().is_nan());
    }
    #[test]
    fn prob_sum_prod() {
        // sum/prod of zero element vec
        let sum: Prob = std::iter::empty().sum();
        let product: Prob = std::iter::empty().product();
        assert_eq!(sum, p(0.0));
        assert_eq!(product, p(1.0));

        let sum: Prob = vec![p(0.1), p(0.1), p(0.1)].into_iter().sum();
        let product: Prob = vec![p(0.1), p(0.1), p(0.1)].into_iter().product();
        assert_relative_eq!(sum.to_value(), 0.3);
        assert_relative_eq!(product.to_value(), 0.001);
    }
    #[test]
    fn prob_powi() {
        assert_relative_eq!(p(0.5).powi(3).to_value(), 0.125);
        assert!(p(0.0).powi(0).is_one());
        assert!(p(0.0).powi(2).is_zero());
        assert!(p(0.3).powi(0).is_one());
        assert_eq!(Prob::from_log_prob(-1.5).to_log_value(), -1.5);
    }
}
