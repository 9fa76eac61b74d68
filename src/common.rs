//!
//! globally-available types and constants
//!

/// integer count of records (= occurrence in the dataset)
pub type Count = usize;

/// fractional count of records, used in expected counts
pub type Freq = f64;

/// Number of full `(Z, W, H)` configurations
pub const N_FULL_CONFIGS: usize = 8;

/// Number of observed `(W, H)` configurations
pub const N_OBSERVED_CONFIGS: usize = 4;

/// Default threshold of the convergence test
pub const DEFAULT_DELTA: f64 = 0.001;

/// Default upper bound of EM iterations
pub const DEFAULT_MAX_ITER: usize = 10_000;

/// Leading character of a record whose `Z` is unobserved
pub const MISSING_MARKER: char = '-';

/// Default initial guess
/// `(P(Z=0), P(W=0|Z=0), P(W=0|Z=1), P(H=0|Z=0), P(H=0|Z=1))`
pub const DEFAULT_INITIAL_MODEL: [f64; 5] = [0.7, 0.8, 0.4, 0.7, 0.3];
