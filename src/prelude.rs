//!
//! globally-available parts
//!
pub use crate::config::{FullConfig, ObservedConfig};
pub use crate::em::{Criterion, EMResult, EmConfig, Engine, Status};
pub use crate::error::{Error, Result};
pub use crate::params::ProbabilityModel;
pub use crate::prob::Prob;
pub use crate::stats::{Record, SufficientStats};
