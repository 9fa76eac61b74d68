//!
//! Error type of the crate
//!
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    ///
    /// configuration index out of `[0, max]`
    ///
    #[error("configuration index {index} is out of range [0, {max}]")]
    InvalidConfig { index: usize, max: usize },
    ///
    /// parameter value is not in `[0, 1]`
    ///
    #[error("parameter `{name}` = {value} is not a probability")]
    InvalidProbability { name: &'static str, value: f64 },
    ///
    /// initial model must be strictly inside `(0, 1)` on every parameter
    ///
    #[error("initial model must have all probabilities in (0, 1), got {0:?}")]
    InvalidInitialModel([f64; 5]),
    #[error("dataset has no observations")]
    EmptyDataset,
    ///
    /// one of the classes received zero expected mass in the M-step
    ///
    #[error("degenerate model: expected mass of Z=0 is {sum_z0} out of {total} observations")]
    DegenerateModel { sum_z0: f64, total: f64 },
    ///
    /// an observed `(W, H)` pair has probability zero under the current model
    ///
    #[error("observed configuration {wh:02b} has zero probability under the current model")]
    ZeroProbabilityObservation { wh: usize },
    #[error("line {line}: cannot parse record `{content}`")]
    Parse { line: usize, content: String },
    #[error("cannot parse model `{0}`: expected five comma-separated probabilities")]
    ParseModel(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
