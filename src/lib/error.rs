use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of an index calculation.
///
/// `OutOfRange` covers every violation of a documented input domain, at
/// the interface or inside a model. `Internal` marks a computation that
/// produced a non-finite value from accepted inputs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcError {
    #[error("input outside the documented model domain")]
    OutOfRange,
    #[error("internal computation failure")]
    Internal,
}

impl CalcError {
    /// Legacy sentinel value carried by flat numeric exports, where an
    /// error has to travel in the same column as the index itself.
    pub fn sentinel(&self) -> f64 {
        match self {
            CalcError::OutOfRange => -98.0,
            CalcError::Internal => -97.0,
        }
    }
}

pub type CalcResult = Result<f64, CalcError>;
