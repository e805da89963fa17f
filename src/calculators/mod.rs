//! Offline clinical risk calculators.
//!
//! Each calculator is a pure function over a typed input; the HTTP layer
//! decodes the body through [`RiskCalculator::from_value`] and serializes
//! the output unchanged.

pub mod bmi;
pub mod cardiovascular;
pub mod chads_vasc;
pub mod news2;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use bmi::Bmi;
pub use cardiovascular::CardiovascularRisk;
pub use chads_vasc::ChadsVasc;
pub use news2::News2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Malformed calculator input: {0}")]
    Malformed(String),

    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), CalculatorError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CalculatorError::NonPositive { field, value })
    }
}

pub(crate) fn require_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CalculatorError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CalculatorError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// A named scoring rule with typed input and output.
pub trait RiskCalculator {
    const NAME: &'static str;
    type Input: DeserializeOwned;
    type Output: Serialize;

    fn calculate(input: &Self::Input) -> Result<Self::Output, CalculatorError>;

    /// Decode an untyped body and run the calculator.
    fn from_value(body: serde_json::Value) -> Result<Self::Output, CalculatorError> {
        let input: Self::Input = serde_json::from_value(body)
            .map_err(|e| CalculatorError::Malformed(e.to_string()))?;
        let output = Self::calculate(&input)?;
        tracing::debug!(calculator = Self::NAME, "Calculator evaluated");
        Ok(output)
    }
}
