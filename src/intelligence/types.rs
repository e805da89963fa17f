use thiserror::Error;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Input rejected before any scoring runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Missing field, wrong JSON type, or unknown enum value.
    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    #[error("Batch of {size} records exceeds the limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Negative { .. } => "negative",
            Self::BatchTooLarge { .. } => "batch_too_large",
        }
    }
}

// ---------------------------------------------------------------------------
// AssessmentError
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No symptoms provided for analysis")]
    NoInput,
}

// ---------------------------------------------------------------------------
// ReferenceError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Reference data parse failed ({0}): {1}")]
    Parse(&'static str, String),

    #[error("Reference data incomplete ({0}): missing entry for {1}")]
    MissingEntry(&'static str, String),
}
