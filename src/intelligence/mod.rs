pub mod classification;
pub mod dictation;
pub mod education;
pub mod engine;
pub mod helpers;
pub mod interactions;
pub mod messages;
pub mod recommendations;
pub mod reference;
pub mod scoring;
pub mod status;
pub mod symptoms;
pub mod types;
pub mod validation;

pub use engine::{assess, assess_batch, assess_value, BatchReport};
pub use reference::ReferenceData;
pub use types::{AssessmentError, ReferenceError, ValidationError};
