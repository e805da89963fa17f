//! API endpoint handlers.
//!
//! Handlers decode the body, call the pure functions in `intelligence` or
//! `calculators`, and serialize the result. No handler holds state.

pub mod assessment;
pub mod calculators;
pub mod dictation;
pub mod education;
pub mod health;
pub mod interactions;
pub mod symptoms;
pub mod vitals;
