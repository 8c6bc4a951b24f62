#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod std_impl;

pub use error::*;
pub mod extras;
pub mod rules;

pub use rules::{FieldRules, FieldValue, Rule};

pub trait Validate {
  fn validate(&self) -> Result<(), ValidateError>;
}

/// Length of a value as seen by the user. Strings are measured
/// in Unicode scalar values rather than bytes, and presentation
/// selectors do not count.
pub trait HasLength {
  fn length(&self) -> usize;
}
