//! Rule sets for incoming payloads.
//!
//! A rule set is a pure function from a DTO to the failures it contains. Rules
//! are plain functions returning `Option<FieldError>`, gathered with
//! [`collect`].

use emporium_types::errors::ValidationErrors;

mod rule_sets;
mod rules;

pub use rule_sets::*;
pub use rules::*;

pub trait Validate {
    fn validate(&self) -> ValidationErrors;
}
