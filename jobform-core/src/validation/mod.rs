//! Form validation
//!
//! A pure rule set over the current draft: every field is checked
//! independently, all applicable errors are collected into one [`ErrorMap`],
//! and the map is recomputed wholesale on each submit attempt.

mod result;
pub mod rules;
mod validator;

pub use result::ErrorMap;
pub use validator::validate;
