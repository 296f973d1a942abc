//! Job application form core
//!
//! Typed draft record, pure field validation, and the form state holder for
//! a single job-application form. No I/O lives here; the terminal front end
//! is a separate crate.

pub mod error;
pub mod form;
pub mod model;
pub mod validation;

pub use error::{ErrorKind, FieldError};
pub use form::{FormState, SubmitOutcome, is_visible, summary, visible_fields};
pub use model::{ApplicationDraft, Field, Position, Skill};
pub use validation::{ErrorMap, validate};
