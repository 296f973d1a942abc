//! Typed form models

mod draft;
mod field;
mod position;
mod skill;

pub use draft::*;
pub use field::*;
pub use position::*;
pub use skill::*;
