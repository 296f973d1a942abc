//! Form state holder and derived form behavior

mod state;
mod summary;
mod visibility;

pub use state::*;
pub use summary::*;
pub use visibility::*;
