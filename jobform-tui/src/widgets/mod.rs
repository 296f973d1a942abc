//! Form widget state
//!
//! Plain mutable state structs for the three input kinds the form uses.
//! Each widget carries its own inline error slot; editing a widget clears
//! its error, and a failed submit repopulates them from the error map.

mod checkbox;
mod input;
mod select;

pub use checkbox::CheckboxGroup;
pub use input::TextInput;
pub use select::Select;
