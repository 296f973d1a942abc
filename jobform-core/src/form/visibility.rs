//! Conditional field visibility

use crate::model::{Field, Position};

/// Whether a field is shown for the given position.
///
/// Visibility is derived from the position alone, never stored, so it cannot
/// drift from the validation rules. Hidden fields keep their values;
/// switching position never clears anything and never re-validates.
pub fn is_visible(field: Field, position: Option<Position>) -> bool {
    match field {
        Field::RelevantExperience => position.is_some_and(|p| p.requires_experience()),
        Field::PortfolioUrl => position == Some(Position::Designer),
        Field::ManagementExperience => position == Some(Position::Manager),
        _ => true,
    }
}

/// The visible fields for a position, in form order.
pub fn visible_fields(position: Option<Position>) -> impl Iterator<Item = Field> {
    Field::ALL.into_iter().filter(move |f| is_visible(*f, position))
}
