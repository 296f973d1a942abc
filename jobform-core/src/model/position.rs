//! Job position options

use serde::Deserialize;
use serde::Serialize;

/// The position an applicant is applying for.
///
/// The form offers exactly these three options; "no selection yet" is
/// `Option::<Position>::None` on the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    /// Every selectable position, in display order.
    pub const ALL: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    /// Display label shown in the position select.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Parse a display label back into a position.
    ///
    /// Returns `None` for the empty string (no selection) and for any
    /// unknown label.
    pub fn from_label(label: &str) -> Option<Position> {
        Position::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Whether this position requires the relevant-experience field.
    pub fn requires_experience(&self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
