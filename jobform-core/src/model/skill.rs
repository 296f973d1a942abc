//! Additional-skills catalog

use serde::Deserialize;
use serde::Serialize;

/// A skill from the fixed additional-skills catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
}

impl Skill {
    /// The full catalog, in checkbox display order.
    pub const CATALOG: [Skill; 3] = [Skill::JavaScript, Skill::Css, Skill::Python];

    /// Display label shown beside the checkbox.
    pub fn label(&self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
