//! In-progress application record

use serde::Deserialize;
use serde::Serialize;

use super::field::Field;
use super::position::Position;
use super::skill::Skill;

/// The single mutable record of in-progress applicant input.
///
/// Every field stays text-shaped exactly as typed; numeric fields are only
/// interpreted by the validator, never stored as numbers. Fields hidden for
/// the current position keep whatever was previously entered, so switching
/// position and back restores prior input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    /// `None` means no selection yet.
    #[serde(rename = "applyingForPosition")]
    pub position: Option<Position>,
    pub relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    /// Insertion order preserved for stable checkbox rendering; no duplicates.
    pub additional_skills: Vec<Skill>,
    pub preferred_interview_time: String,
}

impl ApplicationDraft {
    /// Create an empty draft, as when the form mounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or remove a skill.
    ///
    /// Inserting an already-present skill is a no-op; removal keeps the
    /// relative order of the remaining skills.
    pub fn toggle_skill(&mut self, skill: Skill, present: bool) {
        if present {
            if !self.additional_skills.contains(&skill) {
                self.additional_skills.push(skill);
            }
        } else {
            self.additional_skills.retain(|s| *s != skill);
        }
    }

    /// Whether a skill is currently selected.
    pub fn has_skill(&self, skill: Skill) -> bool {
        self.additional_skills.contains(&skill)
    }

    /// The displayed text for a field: the raw text for text fields, the
    /// position label (or empty) for the select, and the comma-joined skill
    /// list for the checkboxes.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::Email => self.email.clone(),
            Field::PhoneNumber => self.phone_number.clone(),
            Field::ApplyingForPosition => {
                self.position.map(|p| p.label().to_string()).unwrap_or_default()
            }
            Field::RelevantExperience => self.relevant_experience.clone(),
            Field::PortfolioUrl => self.portfolio_url.clone(),
            Field::ManagementExperience => self.management_experience.clone(),
            Field::AdditionalSkills => {
                let labels: Vec<&str> = self.additional_skills.iter().map(|s| s.label()).collect();
                labels.join(", ")
            }
            Field::PreferredInterviewTime => self.preferred_interview_time.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_skill_inserts_once() {
        let mut draft = ApplicationDraft::new();
        draft.toggle_skill(Skill::Css, true);
        draft.toggle_skill(Skill::Css, true);
        assert_eq!(draft.additional_skills, vec![Skill::Css]);
    }

    #[test]
    fn test_toggle_skill_preserves_insertion_order() {
        let mut draft = ApplicationDraft::new();
        draft.toggle_skill(Skill::Python, true);
        draft.toggle_skill(Skill::JavaScript, true);
        draft.toggle_skill(Skill::Css, true);
        draft.toggle_skill(Skill::JavaScript, false);
        assert_eq!(draft.additional_skills, vec![Skill::Python, Skill::Css]);
    }

    #[test]
    fn test_toggle_skill_remove_absent_is_noop() {
        let mut draft = ApplicationDraft::new();
        draft.toggle_skill(Skill::Python, false);
        assert!(draft.additional_skills.is_empty());
    }

    #[test]
    fn test_display_value_joins_skills() {
        let mut draft = ApplicationDraft::new();
        draft.toggle_skill(Skill::JavaScript, true);
        draft.toggle_skill(Skill::Python, true);
        assert_eq!(draft.display_value(Field::AdditionalSkills), "JavaScript, Python");
    }

    #[test]
    fn test_display_value_unselected_position_is_empty() {
        let draft = ApplicationDraft::new();
        assert_eq!(draft.display_value(Field::ApplyingForPosition), "");
    }

    #[test]
    fn test_serialize_uses_form_field_keys() {
        let mut draft = ApplicationDraft::new();
        draft.full_name = "Ada".into();
        draft.position = Some(Position::Designer);
        draft.portfolio_url = "https://example.com".into();

        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"fullName\":\"Ada\""));
        assert!(json.contains("\"applyingForPosition\":\"Designer\""));
        assert!(json.contains("\"portfolioURL\":\"https://example.com\""));
    }
}
