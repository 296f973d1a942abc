//! The form state holder

use crate::model::{ApplicationDraft, Field, Position, Skill};
use crate::validation::{ErrorMap, validate};

use super::summary::summary;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; carries the summary text to display.
    Accepted(String),
    /// Validation failed; the errors are stored on the state holder.
    Rejected,
}

/// Owns the draft, the current error map, and the submitted flag.
///
/// This is the explicit state container the form front end mutates through
/// its handlers; there is no process-wide singleton. All operations are
/// synchronous and complete before returning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    draft: ApplicationDraft,
    errors: ErrorMap,
    submitted: bool,
}

impl FormState {
    /// Create the state for a freshly mounted form: empty draft, no errors,
    /// not submitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft.
    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// The error map from the most recent failed submit.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Whether the form has been submitted successfully.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Replace a scalar field's value. No validation side effect.
    ///
    /// The position select parses its label; an empty or unknown label
    /// clears the selection. Skills are not a scalar and go through
    /// [`FormState::toggle_skill`] instead.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::FullName => self.draft.full_name = value.to_string(),
            Field::Email => self.draft.email = value.to_string(),
            Field::PhoneNumber => self.draft.phone_number = value.to_string(),
            Field::ApplyingForPosition => self.draft.position = Position::from_label(value),
            Field::RelevantExperience => self.draft.relevant_experience = value.to_string(),
            Field::PortfolioUrl => self.draft.portfolio_url = value.to_string(),
            Field::ManagementExperience => self.draft.management_experience = value.to_string(),
            Field::PreferredInterviewTime => {
                self.draft.preferred_interview_time = value.to_string();
            }
            Field::AdditionalSkills => {
                log::warn!("set_field called for additionalSkills; use toggle_skill");
            }
        }
    }

    /// Insert or remove a skill from the additional-skills set.
    pub fn toggle_skill(&mut self, skill: Skill, present: bool) {
        self.draft.toggle_skill(skill, present);
    }

    /// Run validation over the current draft.
    ///
    /// On success the submitted flag is set and the summary text is
    /// returned for display. On failure the stored error map is replaced
    /// wholesale and the flag stays clear.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.draft);
        if errors.is_empty() {
            self.errors = errors;
            self.submitted = true;
            log::info!("application accepted: {}", self.draft.full_name);
            SubmitOutcome::Accepted(summary(&self.draft))
        } else {
            log::debug!("submit rejected with {} field error(s)", errors.len());
            self.errors = errors;
            self.submitted = false;
            SubmitOutcome::Rejected
        }
    }

    /// Restore the initial empty state: blank draft, no errors, not
    /// submitted.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
