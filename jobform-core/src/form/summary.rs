//! Submitted-data summary

use crate::model::{ApplicationDraft, Field};

/// The notification text shown after a successful submit.
///
/// Lists every field label and its current value in the fixed form order,
/// skills comma-joined. Fields inapplicable to the selected position are
/// listed too, as empty placeholders; that is the preserved contract.
pub fn summary(draft: &ApplicationDraft) -> String {
    let mut lines = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        lines.push(format!("{}: {}", field.label(), draft.display_value(field)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Skill};

    #[test]
    fn test_summary_lists_every_field_in_order() {
        let mut draft = ApplicationDraft::new();
        draft.full_name = "Ada Lovelace".into();
        draft.email = "ada@x.com".into();
        draft.position = Some(Position::Developer);
        draft.relevant_experience = "3".into();
        draft.toggle_skill(Skill::JavaScript, true);
        draft.toggle_skill(Skill::Css, true);

        let text = summary(&draft);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Full Name: Ada Lovelace");
        assert_eq!(lines[3], "Applying for Position: Developer");
        assert_eq!(lines[4], "Relevant Experience: 3");
        // Inapplicable fields appear as empty placeholders.
        assert_eq!(lines[5], "Portfolio URL: ");
        assert_eq!(lines[6], "Management Experience: ");
        assert_eq!(lines[7], "Additional Skills: JavaScript, CSS");
    }
}
