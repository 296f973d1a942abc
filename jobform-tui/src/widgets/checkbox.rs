//! Checkbox group state

/// A group of labeled checkboxes with one focus cursor.
///
/// The catalog is fixed at construction; only the checked flags and the
/// cursor move.
#[derive(Debug, Clone, Default)]
pub struct CheckboxGroup {
    /// Checkbox labels, in display order
    labels: Vec<String>,
    /// Checked flag per label
    checked: Vec<bool>,
    /// Which row the group cursor is on
    cursor: usize,
    /// Validation error message (if any)
    error: Option<String>,
}

impl CheckboxGroup {
    /// Indicator shown for a checked box
    pub const CHECKED_CHAR: char = '■';
    /// Indicator shown for an unchecked box
    pub const UNCHECKED_CHAR: char = '□';

    /// Create a group over the given labels, all unchecked.
    pub fn with_labels(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let checked = vec![false; labels.len()];
        Self {
            labels,
            checked,
            cursor: 0,
            error: None,
        }
    }

    /// All labels, in display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of checkboxes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the group is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether the checkbox at `index` is checked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Whether any checkbox is checked.
    pub fn any_checked(&self) -> bool {
        self.checked.iter().any(|c| *c)
    }

    /// The row the group cursor is on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Toggle the checkbox under the cursor; returns its index and new state.
    pub fn toggle(&mut self) -> Option<(usize, bool)> {
        let flag = self.checked.get_mut(self.cursor)?;
        *flag = !*flag;
        self.error = None;
        Some((self.cursor, *flag))
    }

    /// Set a checkbox directly.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(flag) = self.checked.get_mut(index) {
            *flag = checked;
            self.error = None;
        }
    }

    /// Uncheck everything and move the cursor home.
    pub fn clear(&mut self) {
        self.checked.fill(false);
        self.cursor = 0;
        self.error = None;
    }

    /// Move the cursor up one row; stays on the first.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row; stays on the last.
    pub fn cursor_down(&mut self) {
        if !self.labels.is_empty() {
            self.cursor = (self.cursor + 1).min(self.labels.len() - 1);
        }
    }

    /// Set the inline error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Clear the inline error
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Get the inline error message (if any)
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills() -> CheckboxGroup {
        CheckboxGroup::with_labels(["JavaScript", "CSS", "Python"])
    }

    #[test]
    fn test_starts_unchecked() {
        let group = skills();
        assert!(!group.any_checked());
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_toggle_under_cursor() {
        let mut group = skills();
        group.cursor_down();
        assert_eq!(group.toggle(), Some((1, true)));
        assert!(group.is_checked(1));
        assert_eq!(group.toggle(), Some((1, false)));
        assert!(!group.is_checked(1));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut group = skills();
        group.cursor_up();
        assert_eq!(group.cursor(), 0);
        for _ in 0..5 {
            group.cursor_down();
        }
        assert_eq!(group.cursor(), 2);
    }

    #[test]
    fn test_toggle_clears_error() {
        let mut group = skills();
        group.set_error("*At least one additional skill must be selected");
        group.toggle();
        assert_eq!(group.error(), None);
    }
}
