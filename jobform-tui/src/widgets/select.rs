//! Select widget state

/// A single-choice select over a fixed option list.
///
/// `None` means nothing selected yet; the placeholder renders in its place.
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Option labels, in display order
    labels: Vec<String>,
    /// Currently selected index (None if nothing selected)
    selected: Option<usize>,
    /// Placeholder shown when nothing is selected
    placeholder: String,
    /// Validation error message (if any)
    error: Option<String>,
}

impl Select {
    /// Create a select over the given options.
    pub fn with_options(
        labels: impl IntoIterator<Item = impl Into<String>>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            selected: None,
            placeholder: placeholder.into(),
            error: None,
        }
    }

    /// Currently selected index.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Label of the selected option.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.and_then(|i| self.labels.get(i)).map(String::as_str)
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// All option labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Select an option by index; out-of-range is ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.labels.len() {
            self.selected = Some(index);
            self.error = None;
        }
    }

    /// Move to the next option; the first when nothing is selected yet.
    pub fn select_next(&mut self) {
        if self.labels.is_empty() {
            return;
        }
        let next = match self.selected {
            None => 0,
            Some(i) => (i + 1).min(self.labels.len() - 1),
        };
        self.selected = Some(next);
        self.error = None;
    }

    /// Move to the previous option; stays on the first.
    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
            self.error = None;
        }
    }

    /// Clear the selection back to the placeholder.
    pub fn clear_selection(&mut self) {
        self.selected = None;
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
