//! The form application
//!
//! Binds the core [`FormState`] to the widget states and drives both from
//! terminal key events. Every handler completes synchronously before the
//! next event is read; the core state is the single source of truth and is
//! updated on every edit.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use jobform_core::{Field, FormState, Position, Skill, SubmitOutcome, is_visible, visible_fields};

use crate::error::AppError;
use crate::render;
use crate::terminal::Terminal;
use crate::widgets::{CheckboxGroup, Select, TextInput};

/// State for the whole job-application form.
pub struct FormApp {
    form: FormState,
    full_name: TextInput,
    email: TextInput,
    phone_number: TextInput,
    position: Select,
    relevant_experience: TextInput,
    portfolio_url: TextInput,
    management_experience: TextInput,
    skills: CheckboxGroup,
    interview_time: TextInput,
    focus: Field,
    overlay: Option<String>,
    should_exit: bool,
}

impl FormApp {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            full_name: TextInput::with_placeholder("First and last name"),
            email: TextInput::with_placeholder("you@example.com"),
            phone_number: TextInput::with_placeholder("Digits only"),
            position: Select::with_options(Position::ALL.map(|p| p.label()), "Select"),
            relevant_experience: TextInput::with_placeholder("Years"),
            portfolio_url: TextInput::with_placeholder("https://"),
            management_experience: TextInput::new(),
            skills: CheckboxGroup::with_labels(Skill::CATALOG.map(|s| s.label())),
            interview_time: TextInput::with_placeholder("2024-01-01T10:00"),
            focus: Field::FullName,
            overlay: None,
            should_exit: false,
        }
    }

    // -------------------------------------------------------------------------
    // Read access for rendering
    // -------------------------------------------------------------------------

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn position_select(&self) -> &Select {
        &self.position
    }

    pub fn skills(&self) -> &CheckboxGroup {
        &self.skills
    }

    /// The text input backing a field, if the field is text-shaped.
    pub fn input(&self, field: Field) -> Option<&TextInput> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::Email => Some(&self.email),
            Field::PhoneNumber => Some(&self.phone_number),
            Field::RelevantExperience => Some(&self.relevant_experience),
            Field::PortfolioUrl => Some(&self.portfolio_url),
            Field::ManagementExperience => Some(&self.management_experience),
            Field::PreferredInterviewTime => Some(&self.interview_time),
            Field::ApplyingForPosition | Field::AdditionalSkills => None,
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Email => Some(&mut self.email),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::RelevantExperience => Some(&mut self.relevant_experience),
            Field::PortfolioUrl => Some(&mut self.portfolio_url),
            Field::ManagementExperience => Some(&mut self.management_experience),
            Field::PreferredInterviewTime => Some(&mut self.interview_time),
            Field::ApplyingForPosition | Field::AdditionalSkills => None,
        }
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && key.kind != KeyEventKind::Release
        {
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // The summary overlay is the blocking notification; any key
        // dismisses it.
        if self.overlay.is_some() {
            self.overlay = None;
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('c') if ctrl => self.should_exit = true,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter => self.submit(),
            _ => self.dispatch_to_focused(key),
        }
    }

    fn dispatch_to_focused(&mut self, key: KeyEvent) {
        match self.focus {
            Field::ApplyingForPosition => self.handle_select_key(key),
            Field::AdditionalSkills => self.handle_skills_key(key),
            field => self.handle_text_key(field, key),
        }
    }

    fn handle_text_key(&mut self, field: Field, key: KeyEvent) {
        let Some(input) = self.input_mut(field) else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.insert_char(c);
            }
            KeyCode::Backspace => input.delete_char_before(),
            KeyCode::Delete => input.delete_char_at(),
            KeyCode::Left => input.cursor_left(),
            KeyCode::Right => input.cursor_right(),
            KeyCode::Home => input.cursor_home(),
            KeyCode::End => input.cursor_end(),
            _ => return,
        }
        let value = input.value().to_string();
        self.form.set_field(field, &value);
    }

    fn handle_select_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.position.select_prev(),
            KeyCode::Down | KeyCode::Char(' ') => self.position.select_next(),
            _ => return,
        }
        let label = self.position.selected_label().unwrap_or("").to_string();
        self.form.set_field(Field::ApplyingForPosition, &label);
        self.ensure_focus_visible();
    }

    fn handle_skills_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.skills.cursor_up(),
            KeyCode::Down => self.skills.cursor_down(),
            KeyCode::Char(' ') => {
                if let Some((index, checked)) = self.skills.toggle() {
                    self.form.toggle_skill(Skill::CATALOG[index], checked);
                }
            }
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Focus traversal (visible fields only)
    // -------------------------------------------------------------------------

    fn focus_next(&mut self) {
        let fields: Vec<Field> = visible_fields(self.form.draft().position).collect();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + 1) % fields.len()];
    }

    fn focus_prev(&mut self) {
        let fields: Vec<Field> = visible_fields(self.form.draft().position).collect();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + fields.len() - 1) % fields.len()];
    }

    fn ensure_focus_visible(&mut self) {
        if !is_visible(self.focus, self.form.draft().position) {
            self.focus = Field::ApplyingForPosition;
        }
    }

    // -------------------------------------------------------------------------
    // Submit / reset
    // -------------------------------------------------------------------------

    fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Accepted(notification) => {
                self.apply_errors();
                self.overlay = Some(notification);
            }
            SubmitOutcome::Rejected => {
                self.apply_errors();
                if let Some(first) = self.form.errors().first()
                    && is_visible(first.field, self.form.draft().position)
                {
                    self.focus = first.field;
                }
            }
        }
    }

    /// Mirror the stored error map onto the widgets' inline error slots.
    fn apply_errors(&mut self) {
        for field in Field::ALL {
            let message = self.form.errors().message(field).map(str::to_string);
            match field {
                Field::ApplyingForPosition => match message {
                    Some(msg) => self.position.set_error(msg),
                    None => self.position.clear_error(),
                },
                Field::AdditionalSkills => match message {
                    Some(msg) => self.skills.set_error(msg),
                    None => self.skills.clear_error(),
                },
                _ => {
                    if let Some(input) = self.input_mut(field) {
                        match message {
                            Some(msg) => input.set_error(msg),
                            None => input.clear_error(),
                        }
                    }
                }
            }
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.full_name.clear();
        self.email.clear();
        self.phone_number.clear();
        self.position.clear_selection();
        self.position.clear_error();
        self.relevant_experience.clear();
        self.portfolio_url.clear();
        self.management_experience.clear();
        self.skills.clear();
        self.interview_time.clear();
        self.focus = Field::FullName;
        self.overlay = None;
        log::info!("form reset");
    }
}

impl Default for FormApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the form until the user quits.
pub fn run() -> Result<(), AppError> {
    let mut terminal = Terminal::new()?;
    let mut app = FormApp::new();

    while !app.should_exit() {
        render::draw(&app, terminal.stdout())?;
        let event = terminal.read_event()?;
        app.handle_event(event);
    }

    Ok(())
}
