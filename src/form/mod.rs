//! Owner of the phone number being edited and its validation error.
//!
//! `PhoneForm` is the only place the input text and the error change. User
//! edits ([`set_input`](PhoneForm::set_input), [`append`](PhoneForm::append),
//! [`clear`](PhoneForm::clear)) also clear any error; the location suggester goes through
//! [`apply_suggestion`](PhoneForm::apply_suggestion), which only ever fills an
//! empty input.

use crate::domain::{DialTarget, ValidationError};
use crate::suggester::Suggestion;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneForm {
    input: String,
    error: Option<ValidationError>,
}

impl PhoneForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text, exactly as entered.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Error from the last submit, if it failed and nothing was edited since.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Replace the input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.error = None;
        self.input = text.into();
    }

    /// Append text to the input.
    pub fn append(&mut self, text: &str) {
        self.error = None;
        self.input.push_str(text);
    }

    pub fn clear(&mut self) {
        self.set_input(String::new());
    }

    /// Validate the input.
    ///
    /// On failure the error is kept until the next edit.
    pub fn submit(&mut self) -> Result<DialTarget, ValidationError> {
        let result = DialTarget::parse(&self.input);
        self.error = result.as_ref().err().copied();
        result
    }

    /// Pre-fill the input with a suggested dial code.
    ///
    /// Only applies when the input is exactly empty at the time of the call;
    /// anything the user typed, even whitespace, wins. Returns whether the
    /// suggestion was applied.
    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) -> bool {
        if !self.input.is_empty() {
            return false;
        }
        self.input = suggestion.prefill();
        true
    }
}
