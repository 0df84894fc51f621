//! Domain validation errors.

use std::fmt;

/// Reasons a phone number entered by the user cannot be dialled.
///
/// Each variant carries a fixed, user-facing message. These errors are shown
/// next to the input and are never logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing but whitespace was entered.
    Empty,

    /// The number does not start with `+`.
    MissingCountryCode,

    /// Fewer than [`MIN_DIGITS`](super::phone::MIN_DIGITS) digits remain after stripping.
    TooShort,
}

impl ValidationError {
    /// The message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Phone number cannot be empty.",
            Self::MissingCountryCode => "Number must start with a country code (e.g., +1).",
            Self::TooShort => "Please enter a valid phone number.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
