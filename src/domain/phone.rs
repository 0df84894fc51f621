//! Phone number validation and the WhatsApp deep link it produces.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of digits accepted after stripping formatting.
///
/// This is a length heuristic, not per-country validation.
pub const MIN_DIGITS: usize = 5;

/// Prefix of WhatsApp's chat-by-number links.
pub const WHATSAPP_LINK_BASE: &str = "https://wa.me/";

/// A validated dial target: the digits of an international number with the
/// leading `+` and all formatting removed.
///
/// # Example
///
/// ```
/// use wa_direct::domain::DialTarget;
///
/// let target = DialTarget::parse("+1 555 123 4567").unwrap();
/// assert_eq!(target.as_str(), "15551234567");
/// assert_eq!(target.whatsapp_url(), "https://wa.me/15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialTarget(String);

impl DialTarget {
    /// Validate raw user input.
    ///
    /// # Validation Rules
    ///
    /// Checked in order, stopping at the first failure:
    /// - Trimmed input must not be empty (`Empty`)
    /// - Trimmed input must start with `+` (`MissingCountryCode`)
    /// - At least [`MIN_DIGITS`] ASCII digits must remain once every other
    ///   character is stripped (`TooShort`)
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        if !trimmed.starts_with('+') {
            return Err(ValidationError::MissingCountryCode);
        }

        let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < MIN_DIGITS {
            return Err(ValidationError::TooShort);
        }

        Ok(Self(digits))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The `https://wa.me/<digits>` deep link for this number.
    pub fn whatsapp_url(&self) -> String {
        format!("{}{}", WHATSAPP_LINK_BASE, self.0)
    }
}

// Serde support - serialize as the digit string
impl Serialize for DialTarget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for DialTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}
