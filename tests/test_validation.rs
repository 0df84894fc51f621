//! Properties of phone number validation.

use wa_direct::{DialTarget, ValidationError};

const BLANK_INPUTS: &[&str] = &["", " ", "\t", "\n", "  \r\n  ", "\u{3000}"];

const NO_PLUS_INPUTS: &[&str] = &[
    "555-1234",
    "15551234567",
    "00 33 6 12 34 56 78",
    "(555) 123 4567",
    "abc",
    " 1+5551234",
];

const SHORT_INPUTS: &[&str] = &["+", "+1", "+12 34", "+1-2-3-4", "+(99)", "+ abc 12"];

const VALID_INPUTS: &[&str] = &[
    "+12345",
    "+1 555 123 4567",
    "+33 6 12 34 56 78",
    "+44 (20) 7946-0958",
    "  +49.30.1234567  ",
    "+1abc555def1234",
];

fn digits_of(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[test]
fn test_empty_iff_blank() {
    for input in BLANK_INPUTS {
        assert_eq!(DialTarget::parse(input), Err(ValidationError::Empty), "{:?}", input);
    }
    for input in NO_PLUS_INPUTS.iter().chain(SHORT_INPUTS).chain(VALID_INPUTS) {
        assert_ne!(DialTarget::parse(input), Err(ValidationError::Empty), "{:?}", input);
    }
}

#[test]
fn test_missing_country_code_without_plus() {
    for input in NO_PLUS_INPUTS {
        assert_eq!(
            DialTarget::parse(input),
            Err(ValidationError::MissingCountryCode),
            "{:?}",
            input
        );
    }
}

#[test]
fn test_too_short_below_five_digits() {
    for input in SHORT_INPUTS {
        assert!(digits_of(input).len() < 5);
        assert_eq!(DialTarget::parse(input), Err(ValidationError::TooShort), "{:?}", input);
    }
}

#[test]
fn test_valid_inputs_keep_digits_in_order() {
    for input in VALID_INPUTS {
        let target = DialTarget::parse(input).unwrap();
        assert_eq!(target.as_str(), digits_of(input));
        assert!(!target.as_str().contains('+'));
        assert_eq!(target.whatsapp_url(), format!("https://wa.me/{}", digits_of(input)));
    }
}

#[test]
fn test_validation_is_idempotent() {
    for input in BLANK_INPUTS
        .iter()
        .chain(NO_PLUS_INPUTS)
        .chain(SHORT_INPUTS)
        .chain(VALID_INPUTS)
    {
        assert_eq!(DialTarget::parse(input), DialTarget::parse(input));
    }
}

#[test]
fn test_scenarios() {
    let target = DialTarget::parse("+1 555 123 4567").unwrap();
    assert_eq!(target.as_str(), "15551234567");
    assert_eq!(target.whatsapp_url(), "https://wa.me/15551234567");

    assert_eq!(DialTarget::parse(""), Err(ValidationError::Empty));
    assert_eq!(
        DialTarget::parse("555-1234"),
        Err(ValidationError::MissingCountryCode)
    );
    assert_eq!(DialTarget::parse("+1"), Err(ValidationError::TooShort));
}
