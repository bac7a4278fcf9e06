//! Validation helpers for user input

use regex::Regex;
use validator::ValidationError;

lazy_static::lazy_static! {
    /// Letters and spaces only
    pub static ref NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z ]+$").unwrap();
}

/// Special characters a password may (and must) draw from
pub const PASSWORD_SPECIALS: &str = "$*&@#_!";

pub const PASSWORD_MIN_LEN: usize = 8;

/// Display names: ASCII letters and spaces, with at least one letter.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if NAME_REGEX.is_match(name) && !name.trim().is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new("name")
            .with_message("Name may only contain letters and spaces".into()))
    }
}

/// Password strength: at least 8 characters from `[0-9a-zA-Z$*&@#_!]`,
/// with a digit, a lowercase letter, an uppercase letter and a special.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if is_strong_password(password) {
        Ok(())
    } else {
        Err(ValidationError::new("password").with_message(
            "Password is required and must have at least 8 characters, uppercase and lowercase letters, numbers and special characters.".into(),
        ))
    }
}

pub fn is_strong_password(password: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);

    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Emails are stored trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
