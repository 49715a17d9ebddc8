//! Form-input validation: email format, allowed email domains, and password
//! strength.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum password length applied by
/// [`validate_password_default`].
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Email address must belong to {0}.")]
    WrongEmailDomain(String),

    #[error("Password must be at least {0} characters long.")]
    PasswordTooShort(usize),

    #[error("Password must contain both letters and numbers.")]
    PasswordMissingClasses,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// Check that `email` is a plausibly formatted address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Check the format and require the address to end with the given domain
/// suffix, e.g. `"@example.edu"`.
pub fn validate_email_domain(email: &str, domain: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    if email.ends_with(domain) {
        Ok(())
    } else {
        Err(ValidationError::WrongEmailDomain(domain.to_string()))
    }
}

/// Check password strength: at least `min_length` characters, containing at
/// least one letter and one digit.
pub fn validate_password(password: &str, min_length: usize) -> Result<(), ValidationError> {
    if password.chars().count() < min_length {
        return Err(ValidationError::PasswordTooShort(min_length));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ValidationError::PasswordMissingClasses);
    }

    Ok(())
}

/// [`validate_password`] with the default minimum length.
pub fn validate_password_default(password: &str) -> Result<(), ValidationError> {
    validate_password(password, DEFAULT_MIN_PASSWORD_LENGTH)
}
