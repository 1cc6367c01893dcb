//! Field validators for the registration and password-gate forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_CHARS: usize = 5;

/// Addresses must end in `.com` or `.ch`.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.(com|ch)$").expect("email pattern"));

/// Swiss (+41) or German (+49) numbers with at least nine further digits.
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\+41|\+49)[0-9]{9,}$").expect("phone pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Embedded whitespace is ignored, so `+41 79 123 45 67` is accepted.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE.is_match(&compact)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}
