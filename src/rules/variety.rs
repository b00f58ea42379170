//! Character variety rules - uppercase, digit and special-character presence.

use secrecy::{ExposeSecret, SecretString};

/// True if any character is an ASCII uppercase letter.
pub fn has_uppercase(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}

/// True if any character is an ASCII digit.
pub fn has_number(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_digit())
}

/// True if any character falls outside `[A-Za-z0-9]`.
pub fn has_special_char(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
}
