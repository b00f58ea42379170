//! Entropy estimation - bits-of-entropy from character-class diversity.

use secrecy::{ExposeSecret, SecretString};

const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 33;

/// Estimates password entropy in bits.
///
/// The charset size is the sum of the sizes of the character classes
/// actually present (lowercase 26, uppercase 26, digits 10, symbols 33);
/// the estimate is `floor(length * log2(charset))`, assuming uniform
/// random selection from the active charset. A coarse approximation for
/// display purposes, not a cryptographic guarantee.
///
/// Returns 0 for the empty password.
pub fn estimate_bits(password: &SecretString) -> u32 {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();
    if len == 0 {
        return 0;
    }

    let mut charset: u32 = 0;
    if pwd.chars().any(|c| c.is_ascii_lowercase()) {
        charset += LOWERCASE_SIZE;
    }
    if pwd.chars().any(|c| c.is_ascii_uppercase()) {
        charset += UPPERCASE_SIZE;
    }
    if pwd.chars().any(|c| c.is_ascii_digit()) {
        charset += DIGIT_SIZE;
    }
    if pwd.chars().any(|c| !c.is_ascii_alphanumeric()) {
        charset += SYMBOL_SIZE;
    }

    (len as f64 * f64::from(charset).log2()).floor() as u32
}
