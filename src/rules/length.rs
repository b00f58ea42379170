//! Length rule - checks that the password length falls in the accepted band.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 15;

/// Checks that the password is 8 to 15 characters long, inclusive.
///
/// Length is counted in characters, not bytes.
pub fn min_length(password: &SecretString) -> bool {
    let len = password.expose_secret().chars().count();
    (MIN_LENGTH..=MAX_LENGTH).contains(&len)
}
