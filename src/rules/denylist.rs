//! Denylist rule - flags passwords containing a common weak token.

use secrecy::{ExposeSecret, SecretString};

use crate::denylist::contains_common_token;

/// True if the password contains no denylisted token as a substring.
///
/// The empty password is uncommon by vacuous non-match.
pub fn is_uncommon(password: &SecretString) -> bool {
    !contains_common_token(password.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_is_uncommon_rejects_embedded_token() {
        crate::denylist::reset_denylist_for_testing();
        let pwd = SecretString::new("Password1!".to_string().into());
        assert!(!is_uncommon(&pwd)); // contains "password", case-insensitively
    }

    #[test]
    #[serial]
    fn test_is_uncommon_accepts_random_password() {
        crate::denylist::reset_denylist_for_testing();
        let pwd = SecretString::new("Xk9!mQ2p".to_string().into());
        assert!(is_uncommon(&pwd));
    }

    #[test]
    #[serial]
    fn test_is_uncommon_empty_password() {
        crate::denylist::reset_denylist_for_testing();
        let pwd = SecretString::new("".to_string().into());
        assert!(is_uncommon(&pwd));
    }
}
