//! Pattern analysis - detects sequential and repeated character runs.

use secrecy::{ExposeSecret, SecretString};

/// Scans for predictable 3-character runs.
///
/// A window of three consecutive characters matches if the code points
/// ascend by exactly one each step ("abc", "123") or all three are
/// identical ("aaa"). Passwords shorter than 3 characters never match.
/// The first matching window wins.
pub fn has_predictable_pattern(password: &SecretString) -> bool {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < 3 {
        return false;
    }

    chars.windows(3).any(|w| {
        let (a, b, c) = (w[0] as u32, w[1] as u32, w[2] as u32);
        let ascending = b == a + 1 && c == b + 1;
        let repeated = a == b && b == c;
        ascending || repeated
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_pattern_ascending_letters() {
        assert!(has_predictable_pattern(&pwd("abc1")));
        assert!(has_predictable_pattern(&pwd("xabcx")));
    }

    #[test]
    fn test_pattern_ascending_digits() {
        assert!(has_predictable_pattern(&pwd("pw123pw")));
    }

    #[test]
    fn test_pattern_repeated_run() {
        assert!(has_predictable_pattern(&pwd("111x")));
        assert!(has_predictable_pattern(&pwd("xxAAAxx")));
    }

    #[test]
    fn test_pattern_two_in_a_row_is_fine() {
        assert!(!has_predictable_pattern(&pwd("aab")));
        assert!(!has_predictable_pattern(&pwd("xy11zz")));
    }

    #[test]
    fn test_pattern_descending_not_flagged() {
        assert!(!has_predictable_pattern(&pwd("cba321")));
    }

    #[test]
    fn test_pattern_too_short() {
        assert!(!has_predictable_pattern(&pwd("")));
        assert!(!has_predictable_pattern(&pwd("ab")));
    }

    #[test]
    fn test_pattern_clean_password() {
        assert!(!has_predictable_pattern(&pwd("Xk9!mQ2pLw")));
    }
}
