//! Password rule checklist
//!
//! Each rule checks one independent aspect of the password. All five are
//! always evaluated, so the caller can render a full checklist.

mod denylist;
mod length;
mod variety;

pub use denylist::is_uncommon;
pub use length::min_length;
pub use variety::{has_number, has_special_char, has_uppercase};

use secrecy::SecretString;

use crate::types::RuleReport;

/// Evaluates all five rules against a password.
///
/// Pure and deterministic; no short-circuiting between rules.
pub fn evaluate_rules(password: &SecretString) -> RuleReport {
    RuleReport {
        min_length: min_length(password),
        has_uppercase: has_uppercase(password),
        has_special_char: has_special_char(password),
        has_number: has_number(password),
        is_uncommon: is_uncommon(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_evaluate_rules_all_pass() {
        crate::denylist::reset_denylist_for_testing();
        let pwd = SecretString::new("Trick#Shot7".to_string().into());
        let report = evaluate_rules(&pwd);
        assert!(report.all_passed());
        assert_eq!(report.passed_count(), 5);
    }

    #[test]
    #[serial]
    fn test_evaluate_rules_empty_password() {
        crate::denylist::reset_denylist_for_testing();
        let pwd = SecretString::new("".to_string().into());
        let report = evaluate_rules(&pwd);
        // Empty passes only isUncommon, by vacuous non-match
        assert!(!report.min_length);
        assert!(!report.has_uppercase);
        assert!(!report.has_special_char);
        assert!(!report.has_number);
        assert!(report.is_uncommon);
        assert_eq!(report.passed_count(), 1);
    }

    #[test]
    #[serial]
    fn test_evaluate_rules_idempotent() {
        crate::denylist::reset_denylist_for_testing();
        let pwd = SecretString::new("Xk9!mQ2p".to_string().into());
        assert_eq!(evaluate_rules(&pwd), evaluate_rules(&pwd));
    }
}
