//! Password evaluator - whole-pipeline orchestration and submission gating.

use secrecy::SecretString;
use thiserror::Error;

use crate::classifier::classify;
use crate::entropy::estimate_bits;
use crate::pattern::has_predictable_pattern;
use crate::rules::evaluate_rules;
use crate::types::{PasswordEvaluation, RuleReport};

/// Runs the full evaluation pipeline over a password.
///
/// The rule checklist, entropy estimate and pattern scan are independent
/// reads of the same input; their results feed the classifier. Everything
/// is recomputed from scratch on every call, so callers re-evaluate on
/// each keystroke and cache nothing.
pub fn evaluate_password(password: &SecretString) -> PasswordEvaluation {
    let rules = evaluate_rules(password);
    let entropy_bits = estimate_bits(password);
    let has_pattern = has_predictable_pattern(password);
    let classification = classify(&rules, entropy_bits, has_pattern);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        passed = rules.passed_count(),
        entropy_bits,
        has_pattern,
        strength = ?classification.strength,
        "password evaluated"
    );

    PasswordEvaluation {
        rules,
        entropy_bits,
        has_pattern,
        classification,
    }
}

/// Level for the 5-segment strength meter: simply the passed-rule count.
///
/// This is a separate display from the Weak/Moderate/Strong classifier
/// and the two can disagree; both are rendered as-is.
pub fn meter_level(rules: &RuleReport) -> u8 {
    rules.passed_count()
}

/// Label shown under the 5-segment meter.
pub fn meter_label(level: u8) -> &'static str {
    match level {
        0 => "Enter password",
        1..=2 => "Weak",
        3..=4 => "Medium",
        _ => "Strong",
    }
}

/// Why a submission attempt was rejected. Ordinary outcomes, not panics;
/// the messages are surfaced to the user verbatim.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Please ensure your password meets all the requirements.")]
    RequirementsNotMet,
    #[error("Please accept the Terms of Service and Privacy Policy.")]
    TermsNotAccepted,
    #[error("Email address is required.")]
    EmailMissing,
}

/// Gate for the surrounding form's submit action.
///
/// Allowed iff all five rules passed, terms are accepted and the email
/// field is non-empty. The strength label is deliberately not consulted:
/// the gate is stricter than the classifier and keys on the rule count
/// alone.
pub fn check_submission(
    rules: &RuleReport,
    terms_accepted: bool,
    email: &str,
) -> Result<(), SubmissionError> {
    if !rules.all_passed() {
        return Err(SubmissionError::RequirementsNotMet);
    }
    if !terms_accepted {
        return Err(SubmissionError::TermsNotAccepted);
    }
    if email.trim().is_empty() {
        return Err(SubmissionError::EmailMissing);
    }
    Ok(())
}
