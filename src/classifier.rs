//! Strength classifier - combines rule, entropy and pattern results.

use crate::types::{Classification, RuleReport, Strength};

const WEAK_MIN_RULES: u8 = 3;
const WEAK_MIN_ENTROPY: u32 = 40;
const STRONG_MIN_ENTROPY: u32 = 60;

/// Derives a discrete strength label with its rationale.
///
/// Decision policy, first match wins:
/// 1. Fewer than 3 rules passed, entropy below 40 bits, or a predictable
///    pattern present: `Weak`.
/// 2. Fewer than 5 rules passed or entropy below 60 bits: `Moderate`.
/// 3. Otherwise: `Strong`.
///
/// Pure function of its inputs. Note that the submission gate is a
/// separate policy (all five rules must pass) and does not consult this
/// label; see [`crate::check_submission`].
pub fn classify(rules: &RuleReport, entropy_bits: u32, has_pattern: bool) -> Classification {
    let passed = rules.passed_count();

    let (strength, rationale) = if passed < WEAK_MIN_RULES
        || entropy_bits < WEAK_MIN_ENTROPY
        || has_pattern
    {
        let mut causes = Vec::new();
        if passed < WEAK_MIN_RULES {
            causes.push("fewer than 3 requirements met");
        }
        if entropy_bits < WEAK_MIN_ENTROPY {
            causes.push("low entropy");
        }
        if has_pattern {
            causes.push("predictable pattern");
        }
        (Strength::Weak, causes.join(", "))
    } else if passed < 5 || entropy_bits < STRONG_MIN_ENTROPY {
        let mut causes = Vec::new();
        if passed < 5 {
            causes.push("not all requirements met");
        }
        if entropy_bits < STRONG_MIN_ENTROPY {
            causes.push("moderate entropy");
        }
        (Strength::Moderate, causes.join(", "))
    } else {
        (
            Strength::Strong,
            "all requirements met with high entropy".to_string(),
        )
    };

    Classification {
        strength,
        rationale,
        passed_rules: passed,
    }
}
