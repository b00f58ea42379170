//! Core evaluation types shared across the crate.

/// The five checklist rules, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MinLength,
    HasUppercase,
    HasSpecialChar,
    HasNumber,
    IsUncommon,
}

impl Rule {
    /// All rules in checklist order.
    pub const ALL: [Rule; 5] = [
        Rule::MinLength,
        Rule::HasUppercase,
        Rule::HasSpecialChar,
        Rule::HasNumber,
        Rule::IsUncommon,
    ];

    /// User-facing checklist label for this rule.
    pub fn label(&self) -> &'static str {
        match self {
            Rule::MinLength => "8-15 characters",
            Rule::HasUppercase => "At least one uppercase letter",
            Rule::HasSpecialChar => "At least one special character",
            Rule::HasNumber => "At least one number",
            Rule::IsUncommon => "Uncommon password",
        }
    }
}

/// Outcome of evaluating all five rules against a password.
///
/// Every rule is always evaluated; there is no short-circuiting, so a
/// report always carries exactly five entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleReport {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_special_char: bool,
    pub has_number: bool,
    pub is_uncommon: bool,
}

impl RuleReport {
    /// Whether a single rule passed.
    pub fn passed(&self, rule: Rule) -> bool {
        match rule {
            Rule::MinLength => self.min_length,
            Rule::HasUppercase => self.has_uppercase,
            Rule::HasSpecialChar => self.has_special_char,
            Rule::HasNumber => self.has_number,
            Rule::IsUncommon => self.is_uncommon,
        }
    }

    /// Number of rules that passed, in `0..=5`.
    pub fn passed_count(&self) -> u8 {
        Rule::ALL.iter().filter(|r| self.passed(**r)).count() as u8
    }

    /// All five entries in checklist order, for rendering.
    pub fn entries(&self) -> [(Rule, bool); 5] {
        Rule::ALL.map(|r| (r, self.passed(r)))
    }

    pub fn all_passed(&self) -> bool {
        self.passed_count() == 5
    }
}

/// Discrete strength label produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

/// A strength label with the sub-conditions that produced it.
///
/// The rationale is descriptive metadata for rendering; nothing branches
/// on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub strength: Strength,
    pub rationale: String,
    pub passed_rules: u8,
}

/// The full value set produced by one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub rules: RuleReport,
    pub entropy_bits: u32,
    pub has_pattern: bool,
    pub classification: Classification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_report_default_passes_nothing() {
        let report = RuleReport::default();
        assert_eq!(report.passed_count(), 0);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_rule_report_entries_in_checklist_order() {
        let report = RuleReport {
            min_length: true,
            has_uppercase: false,
            has_special_char: true,
            has_number: false,
            is_uncommon: true,
        };
        let entries = report.entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0], (Rule::MinLength, true));
        assert_eq!(entries[1], (Rule::HasUppercase, false));
        assert_eq!(entries[4], (Rule::IsUncommon, true));
        assert_eq!(report.passed_count(), 3);
    }

    #[test]
    fn test_rule_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            Rule::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels.len(), 5);
    }
}
