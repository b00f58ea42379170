//! Password strength evaluation library
//!
//! This library classifies a candidate password against a layered set of
//! heuristics: a five-rule checklist, a bits-of-entropy estimate and a
//! predictable-pattern scan, combined into a Weak/Moderate/Strong
//! classification. For passwords below the submission bar it can also
//! derive stronger candidate passwords from the typed seed.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DENYLIST_PATH`: Custom path to denylist file
//!   (default: `./assets/denylist.txt`). A built-in token list is used
//!   when no file has been loaded.
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password, meter_level};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password(&password);
//!
//! println!("Rules passed: {}/5", evaluation.rules.passed_count());
//! println!("Entropy: {} bits", evaluation.entropy_bits);
//! println!("Strength: {:?}", evaluation.classification.strength);
//! assert_eq!(meter_level(&evaluation.rules), evaluation.rules.passed_count());
//! ```

// Internal modules
mod classifier;
mod denylist;
mod entropy;
mod evaluator;
mod pattern;
mod rules;
mod suggest;
mod types;

// Public API
pub use classifier::classify;
pub use denylist::{
    DenylistError, contains_common_token, get_denylist, init_denylist, init_denylist_from_path,
};
pub use entropy::estimate_bits;
pub use evaluator::{
    SubmissionError, check_submission, evaluate_password, meter_label, meter_level,
};
pub use pattern::has_predictable_pattern;
pub use rules::evaluate_rules;
pub use suggest::{SUGGESTION_SYMBOLS, suggest, suggest_with_thread_rng};
pub use types::{Classification, PasswordEvaluation, Rule, RuleReport, Strength};
