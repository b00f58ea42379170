//! Denylist management module
//!
//! Handles loading and querying the list of common weak password tokens.
//! Rule predicates match tokens as case-insensitive substrings, so a
//! password merely containing "qwerty" is flagged, not only an exact hit.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Built-in tokens, used whenever no denylist file has been loaded.
const DEFAULT_TOKENS: &[&str] = &[
    "password",
    "123456",
    "qwerty",
    "admin",
    "welcome",
    "letmein",
    "monkey",
    "sunshine",
    "princess",
];

static COMMON_TOKENS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the denylist file path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var("PWD_METER_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
}

/// Initializes the token denylist from an external file.
///
/// Optional: without this call the built-in token list is used, so the
/// rule predicates are total with no setup.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist() -> Result<usize, DenylistError> {
    let path = get_denylist_path();
    init_denylist_from_path(&path)
}

/// Initializes the token denylist from a specific file path.
///
/// Idempotent: a second call returns the already-loaded count without
/// touching the filesystem.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, DenylistError> {
    {
        let guard = COMMON_TOKENS.read().unwrap();
        if let Some(tokens) = guard.as_ref() {
            return Ok(tokens.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: FileNotFound {}", path.display());
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: Empty file {}", path.display());
        return Err(DenylistError::EmptyFile);
    }

    let mut tokens: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    tokens.sort();
    tokens.dedup();

    let count = tokens.len();
    {
        let mut guard = COMMON_TOKENS.write().unwrap();
        *guard = Some(tokens);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist initialized: {} tokens from {:?}", count, path);

    Ok(count)
}

/// Returns a cloned copy of the active denylist.
///
/// Falls back to the built-in tokens if `init_denylist()` has not been
/// called.
pub fn get_denylist() -> Vec<String> {
    let guard = COMMON_TOKENS.read().unwrap();
    match guard.as_ref() {
        Some(tokens) => tokens.clone(),
        None => DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
    }
}

/// Checks if the password contains any denylisted token as a substring.
///
/// Matching is case-insensitive: "Password1!" contains "password".
pub fn contains_common_token(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = COMMON_TOKENS.read().unwrap();
    match guard.as_ref() {
        Some(tokens) => tokens.iter().any(|t| lowered.contains(t.as_str())),
        None => DEFAULT_TOKENS.iter().any(|t| lowered.contains(t)),
    }
}

/// Resets the denylist for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    let mut guard = COMMON_TOKENS.write().unwrap();
    *guard = None;
}
