//! Suggestion generation - derives stronger candidate passwords from a seed.

use rand::Rng;

/// Symbols injected into generated suggestions.
pub const SUGGESTION_SYMBOLS: [char; 6] = ['!', '@', '#', '$', '%', '&'];

/// Generates three stronger password candidates from a seed.
///
/// The seed's first five characters (fewer if shorter) become the base:
/// 1. base + uppercased first character + number + symbol
/// 2. base + number + symbol + `!`
/// 3. uppercased first character + "ecure" + number + symbol
///
/// Returns an empty vec for an empty seed. Output is random and never
/// retained; callers regenerate whenever the seed changes. The RNG is
/// injected so tests can seed a deterministic one; production callers
/// can use [`suggest_with_thread_rng`].
pub fn suggest<R: Rng>(seed: &str, rng: &mut R) -> Vec<String> {
    if seed.is_empty() {
        return Vec::new();
    }

    let base: String = seed.chars().take(5).collect();
    let first_upper = |fallback: char| {
        base.chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or(fallback)
    };
    let first = format!(
        "{}{}{}{}",
        base,
        first_upper('A'),
        rng.gen_range(0..100),
        pick_symbol(rng),
    );
    let second = format!("{}{}{}!", base, rng.gen_range(0..1000), pick_symbol(rng));
    let third = format!(
        "{}ecure{}{}",
        first_upper('S'),
        rng.gen_range(0..100),
        pick_symbol(rng),
    );

    vec![first, second, third]
}

fn pick_symbol<R: Rng>(rng: &mut R) -> char {
    SUGGESTION_SYMBOLS[rng.gen_range(0..SUGGESTION_SYMBOLS.len())]
}

/// Convenience wrapper over [`suggest`] using the thread-local RNG.
pub fn suggest_with_thread_rng(seed: &str) -> Vec<String> {
    suggest(seed, &mut rand::thread_rng())
}
