//! Guess normalization and scoring.
//!
//! Pure functions, no state: the round state machine calls these and
//! applies the results to its roster.

/// Points the maker earns for each distinct correct guess by anyone.
pub const MAKER_BONUS: u32 = 150;

/// Canonicalizes a word or guess for comparison: uppercase, strip every
/// character outside `[A-Z0-9 ]`, trim surrounding whitespace.
pub fn normalize(s: &str) -> String {
    s.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whether a guess decodes the secret, up to case, punctuation, and
/// whitespace. Spacing is ignored entirely, so `"Piz za"` decodes
/// `"PIZZA"`.
pub fn is_correct(guess: &str, secret: &str) -> bool {
    let despace = |s: String| s.replace(' ', "");
    despace(normalize(guess)) == despace(normalize(secret))
}

/// Points awarded to the n-th distinct correct guesser of a round
/// (1-indexed by submission order): 1000, 700, 400, then a 200 floor.
pub fn guesser_points(n: u32) -> u32 {
    1000u32.saturating_sub((n - 1) * 300).max(200)
}
