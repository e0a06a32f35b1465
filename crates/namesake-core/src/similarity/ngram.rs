//! Character n-grams and the Dice coefficient

use std::collections::HashSet;

/// All contiguous character substrings of length `n`
///
/// Empty when `n` is zero or the string is shorter than `n`.
pub fn ngrams(s: &str, n: usize) -> HashSet<String> {
    if n == 0 {
        return HashSet::new();
    }
    let chars: Vec<char> = s.chars().collect();
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Dice coefficient over character n-grams: `2 |A ∩ B| / (|A| + |B|)`
///
/// Returns 0.0 when either string has no n-grams, which covers empty input
/// and strings shorter than `n`.
pub fn dice_coefficient(a: &str, b: &str, n: usize) -> f64 {
    let grams_a = ngrams(a, n);
    let grams_b = ngrams(b, n);

    if grams_a.is_empty() || grams_b.is_empty() {
        return 0.0;
    }

    let shared = grams_a.intersection(&grams_b).count();
    2.0 * shared as f64 / (grams_a.len() + grams_b.len()) as f64
}
