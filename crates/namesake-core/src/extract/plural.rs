//! Plural folding
//!
//! A word ending in `s` is read as a plural unless it ends in `ss`, `us`,
//! `is`, `as` or `ess`. A plural is dropped when its singular (the word minus
//! the final `s`) is also present; otherwise it is kept as written.

use std::collections::BTreeSet;

const NON_PLURAL_SUFFIXES: [&str; 5] = ["ss", "us", "is", "as", "ess"];

/// Whether `word` looks like a plural
pub fn is_plural(word: &str) -> bool {
    word.ends_with('s') && !NON_PLURAL_SUFFIXES.iter().any(|s| word.ends_with(s))
}

/// The word minus its plural `s`, or the word itself
pub fn singular_form(word: &str) -> &str {
    if is_plural(word) {
        &word[..word.len() - 1]
    } else {
        word
    }
}

/// Collapse singular/plural pairs, keeping the singular
///
/// Idempotent: a singular never ends in `s`, so folding never exposes a new
/// pair.
pub fn fold_plurals(words: BTreeSet<String>) -> BTreeSet<String> {
    let before = words.len();
    let folded: BTreeSet<String> = words
        .iter()
        .filter(|word| {
            let singular = singular_form(word);
            singular.len() == word.len() || !words.contains(singular)
        })
        .cloned()
        .collect();

    tracing::trace!(before, after = folded.len(), "fold_plurals");
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_is_plural() {
        assert!(is_plural("Hobbits"));
        assert!(is_plural("Ents"));
        assert!(!is_plural("Glass"));
        assert!(!is_plural("Sauros"));
        assert!(!is_plural("Isildurus"));
        assert!(!is_plural("Osgiliath"));
        assert!(!is_plural("Genesis"));
        assert!(!is_plural("Atlas"));
        assert!(!is_plural("Princess"));
        assert!(!is_plural("HOBBITS"));
    }

    #[test]
    fn test_singular_wins() {
        assert_eq!(fold_plurals(set(&["Hobbit", "Hobbits"])), set(&["Hobbit"]));
    }

    #[test]
    fn test_lone_plural_is_kept() {
        assert_eq!(fold_plurals(set(&["Ents", "Shire"])), set(&["Ents", "Shire"]));
    }

    #[test]
    fn test_excluded_suffixes_untouched() {
        assert_eq!(fold_plurals(set(&["Glass", "Glas"])), set(&["Glass", "Glas"]));
        assert_eq!(fold_plurals(set(&["Glass"])), set(&["Glass"]));
    }

    #[test]
    fn test_idempotent() {
        let words = set(&["Hobbit", "Hobbits", "Ents", "Glass", "Orc", "Orcs", "Dwarves"]);
        let once = fold_plurals(words);
        let twice = fold_plurals(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once, set(&["Dwarves", "Ents", "Glass", "Hobbit", "Orc"]));
    }

    #[test]
    fn test_single_letter_s() {
        assert_eq!(fold_plurals(set(&["s", "S"])), set(&["s", "S"]));
    }
}
