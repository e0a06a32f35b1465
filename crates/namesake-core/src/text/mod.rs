//! Text processing utilities for sentence splitting and token cleanup
//!
//! Splitting is approximate: sentences end at any run of `.`, `!`
//! or `?`, and words are whatever sits between whitespace. Abbreviations such
//! as "Mr." therefore end a sentence.

use std::sync::OnceLock;

use regex::Regex;

/// Sentence terminators, a run counts as one boundary
static SENTENCE_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn sentence_boundary() -> &'static Regex {
    SENTENCE_BOUNDARY.get_or_init(|| Regex::new(r"[.!?]+").expect("static regex"))
}

/// A whitespace-delimited word and where it sat in its sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Text exactly as it appeared in the corpus
    pub raw: &'a str,
    /// True for the first word of a sentence
    pub sentence_initial: bool,
}

impl<'a> Token<'a> {
    /// Alphabetic core of the token, see [`clean_token`]
    pub fn cleaned(&self) -> String {
        clean_token(self.raw)
    }
}

/// Split text into trimmed, non-empty sentences
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    sentence_boundary()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Split text into sentences, then each sentence into tokens
pub fn sentence_tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    split_sentences(text).flat_map(|sentence| {
        sentence
            .split_whitespace()
            .enumerate()
            .map(|(i, raw)| Token {
                raw,
                sentence_initial: i == 0,
            })
    })
}

/// An uppercase letter followed only by letters
///
/// Any embedded punctuation or digit disqualifies the word, so `Frodo's`
/// and `Mordor,` do not match. Accented letters count as letters.
pub fn is_bare_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(char::is_alphabetic),
        _ => false,
    }
}

/// Remove a trailing possessive marker (`'s`, `’s`, or a bare apostrophe)
///
/// Trailing punctuation after the marker is ignored, so `Aragorn's,`
/// yields `Aragorn`.
pub fn strip_possessive(word: &str) -> &str {
    let trimmed = word.trim_end_matches(|c: char| !c.is_alphanumeric() && !is_apostrophe(c));
    for marker in ["'s", "'S", "\u{2019}s", "\u{2019}S"] {
        if let Some(stem) = trimmed.strip_suffix(marker) {
            return stem;
        }
    }
    trimmed.trim_end_matches(is_apostrophe)
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Strip the possessive marker and every non-letter character
pub fn clean_token(word: &str) -> String {
    strip_possessive(word)
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// First letter uppercase, the rest lowercase
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// True when the first character is an uppercase letter
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_collapses_terminator_runs() {
        let sentences: Vec<_> = split_sentences("Run!!! Where? Here... Done.").collect();
        assert_eq!(sentences, vec!["Run", "Where", "Here", "Done"]);
    }

    #[test]
    fn test_split_sentences_empty_text() {
        assert_eq!(split_sentences("").count(), 0);
        assert_eq!(split_sentences("  ...  !? ").count(), 0);
    }

    #[test]
    fn test_sentence_tokens_marks_first_word() {
        let tokens: Vec<_> = sentence_tokens("Frodo went to Mordor. Sam followed.").collect();
        let initial: Vec<_> = tokens
            .iter()
            .filter(|t| t.sentence_initial)
            .map(|t| t.raw)
            .collect();
        assert_eq!(initial, vec!["Frodo", "Sam"]);
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_is_bare_capitalized() {
        assert!(is_bare_capitalized("Gandalf"));
        assert!(is_bare_capitalized("I"));
        assert!(!is_bare_capitalized("gandalf"));
        assert!(!is_bare_capitalized("Gandalf,"));
        assert!(!is_bare_capitalized("Frodo's"));
        assert!(!is_bare_capitalized("R2D2"));
        assert!(is_bare_capitalized("Éowyn"));
        assert!(!is_bare_capitalized("éowyn"));
        assert!(!is_bare_capitalized(""));
    }

    #[test]
    fn test_strip_possessive() {
        assert_eq!(strip_possessive("Aragorn's"), "Aragorn");
        assert_eq!(strip_possessive("Aragorn's,"), "Aragorn");
        assert_eq!(strip_possessive("Elves\u{2019}s"), "Elves");
        assert_eq!(strip_possessive("Hobbits'"), "Hobbits");
        assert_eq!(strip_possessive("Gimli"), "Gimli");
    }

    #[test]
    fn test_clean_token() {
        assert_eq!(clean_token("Gandalf!"), "Gandalf");
        assert_eq!(clean_token("\"Frodo?\""), "Frodo");
        assert_eq!(clean_token("Minas-Tirith"), "MinasTirith");
        assert_eq!(clean_token("...!"), "");
        assert_eq!(clean_token("Lórien."), "Lórien");
        assert_eq!(clean_token("Théoden's"), "Théoden");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("GANDALF"), "Gandalf");
        assert_eq!(title_case("McGill"), "Mcgill");
        assert_eq!(title_case("x"), "X");
        assert_eq!(title_case(""), "");
    }
}
