//! Answer normalization and comparison.
//!
//! Both sides of the comparison are collapsed to the canonical
//! [`Category`] before matching: the stored side at catalog load, the
//! submitted side here. Comparison is exact on the canonical value — no
//! partial or fuzzy matching.

use gom_core::{Category, Character};

use crate::error::{EngineError, EngineResult};

/// The structured outcome of one answered challenge. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the guess matched the stored category.
    pub is_correct: bool,
    /// The player's guess, canonicalized.
    pub guess: Category,
    /// The stored ground truth.
    pub answer: Category,
}

/// Resolve a submitted answer key against a character's stored category.
///
/// A key outside the closed set (after trimming, case-folding, and synonym
/// collapse) is [`EngineError::UnknownCategory`] — the caller renders it as
/// an internal-inconsistency message rather than asserting.
pub fn resolve(submitted: &str, character: &Character) -> EngineResult<Verdict> {
    let guess = Category::parse(submitted)
        .ok_or_else(|| EngineError::UnknownCategory(submitted.trim().to_string()))?;
    let answer = character.category;
    Ok(Verdict {
        is_correct: guess == answer,
        guess,
        answer,
    })
}

#[cfg(test)]
mod tests {
    use gom_core::CharacterId;

    use super::*;

    fn character(category: Category) -> Character {
        Character {
            id: CharacterId(0),
            name: "Test".to_string(),
            category,
            biography: String::new(),
        }
    }

    /// Every recognized spelling, grouped by the canonical value it
    /// collapses to.
    const SPELLINGS: [(&str, Category); 13] = [
        ("GENIUS", Category::Genius),
        ("GENIO", Category::Genius),
        ("genius", Category::Genius),
        ("FREEMASON", Category::Freemason),
        ("MASON", Category::Freemason),
        ("MASSONE", Category::Freemason),
        ("BOTH", Category::Both),
        ("ENTRAMBI", Category::Both),
        ("COMMON", Category::Common),
        ("COMUNE", Category::Common),
        ("PERSONA COMUNE", Category::Common),
        ("COMMON PERSON", Category::Common),
        ("ORDINARY PERSON", Category::Common),
    ];

    #[test]
    fn correct_iff_canonicalizations_are_equal() {
        for (guess_key, guess_canonical) in SPELLINGS {
            for stored in Category::ALL {
                let verdict = resolve(guess_key, &character(stored)).unwrap();
                assert_eq!(
                    verdict.is_correct,
                    guess_canonical == stored,
                    "guess {guess_key:?} vs stored {stored:?}"
                );
                assert_eq!(verdict.guess, guess_canonical);
                assert_eq!(verdict.answer, stored);
            }
        }
    }

    #[test]
    fn whitespace_and_case_are_ignored() {
        let verdict = resolve("  massone \n", &character(Category::Freemason)).unwrap();
        assert!(verdict.is_correct);
    }

    #[test]
    fn unknown_key_is_reported_not_crashed() {
        let err = resolve("WIZARD", &character(Category::Genius)).unwrap_err();
        match err {
            EngineError::UnknownCategory(key) => assert_eq!(key, "WIZARD"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_submission_is_unknown() {
        let err = resolve("", &character(Category::Common)).unwrap_err();
        assert!(matches!(err, EngineError::UnknownCategory(_)));
    }
}
