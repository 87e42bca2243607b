//! Spoiler-free biography excerpts.
//!
//! The verdict message already names the correct category, so a biography
//! that opens by restating it ("Is a **Genius**. Specifically: ...") would
//! repeat itself on screen. This module knows the lead-in phrasings that
//! authors have used per category and strips the first one that matches.
//! Stripping never fails: an unrecognized opening is returned unchanged,
//! redundant but correct.

use gom_core::{Category, Character};

/// Transition words that may follow the category-restating sentence.
const TRANSITIONS: &[&str] = &["Specifically:", "In fact,"];

/// The known lead-in phrasings for a category, longest first so a bare
/// stem never shadows a stem-plus-transition variant.
///
/// `Common` has no entry: its canonical narrative is self-contained prose
/// that does not restate the category.
pub fn known_intros(category: Category) -> Vec<String> {
    let stem = match category {
        Category::Genius => Some("Is a **Genius**."),
        Category::Freemason => Some("Is a **Freemason**."),
        Category::Both => Some("Is **Both**."),
        Category::Common => None,
    };
    let Some(stem) = stem else {
        return Vec::new();
    };

    let mut intros: Vec<String> = TRANSITIONS
        .iter()
        .map(|transition| format!("{stem} {transition}"))
        .collect();
    intros.push(stem.to_string());
    intros
}

/// Derive the reusable explanation text for a character.
///
/// If the trimmed biography starts with a known lead-in for the
/// character's category, the remainder is returned trimmed; otherwise the
/// trimmed biography comes back unchanged.
pub fn extract(character: &Character) -> &str {
    let biography = character.biography.trim();
    for intro in known_intros(character.category) {
        if let Some(rest) = biography.strip_prefix(intro.as_str()) {
            return rest.trim();
        }
    }
    biography
}
