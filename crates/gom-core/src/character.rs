use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Identifier of a character within a loaded catalog.
///
/// Ids are positional: the catalog assigns them in record order at load
/// time. They stay stable across restarts as long as the catalog file keeps
/// its order, which is what the persisted rotation relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A playable historical figure.
///
/// Immutable once the catalog is loaded; recency bookkeeping lives in the
/// engine's rotation state, not on the character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Positional identifier within the catalog.
    pub id: CharacterId,
    /// Display name. Duplicates are allowed; the id disambiguates.
    pub name: String,
    /// Ground-truth category.
    pub category: Category,
    /// Free-text justification. May open with a sentence restating the
    /// category, which the engine strips before display.
    pub biography: String,
}
