use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::character::{Character, CharacterId};
use crate::error::{CatalogError, CatalogResult};

/// One catalog file entry. Ids are not stored; the catalog assigns them
/// positionally on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Display name.
    pub name: String,
    /// Ground-truth category (canonical or legacy spelling).
    pub category: Category,
    /// Free-text justification shown after an answer.
    #[serde(default)]
    pub biography: String,
}

/// The full set of playable characters, read-only after load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    /// Load a catalog from a JSON file holding an array of
    /// [`CharacterRecord`]s.
    ///
    /// A missing or unreadable file is [`CatalogError::Unavailable`]; bad
    /// JSON or an unknown category key is [`CatalogError::Malformed`]. An
    /// empty array is a valid, empty catalog — callers that need at least
    /// one character must check [`Catalog::is_empty`] themselves.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<CharacterRecord> =
            serde_json::from_str(&data).map_err(|source| CatalogError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_records(records)
    }

    /// Build a catalog from records, assigning positional ids.
    pub fn from_records(records: Vec<CharacterRecord>) -> CatalogResult<Self> {
        let mut characters = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::BlankName { index });
            }
            characters.push(Character {
                id: CharacterId(index as u32),
                name: record.name,
                category: record.category,
                biography: record.biography,
            });
        }
        Ok(Self { characters })
    }

    /// Look up a character by id.
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.0 as usize)
    }

    /// All characters in catalog order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// True if the catalog has no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Count characters per category, in [`Category::ALL`] order.
    pub fn counts_by_category(&self) -> [(Category, usize); 4] {
        Category::ALL.map(|category| {
            let count = self
                .characters
                .iter()
                .filter(|c| c.category == category)
                .count();
            (category, count)
        })
    }
}
