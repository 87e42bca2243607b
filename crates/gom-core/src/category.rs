use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of answers a character can be.
///
/// Data files written over the years spell these in several ways
/// (`GENIO`/`MASSONE`/`ENTRAMBI`/`COMUNE`, `MASON`, verbose forms like
/// `PERSONA COMUNE`). All recognized spellings collapse to these four
/// canonical values at parse time; serialization always emits the
/// canonical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    /// A recognized genius.
    Genius,
    /// A freemason.
    Freemason,
    /// Both a genius and a freemason.
    Both,
    /// Neither: an ordinary person.
    Common,
}

impl Category {
    /// All categories in presentation order (also the answer-choice order).
    pub const ALL: [Category; 4] = [
        Category::Genius,
        Category::Freemason,
        Category::Both,
        Category::Common,
    ];

    /// Parse a category key, accepting canonical keys and every recognized
    /// legacy spelling, case-insensitively and ignoring surrounding
    /// whitespace. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GENIUS" | "GENIO" => Some(Self::Genius),
            "FREEMASON" | "MASON" | "MASSONE" => Some(Self::Freemason),
            "BOTH" | "ENTRAMBI" => Some(Self::Both),
            "COMMON" | "COMUNE" | "PERSONA COMUNE" | "COMMON PERSON" | "ORDINARY PERSON" => {
                Some(Self::Common)
            }
            _ => None,
        }
    }

    /// The stable internal key for this category.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Genius => "GENIUS",
            Self::Freemason => "FREEMASON",
            Self::Both => "BOTH",
            Self::Common => "COMMON",
        }
    }

    /// The user-facing display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Genius => "Genius",
            Self::Freemason => "Freemason",
            Self::Both => "Both",
            Self::Common => "Common person",
        }
    }

    /// Map any key to its display label, echoing unrecognized input back
    /// unchanged. Total: never fails.
    pub fn display_label(key: &str) -> String {
        match Self::parse(key) {
            Some(category) => category.label().to_string(),
            None => key.to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Error for a key outside the closed category set.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category key: \"{0}\"")]
pub struct UnknownCategoryKey(pub String);

impl TryFrom<String> for Category {
    type Error = UnknownCategoryKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| UnknownCategoryKey(value))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key().to_string()
    }
}
