//! Core types for "Genius or Mason?": categories, characters, and the catalog.
//!
//! This crate defines the data model the quiz engine plays over. It is
//! independent of any transport — you can construct a [`Catalog`]
//! programmatically or load one from a JSON file.

/// The closed category enumeration and its display labels.
pub mod category;
/// Loading and lookup of the playable character set.
pub mod catalog;
/// Character records and identifiers.
pub mod character;
/// Error types used throughout the crate.
pub mod error;

/// Re-export the category enumeration.
pub use category::Category;
/// Re-export catalog types.
pub use catalog::{Catalog, CharacterRecord};
/// Re-export character types.
pub use character::{Character, CharacterId};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
