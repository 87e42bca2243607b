//! Quiz session state machine and answer resolution for "Genius or Mason?".
//!
//! The engine presents a historical figure, waits for a categorical guess,
//! and renders a verdict with a spoiler-free biography excerpt. It exposes
//! exactly three calls to its transport ([`QuizGame::begin`],
//! [`QuizGame::answer`], [`QuizGame::stop`]); everything above that —
//! message delivery, buttons, webhooks — is a collaborator concern.

/// Error types used throughout the crate.
pub mod error;
/// Spoiler-free biography excerpts.
pub mod excerpt;
/// The quiz facade and per-session state machine.
pub mod game;
/// Persisted least-recently-proposed rotation.
pub mod recency;
/// Answer normalization and comparison.
pub mod resolver;
/// Strategies for choosing the next character.
pub mod select;
/// Per-session "current challenge" storage.
pub mod session;

/// Re-export error types.
pub use error::{EngineError, EngineResult, StateError};
/// Re-export the game facade.
pub use game::{Prompt, QuizGame, Reply};
/// Re-export the persisted rotation.
pub use recency::DailyRotation;
/// Re-export the verdict type.
pub use resolver::Verdict;
/// Re-export selection strategies.
pub use select::{RandomSelection, SelectionPolicy};
/// Re-export session types.
pub use session::{SessionId, SessionStore};
