//! The quiz facade and per-session state machine.
//!
//! Per session: `IDLE -> (begin) -> AWAITING_ANSWER -> (answer) -> IDLE`,
//! with `begin` while awaiting re-arming the same session with a fresh
//! character and `stop` discarding the pending one. An answer while IDLE is
//! [`EngineError::NoActiveChallenge`] — "please restart" guidance, never an
//! internal fault.

use log::warn;

use gom_core::{Catalog, Category};

use crate::error::{EngineError, EngineResult};
use crate::excerpt;
use crate::resolver;
use crate::select::SelectionPolicy;
use crate::session::{SessionId, SessionStore};

/// A challenge ready to present to the player.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Name of the character in play.
    pub character_name: String,
    /// Rendered prompt text.
    pub text: String,
    /// Answer choices, in presentation order.
    pub choices: [Category; 4],
}

/// The rendered outcome of an answered challenge.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Whether the guess was right.
    pub is_correct: bool,
    /// Name of the answered character.
    pub character_name: String,
    /// Display label of the player's guess.
    pub guess_label: String,
    /// Display label of the true category.
    pub answer_label: String,
    /// Spoiler-free biography excerpt.
    pub explanation: String,
    /// Rendered verdict text.
    pub text: String,
}

/// A single-player quiz over a loaded catalog.
pub struct QuizGame {
    catalog: Catalog,
    sessions: SessionStore,
    policy: Box<dyn SelectionPolicy + Send>,
}

impl QuizGame {
    /// Create a game for a catalog and a selection policy.
    pub fn new(catalog: Catalog, policy: Box<dyn SelectionPolicy + Send>) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(),
            policy,
        }
    }

    /// The catalog being played.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The per-session challenge store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Start a round — or replace the current one — for a session.
    ///
    /// Used for both "start" and "play again". The chosen character is
    /// recorded as the session's pending challenge.
    pub fn begin(&mut self, session: &SessionId) -> EngineResult<Prompt> {
        let id = self.policy.choose(&self.catalog)?;
        let character = self.catalog.get(id).ok_or(EngineError::EmptyCatalog)?;
        self.sessions.put(session, id);
        Ok(Prompt {
            character_name: character.name.clone(),
            text: format!(
                "The character is: **{}**\nGuess their true identity:",
                character.name
            ),
            choices: Category::ALL,
        })
    }

    /// Resolve a submitted answer for a session's pending challenge.
    ///
    /// The challenge is consumed exactly once, right or wrong. A submission
    /// outside the closed category set leaves the challenge in place so the
    /// player can answer again, and is logged for operators.
    pub fn answer(&self, session: &SessionId, submitted: &str) -> EngineResult<Reply> {
        let id = self
            .sessions
            .get(session)
            .ok_or(EngineError::NoActiveChallenge)?;
        let character = self
            .catalog
            .get(id)
            .ok_or(EngineError::NoActiveChallenge)?;

        let verdict = resolver::resolve(submitted, character).inspect_err(|e| {
            warn!("session {session}: {e}");
        })?;

        self.sessions.clear(session);

        let guess_label = verdict.guess.label().to_string();
        let answer_label = verdict.answer.label().to_string();
        let explanation = excerpt::extract(character).to_string();
        let text = if verdict.is_correct {
            format!(
                "✅ Correct! **{}** was indeed: **{answer_label}**.",
                character.name
            )
        } else {
            format!(
                "❌ Wrong! You answered: _{guess_label}_.\nThe right answer was: **{answer_label}**.",
            )
        };

        Ok(Reply {
            is_correct: verdict.is_correct,
            character_name: character.name.clone(),
            guess_label,
            answer_label,
            explanation,
            text,
        })
    }

    /// End the session explicitly, discarding any pending challenge.
    pub fn stop(&self, session: &SessionId) -> EngineResult<String> {
        match self.sessions.clear(session) {
            Some(_) => Ok("Round abandoned. Come back any time!".to_string()),
            None => Err(EngineError::NoActiveChallenge),
        }
    }
}
