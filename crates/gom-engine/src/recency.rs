//! Persisted least-recently-proposed rotation.
//!
//! The rotation keeps one day-granular state file: a last-proposed date per
//! character, and the recorded pick of the current day. Within one day the
//! selection is idempotent — every call returns the recorded pick without
//! re-selecting or touching any timestamp. When a new day arrives, the
//! character with the oldest last-proposed date wins, with never-proposed
//! characters exhausted first and ties broken by catalog order. The old
//! day's record is replaced, not retained.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

use gom_core::{Catalog, CharacterId};

use crate::error::{EngineError, EngineResult, StateError};
use crate::select::SelectionPolicy;

/// The character recorded as a given day's challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickOfDay {
    /// The chosen character.
    pub character: CharacterId,
    /// The day the choice was recorded for.
    pub date: NaiveDate,
}

/// Serialized rotation state. At most one pick exists per distinct date;
/// recording a new day's pick supersedes the previous one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RecencyState {
    /// When each character was last proposed. Absent means never.
    #[serde(default)]
    last_proposed: HashMap<CharacterId, NaiveDate>,
    /// The current day's recorded pick.
    #[serde(default)]
    pick_of_day: Option<PickOfDay>,
}

/// Least-recently-proposed selection, persisted across restarts.
///
/// The whole read-decide-write sequence for a date runs under one mutex, so
/// two concurrent "begin" events cannot both record different characters as
/// the same day's pick.
#[derive(Debug)]
pub struct DailyRotation {
    path: PathBuf,
    lock: Mutex<()>,
}

impl DailyRotation {
    /// Open a rotation backed by the given state file.
    ///
    /// The file is created on the first recorded pick; a missing file means
    /// a fresh rotation where no character has ever been proposed.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The pick recorded for `date`, if any, without selecting.
    pub fn recorded_for(&self, date: NaiveDate) -> EngineResult<Option<PickOfDay>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let state = self.load()?;
        Ok(state.pick_of_day.filter(|pick| pick.date == date))
    }

    /// Choose — or return the already-recorded — character for `date`.
    pub fn choose_for(&self, catalog: &Catalog, date: NaiveDate) -> EngineResult<CharacterId> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut state = self.load()?;

        if let Some(pick) = state.pick_of_day
            && pick.date == date
        {
            if catalog.get(pick.character).is_some() {
                return Ok(pick.character);
            }
            // Catalog shrank between runs; the recorded id no longer
            // resolves, so fall through to a fresh selection.
            warn!(
                "recorded pick {} for {date} not in catalog, re-selecting",
                pick.character
            );
        }

        let chosen = select_least_recent(catalog, &state.last_proposed)
            .ok_or(EngineError::EmptyCatalog)?;
        state.last_proposed.insert(chosen, date);
        state.pick_of_day = Some(PickOfDay {
            character: chosen,
            date,
        });
        self.save(&state)?;
        Ok(chosen)
    }

    fn load(&self) -> Result<RecencyState, StateError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data).map_err(|source| StateError::Corrupt {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RecencyState::default()),
            Err(source) => Err(StateError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, state: &RecencyState) -> Result<(), StateError> {
        let data = serde_json::to_string_pretty(state).map_err(StateError::Encode)?;
        fs::write(&self.path, data).map_err(|source| StateError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Path of the backing state file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionPolicy for DailyRotation {
    fn choose(&mut self, catalog: &Catalog) -> EngineResult<CharacterId> {
        self.choose_for(catalog, Local::now().date_naive())
    }
}

/// The character with the smallest last-proposed date. Never-proposed
/// (absent) orders before any real date; ties keep catalog order.
fn select_least_recent(
    catalog: &Catalog,
    last_proposed: &HashMap<CharacterId, NaiveDate>,
) -> Option<CharacterId> {
    let mut best: Option<(CharacterId, Option<NaiveDate>)> = None;
    for character in catalog.characters() {
        let proposed = last_proposed.get(&character.id).copied();
        let replaces = match best {
            None => true,
            // Strict: on a tie the earlier catalog entry stays.
            Some((_, current)) => proposed < current,
        };
        if replaces {
            best = Some((character.id, proposed));
        }
    }
    best.map(|(id, _)| id)
}
