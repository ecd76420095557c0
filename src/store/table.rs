//! In-memory form of the win record and its JSON codec.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::Result;
use crate::core::PlayerRegistry;

/// Win counts keyed by player name.
///
/// Encoded as a flat JSON object: `{"Alice":3,"Bob":1}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinTable {
    wins: FxHashMap<String, u32>,
}

impl WinTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current win counts of every seated player.
    ///
    /// Players sharing a name share an entry holding the highest count among
    /// them, so a win credited to either seat is never dropped.
    #[must_use]
    pub fn from_players(players: &PlayerRegistry) -> Self {
        let mut wins: FxHashMap<String, u32> = FxHashMap::default();
        for (_, player) in players.iter() {
            let entry = wins.entry(player.name.clone()).or_insert(0);
            *entry = (*entry).max(player.wins);
        }
        Self { wins }
    }

    /// Decode a stored record.
    ///
    /// Anything that is not a JSON object of non-negative integers decodes
    /// as an empty table.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(table) => table,
            Err(err) => {
                warn!(%err, "corrupted win record, starting from empty");
                Self::default()
            }
        }
    }

    /// Encode for storage, keys sorted.
    pub fn encode(&self) -> Result<String> {
        let sorted: BTreeMap<&str, u32> = self.wins.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        Ok(serde_json::to_string(&sorted)?)
    }

    /// Wins for `name`, 0 if unknown.
    #[must_use]
    pub fn get(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Set the count for `name`.
    pub fn set(&mut self, name: impl Into<String>, wins: u32) {
        self.wins.insert(name.into(), wins);
    }

    /// Number of names recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    /// True when nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }
}
