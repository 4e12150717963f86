//! Roster storage interface and implementations
//!
//! This module defines the interface for persisting and retrieving roster
//! players, with an in-memory implementation used by the service.

use crate::error::{DraftError, Result};
use crate::roster::validation::{validate_input, validate_patch};
use crate::types::{Player, PlayerId, PlayerInput, PlayerPatch};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

/// Trait for roster storage operations
///
/// Listing and search results are ordered by name, then id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Get every player on the roster
    async fn list_players(&self) -> Result<Vec<Player>>;

    /// Get a single player
    async fn get_player(&self, id: PlayerId) -> Result<Option<Player>>;

    /// Get several players in the order requested
    ///
    /// Fails with [`DraftError::PlayerNotFound`] for the first unknown id.
    async fn get_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>>;

    /// Validate and store a new player, assigning its id
    async fn create_player(&self, input: PlayerInput) -> Result<Player>;

    /// Validate and apply an update; `None` if the player does not exist
    async fn update_player(&self, id: PlayerId, patch: PlayerPatch) -> Result<Option<Player>>;

    /// Remove a player, returning the removed record
    async fn delete_player(&self, id: PlayerId) -> Result<Option<Player>>;

    /// Players whose name contains `query`, ignoring case
    async fn search_players(&self, query: &str) -> Result<Vec<Player>>;

    /// Total number of players on the roster
    async fn player_count(&self) -> Result<usize>;
}

#[derive(Debug)]
struct RosterState {
    players: BTreeMap<PlayerId, Player>,
    next_id: PlayerId,
}

/// In-memory roster storage implementation
#[derive(Debug)]
pub struct InMemoryRosterStore {
    state: RwLock<RosterState>,
    max_players: usize,
}

impl InMemoryRosterStore {
    /// Create a new in-memory roster holding at most `max_players`
    pub fn new(max_players: usize) -> Self {
        Self {
            state: RwLock::new(RosterState {
                players: BTreeMap::new(),
                next_id: 1,
            }),
            max_players,
        }
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, RosterState>> {
        self.state.read().map_err(|_| {
            DraftError::Storage {
                message: "Failed to acquire roster read lock".to_string(),
            }
            .into()
        })
    }

    fn write_state(&self) -> Result<std::sync::RwLockWriteGuard<'_, RosterState>> {
        self.state.write().map_err(|_| {
            DraftError::Storage {
                message: "Failed to acquire roster write lock".to_string(),
            }
            .into()
        })
    }
}

impl Default for InMemoryRosterStore {
    fn default() -> Self {
        Self::new(500)
    }
}

fn sorted_by_name(mut players: Vec<Player>) -> Vec<Player> {
    players.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    players
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn list_players(&self) -> Result<Vec<Player>> {
        let state = self.read_state()?;
        Ok(sorted_by_name(state.players.values().cloned().collect()))
    }

    async fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let state = self.read_state()?;
        Ok(state.players.get(&id).cloned())
    }

    async fn get_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        let state = self.read_state()?;
        ids.iter()
            .map(|id| {
                state
                    .players
                    .get(id)
                    .cloned()
                    .ok_or_else(|| anyhow::Error::from(DraftError::PlayerNotFound { player_id: *id }))
            })
            .collect()
    }

    async fn create_player(&self, input: PlayerInput) -> Result<Player> {
        validate_input(&input)?;

        let mut state = self.write_state()?;
        if state.players.len() >= self.max_players {
            return Err(DraftError::RosterFull {
                capacity: self.max_players,
            }
            .into());
        }

        let id = state.next_id;
        state.next_id += 1;

        let player = Player::new(id, input.name, input.photo_url, input.skills);
        state.players.insert(id, player.clone());

        debug!("Created player {} ({})", player.id, player.name);
        Ok(player)
    }

    async fn update_player(&self, id: PlayerId, patch: PlayerPatch) -> Result<Option<Player>> {
        validate_patch(&patch)?;

        let mut state = self.write_state()?;
        let Some(player) = state.players.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(player);
        debug!("Updated player {} ({})", player.id, player.name);
        Ok(Some(player.clone()))
    }

    async fn delete_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let mut state = self.write_state()?;
        let removed = state.players.remove(&id);
        if let Some(player) = &removed {
            debug!("Deleted player {} ({})", player.id, player.name);
        }
        Ok(removed)
    }

    async fn search_players(&self, query: &str) -> Result<Vec<Player>> {
        let needle = query.to_lowercase();
        let state = self.read_state()?;
        Ok(sorted_by_name(
            state
                .players
                .values()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        ))
    }

    async fn player_count(&self) -> Result<usize> {
        let state = self.read_state()?;
        Ok(state.players.len())
    }
}
