//! Room persistence boundary.
//!
//! The engine only ever reads a room once, when its session starts. Hosts
//! plug their own storage in behind `Repository`.

use std::fmt;
use std::sync::RwLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::setup::RoomSetup;

/// Room name, unique per host.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Read-only access to room configuration.
pub trait Repository: Send + Sync {
    /// Rules, map, roster and seed for `room`.
    fn load_room(&self, room: &RoomId) -> Result<RoomSetup>;
}

/// Rooms kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    rooms: RwLock<FxHashMap<RoomId, RoomSetup>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a room.
    pub fn insert(&self, room: RoomId, setup: RoomSetup) -> Result<()> {
        self.rooms
            .write()
            .map_err(|_| GameError::Consistency("room table lock poisoned".to_string()))?
            .insert(room, setup);
        Ok(())
    }

    #[must_use]
    pub fn with_room(self, room: impl Into<RoomId>, setup: RoomSetup) -> Self {
        if let Ok(mut rooms) = self.rooms.write() {
            rooms.insert(room.into(), setup);
        }
        self
    }
}

impl Repository for InMemoryRepository {
    fn load_room(&self, room: &RoomId) -> Result<RoomSetup> {
        self.rooms
            .read()
            .map_err(|_| GameError::Consistency("room table lock poisoned".to_string()))?
            .get(room)
            .cloned()
            .ok_or_else(|| GameError::RoomNotFound(room.to_string()))
    }
}
