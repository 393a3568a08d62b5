//! Lookup table of live rooms.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::info;

use super::game_room::Room;
use crate::core::RoomConfig;

/// All live rooms, by name.
///
/// The registry lock only guards the map. Once a caller holds an
/// `Arc<Room>` it works on that room alone, so moves in different rooms
/// never wait on each other.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    default_config: RoomConfig,
    rooms: RwLock<FxHashMap<String, Arc<Room>>>,
}

impl RoomRegistry {
    /// Create a registry whose new rooms use `default_config`.
    #[must_use]
    pub fn new(default_config: RoomConfig) -> Self {
        Self {
            default_config,
            rooms: RwLock::new(FxHashMap::default()),
        }
    }

    /// Get a room, creating it with the default config if needed.
    pub fn get_or_create(&self, name: &str) -> Arc<Room> {
        if let Some(room) = self.get(name) {
            return room;
        }
        let mut rooms = self.rooms.write();
        rooms
            .entry(name.to_string())
            .or_insert_with(|| {
                info!(room = name, "room created");
                Arc::new(Room::new(name, self.default_config.clone()))
            })
            .clone()
    }

    /// Get an existing room.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Room>> {
        self.rooms.read().get(name).cloned()
    }

    /// Remove a room. Holders of its `Arc` can keep using it.
    pub fn remove(&self, name: &str) -> Option<Arc<Room>> {
        let removed = self.rooms.write().remove(name);
        if removed.is_some() {
            info!(room = name, "room removed");
        }
        removed
    }

    /// Number of live rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.read().len()
    }

    /// Whether there are no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.read().is_empty()
    }

    /// Names of all live rooms, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rooms.read().keys().cloned().collect();
        names.sort();
        names
    }
}
