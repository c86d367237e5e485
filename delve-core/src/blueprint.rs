//! Serializable description of a map's content.
//!
//! A blueprint is what world files contain: rooms with their items, the
//! forward connections between them, and the room the player starts in.
//!
//! ```json
//! {
//!   "starting_room": "GrandHall",
//!   "rooms": [
//!     { "name": "GrandHall", "description": "A vast hall.",
//!       "items": [{ "name": "golden chalice", "use_message": "It glints.\n" }] },
//!     { "name": "Armoury", "description": "Dusty racks." }
//!   ],
//!   "connections": { "GrandHall": { "North": "Armoury" } }
//! }
//! ```

use crate::item::InventoryItem;
use crate::map::{ConnectionTable, Map, MapError};
use crate::room::RoomName;
use serde::{Deserialize, Serialize};

/// One room as written in content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBlueprint {
    pub name: RoomName,
    pub description: String,
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

impl RoomBlueprint {
    pub fn new(name: impl Into<RoomName>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: InventoryItem) -> Self {
        self.items.push(item);
        self
    }
}

/// A complete map description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBlueprint {
    pub starting_room: RoomName,
    pub rooms: Vec<RoomBlueprint>,
    /// Forward edges only; reverse edges are derived when the map is built.
    #[serde(default)]
    pub connections: ConnectionTable,
}

impl MapBlueprint {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Build a playable map from this description.
    pub fn build(&self) -> Result<Map, MapError> {
        Map::from_blueprint(self)
    }
}
