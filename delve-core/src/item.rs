//! Items found in rooms and carried by the player.

use serde::{Deserialize, Serialize};

/// An item that can lie in a room or sit in the player's inventory.
///
/// Items are plain values compared on every field. Moving one between a
/// room and the player copies it into the destination and removes it from
/// the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    /// Shown when the item is used. May be empty.
    #[serde(default)]
    pub use_message: String,
    /// Set once the room holding the item has been investigated.
    #[serde(default)]
    pub is_visible: bool,
}

impl InventoryItem {
    /// Create a hidden item with no use message.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            use_message: String::new(),
            is_visible: false,
        }
    }

    pub fn with_use_message(mut self, message: impl Into<String>) -> Self {
        self.use_message = message.into();
        self
    }

    pub fn visible(mut self) -> Self {
        self.is_visible = true;
        self
    }
}
