//! The player: where they stand and what they carry.

use crate::item::InventoryItem;
use crate::room::RoomName;

/// Player state. Holds no rules; the game validates every change first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    current_room: RoomName,
    inventory: Vec<InventoryItem>,
}

impl Player {
    pub fn new(current_room: impl Into<RoomName>) -> Self {
        Self {
            current_room: current_room.into(),
            inventory: Vec::new(),
        }
    }

    pub fn get_current_room(&self) -> &str {
        &self.current_room
    }

    pub fn change_room(&mut self, room: impl Into<RoomName>) {
        self.current_room = room.into();
    }

    /// Carried items in the order they were picked up.
    pub fn get_inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn get_mutable_inventory(&mut self) -> &mut Vec<InventoryItem> {
        &mut self.inventory
    }

    /// Append an item. Duplicates are kept.
    pub fn add_to_inventory(&mut self, item: InventoryItem) {
        self.inventory.push(item);
    }
}
