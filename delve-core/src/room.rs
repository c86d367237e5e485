//! A single location on the map.

use crate::direction::Direction;
use crate::item::InventoryItem;
use std::collections::BTreeMap;

/// Rooms are identified by name throughout the engine.
pub type RoomName = String;

/// A named room with a description, the items lying in it, and its exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: RoomName,
    description: String,
    items: Vec<InventoryItem>,
    connections: BTreeMap<Direction, RoomName>,
}

impl Room {
    pub fn new(name: impl Into<RoomName>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            connections: BTreeMap::new(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = InventoryItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_item(mut self, item: InventoryItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text shown when the player enters the room.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Items in discovery order.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Mutable access for searching, taking and dropping.
    pub fn inventory(&mut self) -> &mut Vec<InventoryItem> {
        &mut self.items
    }

    pub fn add_to_inventory(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Remove every item equal to `item`. Returns whether any were removed.
    pub fn remove_from_inventory(&mut self, item: &InventoryItem) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i != item);
        self.items.len() != before
    }

    /// The room reached by leaving in `direction`, if there is an exit.
    pub fn connection(&self, direction: Direction) -> Option<&RoomName> {
        self.connections.get(&direction)
    }

    pub fn connections(&self) -> &BTreeMap<Direction, RoomName> {
        &self.connections
    }

    /// Set the exit in `direction`, returning the target it replaced.
    ///
    /// Map construction never uses this to replace an existing exit; it is
    /// for content tools that rewire a room after the fact.
    pub fn add_connection(
        &mut self,
        direction: Direction,
        room: impl Into<RoomName>,
    ) -> Option<RoomName> {
        self.connections.insert(direction, room.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> InventoryItem {
        InventoryItem::new("rusty sword")
    }

    #[test]
    fn test_new_room_is_empty() {
        let room = Room::new("Cellar", "It is damp.");
        assert_eq!(room.name(), "Cellar");
        assert_eq!(room.description(), "It is damp.");
        assert!(room.items().is_empty());
        assert!(room.connections().is_empty());
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut room = Room::new("Cellar", "");
        room.add_to_inventory(sword());
        room.add_to_inventory(InventoryItem::new("torch"));
        assert_eq!(room.items().len(), 2);

        assert!(room.remove_from_inventory(&sword()));
        assert_eq!(room.items(), &[InventoryItem::new("torch")]);
    }

    #[test]
    fn test_remove_requires_full_equality() {
        let mut room = Room::new("Cellar", "").with_item(sword().visible());

        // Same name, different visibility: not the same item
        assert!(!room.remove_from_inventory(&sword()));
        assert_eq!(room.items().len(), 1);
    }

    #[test]
    fn test_remove_clears_every_duplicate() {
        let torch = InventoryItem::new("torch");
        let mut room = Room::new("Cellar", "").with_items([sword(), torch.clone(), sword()]);
        assert!(room.remove_from_inventory(&sword()));
        assert_eq!(room.items(), &[torch]);
        assert!(!room.remove_from_inventory(&sword()));
    }

    #[test]
    fn test_connections() {
        let mut room = Room::new("Hall", "");
        assert_eq!(room.add_connection(Direction::North, "Armoury"), None);
        assert_eq!(room.connection(Direction::North).map(String::as_str), Some("Armoury"));
        assert_eq!(room.connection(Direction::South), None);

        let previous = room.add_connection(Direction::North, "Kitchen");
        assert_eq!(previous.as_deref(), Some("Armoury"));
        assert_eq!(room.connection(Direction::North).map(String::as_str), Some("Kitchen"));
    }
}
