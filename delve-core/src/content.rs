//! Built-in world content.
//!
//! The reference world is two rooms: the Grand Hall, where play starts and a
//! golden chalice waits to be found, and the Armoury to its north with a
//! rusty sword.

use crate::blueprint::{MapBlueprint, RoomBlueprint};
use crate::direction::Direction;
use crate::item::InventoryItem;
use crate::map::{ConnectionTable, Map, MapError};

pub const GRAND_HALL: &str = "GrandHall";
pub const ARMOURY: &str = "Armoury";

pub const GRAND_HALL_DESCRIPTION: &str = "You are in the Grand Hall. It is a vast, echoing chamber.";
pub const ARMOURY_DESCRIPTION: &str = "You are in the Armoury. Racks of dusty weapons line the walls.";

pub const CHALICE_USE_MESSAGE: &str =
    "You hold the golden chalice aloft. It glints in the light and feels cool to the touch.\n";

lazy_static::lazy_static! {
    /// The reference world.
    pub static ref REFERENCE_WORLD: MapBlueprint = {
        let mut connections = ConnectionTable::new();
        connections
            .entry(GRAND_HALL.to_string())
            .or_default()
            .insert(Direction::North, ARMOURY.to_string());

        MapBlueprint {
            starting_room: GRAND_HALL.to_string(),
            rooms: vec![
                RoomBlueprint::new(GRAND_HALL, GRAND_HALL_DESCRIPTION).with_item(
                    InventoryItem::new("golden chalice").with_use_message(CHALICE_USE_MESSAGE),
                ),
                RoomBlueprint::new(ARMOURY, ARMOURY_DESCRIPTION)
                    .with_item(InventoryItem::new("rusty sword")),
            ],
            connections,
        }
    };
}

/// A copy of the reference world description.
pub fn reference_blueprint() -> MapBlueprint {
    REFERENCE_WORLD.clone()
}

/// Build a fresh map of the reference world.
pub fn create_map() -> Result<Map, MapError> {
    Map::from_blueprint(&REFERENCE_WORLD)
}
