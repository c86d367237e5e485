//! The room graph and navigation.
//!
//! A [`Map`] is built once from a list of rooms and a table of forward
//! connections. Every forward edge `A --d--> B` is stored together with its
//! reverse `B --opposite(d)--> A`, so content only needs to name one side of
//! each passage. After construction the topology never changes; only the
//! items lying in rooms do.

use crate::blueprint::MapBlueprint;
use crate::direction::{Direction, ALL_DIRECTIONS};
use crate::room::{Room, RoomName};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Forward connections keyed by source room, then by direction.
pub type ConnectionTable = BTreeMap<RoomName, BTreeMap<Direction, RoomName>>;

/// Integrity errors raised while building or querying a map.
///
/// These indicate broken content or a caller holding a room name the map
/// never issued. They are never the result of a player action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("Unknown room: {0}")]
    UnknownRoom(RoomName),

    #[error("Room {0} is defined more than once")]
    DuplicateRoom(RoomName),

    #[error("Room {room} already leads {direction} to {existing}, cannot also lead to {requested}")]
    ConflictingConnection {
        room: RoomName,
        direction: Direction,
        existing: RoomName,
        requested: RoomName,
    },

    #[error("Starting room {0} is not on the map")]
    UnknownStartingRoom(RoomName),
}

/// All rooms of a session, keyed by name.
#[derive(Debug, Clone)]
pub struct Map {
    rooms: HashMap<RoomName, Room>,
    starting_room: RoomName,
}

impl Map {
    /// Build a map and wire every connection in both directions.
    pub fn new(
        rooms: impl IntoIterator<Item = Room>,
        connections: &ConnectionTable,
        starting_room: impl Into<RoomName>,
    ) -> Result<Self, MapError> {
        let mut by_name = HashMap::new();
        for room in rooms {
            let name = room.name().to_string();
            if by_name.insert(name.clone(), room).is_some() {
                return Err(MapError::DuplicateRoom(name));
            }
        }

        let starting_room = starting_room.into();
        if !by_name.contains_key(&starting_room) {
            return Err(MapError::UnknownStartingRoom(starting_room));
        }

        let mut map = Self {
            rooms: by_name,
            starting_room,
        };

        for (from, edges) in connections {
            for (&direction, to) in edges {
                // Check both ends before touching either room
                map.room(from)?;
                map.room(to)?;
                map.wire(from, direction, to)?;
                map.wire(to, direction.opposite(), from)?;
            }
        }

        tracing::debug!(
            rooms = map.rooms.len(),
            start = %map.starting_room,
            "Built map"
        );
        Ok(map)
    }

    /// Build a map from a content description.
    pub fn from_blueprint(blueprint: &MapBlueprint) -> Result<Self, MapError> {
        let rooms = blueprint.rooms.iter().map(|r| {
            Room::new(r.name.clone(), r.description.clone()).with_items(r.items.iter().cloned())
        });
        Self::new(rooms, &blueprint.connections, blueprint.starting_room.clone())
    }

    fn wire(&mut self, from: &str, direction: Direction, to: &str) -> Result<(), MapError> {
        let room = self.get_room(from)?;
        match room.connection(direction) {
            Some(existing) if existing != to => Err(MapError::ConflictingConnection {
                room: from.to_string(),
                direction,
                existing: existing.clone(),
                requested: to.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                room.add_connection(direction, to);
                Ok(())
            }
        }
    }

    /// Where leaving `current` in `direction` leads, if anywhere.
    ///
    /// A missing exit is an ordinary outcome and yields `Ok(None)`; only an
    /// unknown `current` room is an error.
    pub fn next_room(&self, current: &str, direction: Direction) -> Result<Option<RoomName>, MapError> {
        Ok(self.room(current)?.connection(direction).cloned())
    }

    /// Directions with an exit from `current`, in North, South, East, West order.
    pub fn available_directions(&self, current: &str) -> Result<Vec<Direction>, MapError> {
        let room = self.room(current)?;
        Ok(ALL_DIRECTIONS
            .into_iter()
            .filter(|&d| room.connection(d).is_some())
            .collect())
    }

    pub fn room(&self, name: &str) -> Result<&Room, MapError> {
        self.rooms.get(name).ok_or_else(|| {
            tracing::warn!(room = name, "Lookup of unknown room");
            MapError::UnknownRoom(name.to_string())
        })
    }

    pub fn get_room(&mut self, name: &str) -> Result<&mut Room, MapError> {
        self.rooms.get_mut(name).ok_or_else(|| {
            tracing::warn!(room = name, "Lookup of unknown room");
            MapError::UnknownRoom(name.to_string())
        })
    }

    /// The description shown on entering `name`.
    pub fn get_welcome_message(&self, name: &str) -> Result<&str, MapError> {
        Ok(self.room(name)?.description())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    pub fn starting_room(&self) -> &str {
        &self.starting_room
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::InventoryItem;

    fn table(edges: &[(&str, Direction, &str)]) -> ConnectionTable {
        let mut table = ConnectionTable::new();
        for (from, direction, to) in edges {
            table
                .entry(from.to_string())
                .or_default()
                .insert(*direction, to.to_string());
        }
        table
    }

    fn two_rooms() -> Vec<Room> {
        vec![
            Room::new("Hall", "A hall.").with_item(InventoryItem::new("chalice")),
            Room::new("Armoury", "An armoury."),
        ]
    }

    #[test]
    fn test_reverse_edges_are_derived() {
        let map = Map::new(two_rooms(), &table(&[("Hall", Direction::North, "Armoury")]), "Hall").unwrap();

        assert_eq!(map.next_room("Hall", Direction::North).unwrap().as_deref(), Some("Armoury"));
        assert_eq!(map.next_room("Armoury", Direction::South).unwrap().as_deref(), Some("Hall"));
        assert_eq!(map.next_room("Hall", Direction::South).unwrap(), None);
        assert_eq!(map.next_room("Armoury", Direction::East).unwrap(), None);
    }

    #[test]
    fn test_available_directions_are_ordered() {
        let rooms = vec![
            Room::new("Centre", ""),
            Room::new("N", ""),
            Room::new("W", ""),
            Room::new("E", ""),
        ];
        let map = Map::new(
            rooms,
            &table(&[
                ("Centre", Direction::West, "W"),
                ("Centre", Direction::North, "N"),
                ("E", Direction::West, "Centre"),
            ]),
            "Centre",
        )
        .unwrap();

        assert_eq!(
            map.available_directions("Centre").unwrap(),
            vec![Direction::North, Direction::East, Direction::West]
        );
        assert_eq!(map.available_directions("N").unwrap(), vec![Direction::South]);
    }

    #[test]
    fn test_unknown_room_is_an_error() {
        let mut map = Map::new(two_rooms(), &ConnectionTable::new(), "Hall").unwrap();
        assert_eq!(
            map.next_room("Attic", Direction::North),
            Err(MapError::UnknownRoom("Attic".to_string()))
        );
        assert!(map.get_room("Attic").is_err());
        assert!(map.get_welcome_message("Attic").is_err());
    }

    #[test]
    fn test_welcome_message_is_description() {
        let map = Map::new(two_rooms(), &ConnectionTable::new(), "Hall").unwrap();
        assert_eq!(map.get_welcome_message("Armoury").unwrap(), "An armoury.");
    }

    #[test]
    fn test_get_room_mutates_in_place() {
        let mut map = Map::new(two_rooms(), &ConnectionTable::new(), "Hall").unwrap();
        map.get_room("Armoury")
            .unwrap()
            .add_to_inventory(InventoryItem::new("shield"));
        assert_eq!(map.room("Armoury").unwrap().items().len(), 1);
    }

    #[test]
    fn test_connection_to_unknown_room_rejected() {
        let result = Map::new(two_rooms(), &table(&[("Hall", Direction::East, "Garden")]), "Hall");
        assert_eq!(result.unwrap_err(), MapError::UnknownRoom("Garden".to_string()));
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let rooms = vec![Room::new("Hall", "one"), Room::new("Hall", "two")];
        let result = Map::new(rooms, &ConnectionTable::new(), "Hall");
        assert_eq!(result.unwrap_err(), MapError::DuplicateRoom("Hall".to_string()));
    }

    #[test]
    fn test_unknown_starting_room_rejected() {
        let result = Map::new(two_rooms(), &ConnectionTable::new(), "GrandHall");
        assert_eq!(
            result.unwrap_err(),
            MapError::UnknownStartingRoom("GrandHall".to_string())
        );
    }

    #[test]
    fn test_both_sides_may_be_declared() {
        let map = Map::new(
            two_rooms(),
            &table(&[
                ("Hall", Direction::North, "Armoury"),
                ("Armoury", Direction::South, "Hall"),
            ]),
            "Hall",
        )
        .unwrap();
        assert_eq!(map.available_directions("Hall").unwrap(), vec![Direction::North]);
    }

    #[test]
    fn test_conflicting_edges_rejected() {
        let rooms = vec![Room::new("A", ""), Room::new("B", ""), Room::new("C", "")];
        // A->North->B implies B->South->A, which C->North->B would overwrite
        let result = Map::new(
            rooms,
            &table(&[("A", Direction::North, "B"), ("C", Direction::North, "B")]),
            "A",
        );
        assert!(matches!(
            result,
            Err(MapError::ConflictingConnection { direction: Direction::South, .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn edges() -> impl Strategy<Value = (usize, Vec<(usize, Direction, usize)>)> {
            (2usize..8).prop_flat_map(|n| {
                let edge = (0..n, prop::sample::select(ALL_DIRECTIONS.to_vec()), 0..n);
                (Just(n), prop::collection::vec(edge, 0..12))
            })
        }

        proptest! {
            #[test]
            fn every_edge_has_its_reverse((n, raw) in edges()) {
                let rooms: Vec<Room> = (0..n).map(|i| Room::new(format!("R{i}"), "")).collect();
                let mut connections = ConnectionTable::new();
                for (from, direction, to) in &raw {
                    connections
                        .entry(format!("R{from}"))
                        .or_default()
                        .insert(*direction, format!("R{to}"));
                }

                match Map::new(rooms, &connections, "R0") {
                    Ok(map) => {
                        for room in map.rooms() {
                            for (&direction, target) in room.connections() {
                                let back = map.next_room(target, direction.opposite()).unwrap();
                                prop_assert_eq!(back.as_deref(), Some(room.name()));
                            }
                        }
                        for (from, edges) in &connections {
                            for (&direction, to) in edges {
                                let next = map.next_room(from, direction).unwrap();
                                prop_assert_eq!(next.as_ref(), Some(to));
                            }
                        }
                    }
                    Err(err) => {
                        let is_conflict = matches!(err, MapError::ConflictingConnection { .. });
                        prop_assert!(is_conflict);
                    }
                }
            }
        }
    }
}
