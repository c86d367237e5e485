//! The game controller.
//!
//! [`Game`] owns the map and the player and runs the turn loop: ask the
//! interface for an action, check it against the current state, apply it,
//! and report exactly one result message. Player mistakes (a wall where
//! they tried to walk, an item they have not found yet) are ordinary
//! messages. Only broken invariants and front end failures come back as
//! [`GameError`].

use crate::direction::Direction;
use crate::interface::{Action, InterfaceError, PlayerInterface};
use crate::item::InventoryItem;
use crate::map::{Map, MapError};
use crate::player::Player;
use thiserror::Error;

/// Errors that stop the turn loop.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Interface error: {0}")]
    Interface(#[from] InterfaceError),
}

/// One completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub turn: usize,
    pub action: Action,
    /// The result message the turn produced.
    pub message: String,
}

/// A single-player session.
pub struct Game<I> {
    map: Map,
    player: Player,
    interface: I,
    current_message: String,
    transcript: Vec<TranscriptEntry>,
}

impl<I: PlayerInterface> Game<I> {
    /// Start a session with a new player in the map's starting room.
    pub fn new(map: Map, interface: I) -> Self {
        let player = Player::new(map.starting_room());
        Self {
            map,
            player,
            interface,
            current_message: String::new(),
            transcript: Vec::new(),
        }
    }

    /// Start a session with an existing player.
    pub fn with_player(map: Map, player: Player, interface: I) -> Result<Self, GameError> {
        map.room(player.get_current_room())?;
        Ok(Self {
            map,
            player,
            interface,
            current_message: String::new(),
            transcript: Vec::new(),
        })
    }

    /// Greet the player with the description of the room they stand in.
    pub fn welcome(&mut self) -> Result<(), GameError> {
        let message = self
            .map
            .get_welcome_message(self.player.get_current_room())?
            .to_string();
        self.update_message(message)
    }

    /// Play until the player quits.
    pub fn run(&mut self) -> Result<(), GameError> {
        tracing::info!(start = self.current_location(), "Session started");
        self.welcome()?;
        while self.handle_user_action()? {}
        tracing::info!(turns = self.turn_count(), "Session ended");
        Ok(())
    }

    /// Play one turn. Returns `false` once the player quits.
    pub fn handle_user_action(&mut self) -> Result<bool, GameError> {
        let action = self.interface.get_action()?;
        tracing::trace!(%action, room = self.current_location(), "Dispatching action");

        match action {
            Action::Quit => return Ok(false),
            Action::Move => {
                let directions = self.get_available_directions()?;
                self.interface.provide_directions(&directions)?;
                let direction = self.interface.get_direction()?;
                self.move_player(direction)?;
            }
            Action::Investigate => {
                let announcement = format!("Investigating {}", self.current_location());
                self.interface.provide_message(&announcement)?;
                self.investigate()?;
            }
            Action::TakeItem => {
                self.interface.provide_message("What do you want to take?")?;
                let name = self.interface.get_item_name()?;
                self.take_item(&name)?;
            }
            Action::UseItem => {
                self.interface.provide_message("What do you want to use?")?;
                let name = self.interface.get_item_name()?;
                self.use_item(&name)?;
            }
            Action::DropItem => {
                self.interface.provide_message("What do you want to drop?")?;
                let name = self.interface.get_item_name()?;
                self.drop_item(&name)?;
            }
            Action::DisplayInventory => self.display_player_inventory()?,
        }

        self.transcript.push(TranscriptEntry {
            turn: self.transcript.len() + 1,
            action,
            message: self.current_message.clone(),
        });
        Ok(true)
    }

    /// Walk through the exit in `direction`, if there is one.
    pub fn move_player(&mut self, direction: Direction) -> Result<(), GameError> {
        let next = self.map.next_room(self.player.get_current_room(), direction)?;
        match next {
            Some(room) => {
                tracing::debug!(from = self.current_location(), to = %room, %direction, "Player moved");
                let message = self.map.get_welcome_message(&room)?.to_string();
                self.player.change_room(room);
                self.update_message(message)
            }
            None => self.update_message("Wrong direction!\n"),
        }
    }

    /// Search the current room, revealing everything in it.
    pub fn investigate(&mut self) -> Result<(), GameError> {
        let room = self.map.get_room(self.player.get_current_room())?;
        let items = room.inventory();
        if items.is_empty() {
            return self.update_message("You search the room. Nothing found!\n");
        }

        let mut message = String::from("You search the room. You found");
        for item in items.iter_mut() {
            item.is_visible = true;
            message.push_str(" a ");
            message.push_str(&item.name);
        }
        message.push_str("!\n");
        self.update_message(message)
    }

    /// Pick up the first revealed item called `item_name`.
    pub fn take_item(&mut self, item_name: &str) -> Result<(), GameError> {
        let room = self.map.get_room(self.player.get_current_room())?;
        let found = room
            .items()
            .iter()
            .position(|item| item.name == item_name && item.is_visible);

        match found {
            Some(idx) => {
                let item = room.inventory().remove(idx);
                tracing::debug!(item = %item.name, room = room.name(), "Item taken");
                self.player.add_to_inventory(item);
                self.update_message(format!("You take the {item_name}\n"))
            }
            None => self.update_message(format!("You can't take the {item_name}\n")),
        }
    }

    /// Use up the first carried item called `item_name`.
    pub fn use_item(&mut self, item_name: &str) -> Result<(), GameError> {
        match self.remove_carried(item_name) {
            Some(item) => {
                tracing::debug!(item = %item.name, "Item used");
                self.update_message(item.use_message)
            }
            None => self.update_message(format!("You can't use the {item_name}!\n")),
        }
    }

    /// Leave the first carried item called `item_name` in the current room.
    ///
    /// The item keeps its visibility, so it can be taken again without
    /// another search.
    pub fn drop_item(&mut self, item_name: &str) -> Result<(), GameError> {
        // Resolve the room first so a broken location leaves the inventory intact
        self.map.room(self.player.get_current_room())?;
        match self.remove_carried(item_name) {
            Some(item) => {
                tracing::debug!(item = %item.name, room = self.current_location(), "Item dropped");
                self.map
                    .get_room(self.player.get_current_room())?
                    .add_to_inventory(item);
                self.update_message(format!(
                    "You drop the {item_name}. It fades away in the darkness.\n"
                ))
            }
            None => self.update_message(format!("You can't drop the {item_name}!\n")),
        }
    }

    /// List what the player carries, in pickup order.
    pub fn display_player_inventory(&mut self) -> Result<(), GameError> {
        let mut message = String::from("Your inventory contains:");
        for item in self.player.get_inventory() {
            message.push(' ');
            message.push_str(&item.name);
        }
        message.push_str(".\n");
        self.update_message(message)
    }

    /// Exits from the current room, in North, South, East, West order.
    pub fn get_available_directions(&self) -> Result<Vec<Direction>, GameError> {
        Ok(self.map.available_directions(self.player.get_current_room())?)
    }

    fn remove_carried(&mut self, item_name: &str) -> Option<InventoryItem> {
        let inventory = self.player.get_mutable_inventory();
        let idx = inventory.iter().position(|item| item.name == item_name)?;
        Some(inventory.remove(idx))
    }

    fn update_message(&mut self, message: impl Into<String>) -> Result<(), GameError> {
        self.current_message = message.into();
        self.interface.provide_message(&self.current_message)?;
        Ok(())
    }
}

impl<I> Game<I> {
    /// The last result message.
    pub fn current_message(&self) -> &str {
        &self.current_message
    }

    /// Name of the room the player stands in.
    pub fn current_location(&self) -> &str {
        self.player.get_current_room()
    }

    /// The player's position and inventory.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The world, including every room's current items.
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// The front end this game talks to.
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Mutable access to the front end, e.g. to queue more scripted input.
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Every completed turn, oldest first. Quit is not recorded.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Number of completed turns.
    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    /// Consume the game, returning the interface.
    pub fn into_interface(self) -> I {
        self.interface
    }
}
