//! Testing utilities for the adventure engine.
//!
//! This module provides tools for integration testing:
//! - `ScriptedInterface` for deterministic sessions without a terminal
//! - `TestHarness` for playing scenarios one action at a time
//! - Assertion helpers for verifying game state

use crate::content::create_map;
use crate::direction::Direction;
use crate::game::{Game, GameError};
use crate::interface::{Action, InterfaceError, PlayerInterface};
use crate::map::{Map, MapError};
use std::collections::VecDeque;

/// A front end that replays queued input and records everything shown.
///
/// Actions, directions and item names are kept in separate queues and
/// consumed as the game asks for them. An empty queue is an error rather
/// than an implicit quit.
#[derive(Debug, Default)]
pub struct ScriptedInterface {
    actions: VecDeque<Action>,
    directions: VecDeque<Direction>,
    item_names: VecDeque<String>,
    /// Every message shown, prompts included.
    pub messages: Vec<String>,
    /// Every list of exits offered to the player.
    pub offered_directions: Vec<Vec<Direction>>,
}

impl ScriptedInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        let mut interface = Self::new();
        interface.actions.extend(actions);
        interface
    }

    pub fn queue_action(&mut self, action: Action) -> &mut Self {
        self.actions.push_back(action);
        self
    }

    pub fn queue_direction(&mut self, direction: Direction) -> &mut Self {
        self.directions.push_back(direction);
        self
    }

    pub fn queue_item_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.item_names.push_back(name.into());
        self
    }

    /// Input still waiting to be consumed, as (actions, directions, item names).
    pub fn pending(&self) -> (usize, usize, usize) {
        (self.actions.len(), self.directions.len(), self.item_names.len())
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl PlayerInterface for ScriptedInterface {
    fn get_action(&mut self) -> Result<Action, InterfaceError> {
        self.actions
            .pop_front()
            .ok_or(InterfaceError::ScriptExhausted("action"))
    }

    fn provide_directions(&mut self, directions: &[Direction]) -> Result<(), InterfaceError> {
        self.offered_directions.push(directions.to_vec());
        Ok(())
    }

    fn get_direction(&mut self) -> Result<Direction, InterfaceError> {
        self.directions
            .pop_front()
            .ok_or(InterfaceError::ScriptExhausted("direction"))
    }

    fn get_item_name(&mut self) -> Result<String, InterfaceError> {
        self.item_names
            .pop_front()
            .ok_or(InterfaceError::ScriptExhausted("item name"))
    }

    fn provide_message(&mut self, message: &str) -> Result<(), InterfaceError> {
        self.messages.push(message.to_string());
        Ok(())
    }
}

/// Test harness for running game scenarios turn by turn.
pub struct TestHarness {
    pub game: Game<ScriptedInterface>,
}

impl TestHarness {
    /// A harness on the reference world, already welcomed.
    pub fn new() -> Result<Self, GameError> {
        Self::with_map(create_map()?)
    }

    /// A harness on a custom map, already welcomed.
    pub fn with_map(map: Map) -> Result<Self, GameError> {
        let mut game = Game::new(map, ScriptedInterface::new());
        game.welcome()?;
        Ok(Self { game })
    }

    /// Play one turn of `action` and return its result message.
    ///
    /// Any direction or item name the action needs must already be queued.
    pub fn turn(&mut self, action: Action) -> Result<&str, GameError> {
        self.game.interface_mut().queue_action(action);
        self.game.handle_user_action()?;
        Ok(self.game.current_message())
    }

    pub fn go(&mut self, direction: Direction) -> Result<&str, GameError> {
        self.game.interface_mut().queue_direction(direction);
        self.turn(Action::Move)
    }

    pub fn investigate(&mut self) -> Result<&str, GameError> {
        self.turn(Action::Investigate)
    }

    pub fn take(&mut self, name: &str) -> Result<&str, GameError> {
        self.game.interface_mut().queue_item_name(name);
        self.turn(Action::TakeItem)
    }

    pub fn use_item(&mut self, name: &str) -> Result<&str, GameError> {
        self.game.interface_mut().queue_item_name(name);
        self.turn(Action::UseItem)
    }

    pub fn drop_item(&mut self, name: &str) -> Result<&str, GameError> {
        self.game.interface_mut().queue_item_name(name);
        self.turn(Action::DropItem)
    }

    pub fn inventory(&mut self) -> Result<&str, GameError> {
        self.turn(Action::DisplayInventory)
    }

    /// Queue a quit and play it. Returns whether the loop kept going.
    pub fn quit(&mut self) -> Result<bool, GameError> {
        self.game.interface_mut().queue_action(Action::Quit);
        self.game.handle_user_action()
    }

    pub fn location(&self) -> &str {
        self.game.current_location()
    }

    pub fn message(&self) -> &str {
        self.game.current_message()
    }

    /// Names of the items carried, in order.
    pub fn carried(&self) -> Vec<String> {
        self.game
            .player()
            .get_inventory()
            .iter()
            .map(|i| i.name.clone())
            .collect()
    }

    /// Names of the items lying in `room`, in order.
    pub fn room_items(&self, room: &str) -> Result<Vec<String>, MapError> {
        Ok(self
            .game
            .map()
            .room(room)?
            .items()
            .iter()
            .map(|i| i.name.clone())
            .collect())
    }

    pub fn is_carrying(&self, name: &str) -> bool {
        self.game
            .player()
            .get_inventory()
            .iter()
            .any(|i| i.name == name)
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the player stands in `room`.
#[track_caller]
pub fn assert_location(harness: &TestHarness, room: &str) {
    assert_eq!(
        harness.location(),
        room,
        "Expected player in '{room}', found '{}'",
        harness.location()
    );
}

/// Assert the last result message.
#[track_caller]
pub fn assert_message(harness: &TestHarness, expected: &str) {
    assert_eq!(harness.message(), expected, "Unexpected result message");
}

/// Assert the player carries an item called `name`.
#[track_caller]
pub fn assert_carrying(harness: &TestHarness, name: &str) {
    assert!(
        harness.is_carrying(name),
        "Expected player to carry '{name}', inventory: {:?}",
        harness.carried()
    );
}

/// Assert the player does NOT carry an item called `name`.
#[track_caller]
pub fn assert_not_carrying(harness: &TestHarness, name: &str) {
    assert!(
        !harness.is_carrying(name),
        "Expected player to NOT carry '{name}', inventory: {:?}",
        harness.carried()
    );
}
