//! The boundary between the game and whatever drives it.
//!
//! The game never reads or prints anything itself. Each turn it asks a
//! [`PlayerInterface`] for an [`Action`], asks follow-up questions through
//! the same interface, and hands back exactly one result message. Console,
//! scripted and mock front ends are interchangeable.

use crate::direction::{Direction, DirectionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by a front end.
#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("Command not recognized: {0:?}")]
    UnknownCommand(String),

    #[error("Invalid direction: {0}")]
    InvalidDirection(#[from] DirectionError),

    #[error("Scripted input exhausted while waiting for {0}")]
    ScriptExhausted(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the player wants to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move,
    Investigate,
    TakeItem,
    UseItem,
    DropItem,
    DisplayInventory,
    Quit,
}

impl Action {
    /// The word a player types for this action.
    pub fn command(&self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Investigate => "investigate",
            Action::TakeItem => "take",
            Action::UseItem => "use",
            Action::DropItem => "drop",
            Action::DisplayInventory => "inventory",
            Action::Quit => "quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Case-insensitive, with a few synonyms. Unknown words are an error so the
/// front end can decide what to do with them.
impl FromStr for Action {
    type Err = InterfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "move" | "go" => Ok(Action::Move),
            "investigate" | "search" => Ok(Action::Investigate),
            "take" => Ok(Action::TakeItem),
            "use" => Ok(Action::UseItem),
            "drop" => Ok(Action::DropItem),
            "inventory" | "inv" => Ok(Action::DisplayInventory),
            "quit" | "exit" => Ok(Action::Quit),
            _ => Err(InterfaceError::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Capabilities the game needs from its front end.
#[cfg_attr(test, mockall::automock)]
pub trait PlayerInterface {
    /// Block until the player chooses an action.
    fn get_action(&mut self) -> Result<Action, InterfaceError>;

    /// Show which exits the current room has.
    fn provide_directions(&mut self, directions: &[Direction]) -> Result<(), InterfaceError>;

    /// Block until the player chooses a direction.
    fn get_direction(&mut self) -> Result<Direction, InterfaceError>;

    /// Block until the player names an item.
    fn get_item_name(&mut self) -> Result<String, InterfaceError>;

    /// Show a message.
    fn provide_message(&mut self, message: &str) -> Result<(), InterfaceError>;
}

impl<T: PlayerInterface + ?Sized> PlayerInterface for Box<T> {
    fn get_action(&mut self) -> Result<Action, InterfaceError> {
        (**self).get_action()
    }

    fn provide_directions(&mut self, directions: &[Direction]) -> Result<(), InterfaceError> {
        (**self).provide_directions(directions)
    }

    fn get_direction(&mut self) -> Result<Direction, InterfaceError> {
        (**self).get_direction()
    }

    fn get_item_name(&mut self) -> Result<String, InterfaceError> {
        (**self).get_item_name()
    }

    fn provide_message(&mut self, message: &str) -> Result<(), InterfaceError> {
        (**self).provide_message(message)
    }
}
