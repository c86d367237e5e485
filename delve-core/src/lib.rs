//! Text adventure engine.
//!
//! This crate provides:
//! - A room graph with compass navigation and automatically paired exits
//! - Hidden items revealed by searching, plus take, use and drop
//! - A turn-based controller that talks to any front end through
//!   [`PlayerInterface`]
//! - JSON world files and a built-in reference world
//!
//! # Quick Start
//!
//! ```
//! use delve_core::testing::ScriptedInterface;
//! use delve_core::{Action, Direction, GameConfig};
//!
//! let mut input = ScriptedInterface::with_actions([Action::Move, Action::Quit]);
//! input.queue_direction(Direction::North);
//!
//! let mut game = GameConfig::new().build_game(input).unwrap();
//! game.run().unwrap();
//!
//! assert_eq!(game.current_location(), "Armoury");
//! ```

pub mod blueprint;
pub mod config;
pub mod content;
pub mod direction;
pub mod game;
pub mod interface;
pub mod item;
pub mod map;
pub mod player;
pub mod room;
pub mod testing;

// Primary public API
pub use blueprint::{MapBlueprint, RoomBlueprint};
pub use config::{ConfigError, GameConfig};
pub use content::create_map;
pub use direction::{Direction, DirectionError, ALL_DIRECTIONS};
pub use game::{Game, GameError, TranscriptEntry};
pub use interface::{Action, InterfaceError, PlayerInterface};
pub use item::InventoryItem;
pub use map::{ConnectionTable, Map, MapError};
pub use player::Player;
pub use room::{Room, RoomName};
pub use testing::{ScriptedInterface, TestHarness};
