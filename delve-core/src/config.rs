//! Session configuration.
//!
//! A session needs a world and a room to start in. Both default to the
//! built-in reference content; either can be overridden by a JSON world file
//! or an explicit starting room, from code or from the environment.

use crate::blueprint::MapBlueprint;
use crate::content::reference_blueprint;
use crate::game::Game;
use crate::interface::PlayerInterface;
use crate::map::{Map, MapError};
use crate::room::RoomName;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON world file.
pub const WORLD_ENV: &str = "DELVE_WORLD";

/// Environment variable naming the starting room.
pub const START_ENV: &str = "DELVE_START";

/// Errors from loading a configured world.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read world file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid world file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid world: {0}")]
    Map(#[from] MapError),
}

/// Configuration for a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// JSON world file. `None` uses the reference world.
    pub world_file: Option<PathBuf>,

    /// Overrides the world's own starting room.
    pub starting_room: Option<RoomName>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `DELVE_WORLD` and `DELVE_START` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        Self {
            world_file: value(WORLD_ENV).map(PathBuf::from),
            starting_room: value(START_ENV),
        }
    }

    /// Set the world file.
    pub fn with_world_file(mut self, path: impl AsRef<Path>) -> Self {
        self.world_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the starting room.
    pub fn with_starting_room(mut self, room: impl Into<RoomName>) -> Self {
        self.starting_room = Some(room.into());
        self
    }

    /// The world description this config selects, with overrides applied.
    pub fn blueprint(&self) -> Result<MapBlueprint, ConfigError> {
        let mut blueprint = match &self.world_file {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(path = %path.display(), "Loaded world file");
                MapBlueprint::from_json(&json)?
            }
            None => reference_blueprint(),
        };

        if let Some(room) = &self.starting_room {
            blueprint.starting_room = room.clone();
        }
        Ok(blueprint)
    }

    pub fn build_map(&self) -> Result<Map, ConfigError> {
        Ok(self.blueprint()?.build()?)
    }

    /// Build a ready-to-run game on `interface`.
    pub fn build_game<I: PlayerInterface>(&self, interface: I) -> Result<Game<I>, ConfigError> {
        Ok(Game::new(self.build_map()?, interface))
    }
}
