//! Board and movement configuration
//!
//! Static per-session knobs. Everything else the sim needs is derived
//! from these at construction time.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board width in cells
    pub board_width: u32,
    /// Board height in cells
    pub board_height: u32,
    /// Head displacement per tick (world units)
    pub worm_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: consts::BOARD_WIDTH,
            board_height: consts::BOARD_HEIGHT,
            worm_speed: consts::WORM_SPEED,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; missing fields fall back to
    /// the defaults above.
    pub fn load(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(std::io::Error::other)
    }
}
