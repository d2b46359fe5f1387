//! Garden Worm - a grid-based worm arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (worm motion, collisions, spawning, session state)
//! - `config`: Board and movement configuration
//! - `highscores`: Leaderboard kept by the shell around the sim
//!
//! Rendering, input binding, and the animation-frame driver are external
//! collaborators: they feed `sim::tick` a monotonic time and the latest
//! direction press, and draw the snapshot it returns.

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::Config;
pub use highscores::HighScores;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Default board dimensions in cells
    pub const BOARD_WIDTH: u32 = 10;
    pub const BOARD_HEIGHT: u32 = 10;
    /// Side length of one board cell in world units
    pub const CELL_SIZE: f32 = 2.0;
    /// Height (z) at which the worm and all spawned entities sit
    pub const ENTITY_HEIGHT: f32 = 1.8;

    /// Head displacement per tick (world units)
    pub const WORM_SPEED: f32 = 0.10;
    /// World-unit spacing between trailing segments; the history sampling
    /// gap is `SEGMENT_SPACING / worm_speed`
    pub const SEGMENT_SPACING: f32 = 1.5;
    /// Head/segment collision radius (half a cell)
    pub const SELF_HIT_RADIUS: f32 = 1.0;
    /// Slack past the low board edge before the head counts as off-board
    pub const WALL_TOLERANCE: f32 = 0.25;

    /// Candy defaults
    pub const CANDY_RADIUS: f32 = 0.8;
    pub const CANDY_CAP: usize = 5;
    pub const CANDY_COOLDOWN: f64 = 5.0;

    /// Poison lifetime bounds (whole seconds, inclusive)
    pub const POISON_LIFETIME_MIN: u32 = 5;
    pub const POISON_LIFETIME_MAX: u32 = 10;
}

/// Convert a grid cell to its world-space position
#[inline]
pub fn cell_to_world(row: u32, col: u32) -> Vec3 {
    Vec3::new(
        row as f32 * consts::CELL_SIZE,
        col as f32 * consts::CELL_SIZE,
        consts::ENTITY_HEIGHT,
    )
}
