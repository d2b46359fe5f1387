//! Session state and renderable snapshot
//!
//! One `GameSession` owns everything: the worm, both spawn fields, the
//! score pair, and the seeded RNG. Nothing is shared across sessions and
//! there is no ambient state; callers construct a session and drive it
//! with `tick`.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::{Candy, Poison, SpawnField};
use super::worm::WormTrack;
use crate::Config;

/// Cardinal movement directions accepted from the input binding.
/// Anything else (diagonals, arbitrary vectors) is rejected at that
/// boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Unit vector in the board plane
    pub fn as_vec2(self) -> Vec2 {
        match self {
            Dir::Up => Vec2::Y,
            Dir::Down => Vec2::NEG_Y,
            Dir::Left => Vec2::NEG_X,
            Dir::Right => Vec2::X,
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Seed the session was created with
    pub seed: u64,
    pub config: Config,
    pub worm: WormTrack,
    pub candy: SpawnField<Candy>,
    pub poison: SpawnField<Poison>,
    /// Candies eaten this run; zeroed the tick the worm dies
    pub score: u32,
    /// Best score seen since construction; survives resets
    pub high_score: u32,
    pub game_over: bool,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create a fresh session with the given seed
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            seed,
            config,
            worm: WormTrack::new(config.worm_speed),
            candy: SpawnField::new(),
            poison: SpawnField::new(),
            score: 0,
            high_score: 0,
            game_over: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Back to the canonical start pose from any state, including
    /// mid-game. The high score and the RNG stream survive the reset.
    pub fn reset(&mut self) {
        self.worm = WormTrack::new(self.config.worm_speed);
        self.candy.clear();
        self.poison.clear();
        self.score = 0;
        self.game_over = false;
        log::info!("session reset (high score {})", self.high_score);
    }

    /// Latch the most recent direction press; safe to call at any time
    /// between ticks, last write wins. Ignored once the game is over.
    pub fn set_direction(&mut self, dir: Dir) {
        if !self.game_over {
            self.worm.set_direction(dir);
        }
    }

    /// Renderable view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            head: self.worm.head,
            segments: self.worm.segment_poses(),
            candies: self.candy.positions(),
            poisons: self.poison.positions(),
            score: self.score,
            high_score: self.high_score,
            game_over: self.game_over,
        }
    }
}

/// Everything a renderer needs for one frame. Poses are opaque
/// transforms; the core assigns no visual attributes beyond kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub head: Vec3,
    /// Trailing segment poses, nearest first; unpopulated slots skipped
    pub segments: Vec<Vec3>,
    pub candies: Vec<Vec3>,
    pub poisons: Vec<Vec3>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}
