//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by the caller-supplied monotonic clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod worm;

pub use spawn::{Candy, Poison, SpawnField, SpawnKind, Spawned};
pub use state::{Dir, GameSession, Snapshot};
pub use tick::{TickInput, tick};
pub use worm::WormTrack;
