//! Timed entity spawning
//!
//! One container drives both spawned entity kinds; they differ only in
//! lifetime policy. Candy lives until eaten; poison rolls a lifetime at
//! spawn and expires on its own, independent of any collision.

use std::marker::PhantomData;

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::cell_to_world;
use crate::consts::{POISON_LIFETIME_MAX, POISON_LIFETIME_MIN};

/// Lifetime policy for a spawned entity kind
pub trait SpawnKind {
    /// Label used in logs
    const LABEL: &'static str;

    /// Roll a lifetime in seconds; `None` means the entity never expires
    fn roll_lifetime(rng: &mut Pcg32) -> Option<f64>;
}

/// Consumable kind: unlimited lifetime, removed only by head collision
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Candy;

impl SpawnKind for Candy {
    const LABEL: &'static str = "candy";

    fn roll_lifetime(_rng: &mut Pcg32) -> Option<f64> {
        None
    }
}

/// Hazard kind: expires after a randomized whole-second lifetime
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Poison;

impl SpawnKind for Poison {
    const LABEL: &'static str = "poison";

    fn roll_lifetime(rng: &mut Pcg32) -> Option<f64> {
        Some(rng.random_range(POISON_LIFETIME_MIN..=POISON_LIFETIME_MAX) as f64)
    }
}

/// One spawned entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawned {
    pub pos: Vec3,
    pub spawned_at: f64,
    pub lifetime: Option<f64>,
}

/// Timed-spawn container for one entity kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnField<K: SpawnKind> {
    pub entries: Vec<Spawned>,
    /// Lifetime rolled for the most recent spawn; for expiring kinds this
    /// doubles as the cooldown gating the next spawn
    pub last_lifetime: Option<f64>,
    last_spawn: f64,
    _kind: PhantomData<K>,
}

impl<K: SpawnKind> Default for SpawnField<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SpawnKind> SpawnField<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_lifetime: None,
            last_spawn: 0.0,
            _kind: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entity positions in spawn order
    pub fn positions(&self) -> Vec<Vec3> {
        self.entries.iter().map(|e| e.pos).collect()
    }

    /// Spawn one entity when the field is empty, or below `cap` with the
    /// cooldown elapsed. The candidate cell is uniform over the board and
    /// re-rolled while it lands exactly on an existing entity of this
    /// field (same-field uniqueness only).
    pub fn maybe_spawn(
        &mut self,
        now: f64,
        cooldown: f64,
        cap: usize,
        board_width: u32,
        board_height: u32,
        rng: &mut Pcg32,
    ) -> bool {
        let due = self.entries.is_empty()
            || (self.entries.len() < cap && now - self.last_spawn > cooldown);
        if !due {
            return false;
        }

        let attempts = (board_width * board_height) as usize;
        for _ in 0..attempts {
            let row = rng.random_range(0..board_height);
            let col = rng.random_range(0..board_width);
            let pos = cell_to_world(row, col);
            if self.entries.iter().any(|e| e.pos == pos) {
                continue;
            }
            let lifetime = K::roll_lifetime(rng);
            self.entries.push(Spawned {
                pos,
                spawned_at: now,
                lifetime,
            });
            self.last_lifetime = lifetime;
            self.last_spawn = now;
            log::debug!("{} spawned at cell ({row}, {col})", K::LABEL);
            return true;
        }
        false
    }

    /// Drop every entry whose lifetime has elapsed, oldest first,
    /// compacting in place. Non-expiring entries are untouched.
    pub fn expire(&mut self, now: f64) {
        self.entries.retain(|e| match e.lifetime {
            Some(lifetime) => now - e.spawned_at <= lifetime,
            None => true,
        });
    }

    /// Remove a consumed entity by index
    pub fn remove_at(&mut self, index: usize) -> Spawned {
        self.entries.remove(index)
    }

    /// Forget everything, including spawn timing (session reset)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_lifetime = None;
        self.last_spawn = 0.0;
    }
}
