//! Worm head motion and derived body segments
//!
//! Trailing segments are not simulated. The head records every pose it
//! has occupied into a bounded, newest-first history buffer, and segment
//! `i` is simply the entry `round(i * gap)` slots back. Segments trail at
//! constant spacing through every turn, and the buffer only needs to
//! retain enough samples to cover the furthest segment.

use std::collections::VecDeque;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::state::Dir;
use crate::consts::{ENTITY_HEIGHT, SEGMENT_SPACING};

/// Player-controlled head plus its derived trailing body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WormTrack {
    /// Current head position
    pub head: Vec3,
    /// Velocity per tick; zero until the first direction press
    pub direction: Vec2,
    /// Trailing segment count
    pub body_count: u32,
    /// Past head poses, newest first
    history: VecDeque<Vec3>,
    /// History slots between consecutive segments; fixed for the session
    gap: f32,
    speed: f32,
}

impl WormTrack {
    pub fn new(speed: f32) -> Self {
        Self {
            head: Vec3::new(0.0, 0.0, ENTITY_HEIGHT),
            direction: Vec2::ZERO,
            body_count: 0,
            history: VecDeque::new(),
            gap: SEGMENT_SPACING / speed,
            speed,
        }
    }

    /// Latch a movement direction at fixed magnitude; the last write
    /// before a tick wins.
    pub fn set_direction(&mut self, dir: Dir) {
        self.direction = dir.as_vec2() * self.speed;
    }

    /// Stop in place (game-over freeze)
    pub fn halt(&mut self) {
        self.direction = Vec2::ZERO;
    }

    /// Apply one tick of motion. A zero direction is a no-op translation
    /// and records no history.
    pub fn advance(&mut self) {
        if self.direction == Vec2::ZERO {
            return;
        }
        self.head += self.direction.extend(0.0);
        self.history.push_front(self.head);
        while self.history.len() as f32 > self.gap * (self.body_count + 1) as f32 {
            self.history.pop_back();
        }
    }

    /// Pose of trailing segment `i` (1-based, `i <= body_count`), or
    /// `None` while the history is still too short to place it.
    pub fn segment_pose(&self, i: u32) -> Option<Vec3> {
        let slot = (i as f32 * self.gap).round() as usize;
        self.history.get(slot).copied()
    }

    /// All currently placeable segment poses, nearest to the head first
    pub fn segment_poses(&self) -> Vec<Vec3> {
        (1..=self.body_count)
            .filter_map(|i| self.segment_pose(i))
            .collect()
    }

    /// Add one trailing segment. The history buffer grows to cover the
    /// larger span on subsequent ticks; until then the new segment has no
    /// pose.
    pub fn grow(&mut self) {
        self.body_count += 1;
    }

    /// Segment sampling interval in history slots
    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(worm: &mut WormTrack, n: usize) {
        for _ in 0..n {
            worm.advance();
        }
    }

    #[test]
    fn zero_direction_records_no_history() {
        let mut worm = WormTrack::new(0.10);
        ticks(&mut worm, 50);
        assert_eq!(worm.head, Vec3::new(0.0, 0.0, ENTITY_HEIGHT));
        assert_eq!(worm.history_len(), 0);
    }

    #[test]
    fn history_stays_bounded() {
        let mut worm = WormTrack::new(0.10);
        worm.set_direction(Dir::Right);
        ticks(&mut worm, 200);
        // gap = 15, body_count = 0 -> at most 15 entries
        assert!(worm.history_len() as f32 <= (worm.gap() * 1.0).ceil());

        worm.grow();
        ticks(&mut worm, 200);
        assert!(worm.history_len() as f32 <= (worm.gap() * 2.0).ceil());
    }

    #[test]
    fn new_segment_has_no_pose_until_history_covers_it() {
        let mut worm = WormTrack::new(0.10);
        worm.set_direction(Dir::Right);
        ticks(&mut worm, 5);
        worm.grow();
        // Only 5 history entries, segment 1 samples slot 15
        assert_eq!(worm.segment_pose(1), None);
        ticks(&mut worm, 20);
        let seg = worm.segment_pose(1).expect("segment placed");
        // 15 ticks behind the head at 0.1/tick along +x
        assert!((worm.head.x - seg.x - 1.5).abs() < 1e-5);
        assert_eq!(seg.y, worm.head.y);
    }

    #[test]
    fn gap_is_fixed_across_growth() {
        let mut worm = WormTrack::new(0.10);
        let gap = worm.gap();
        worm.grow();
        worm.grow();
        assert_eq!(worm.gap(), gap);
    }
}
