//! Collision predicates
//!
//! Pure proximity tests over entity poses. Anomalies are game states,
//! not errors: a segment with no pose yet cannot collide, and an empty
//! entity list degenerates to "no collision".

use glam::Vec3;

use super::worm::WormTrack;
use crate::consts::{CANDY_RADIUS, CELL_SIZE, SELF_HIT_RADIUS, WALL_TOLERANCE};

/// True iff the centers of two sphere-like entities are strictly closer
/// than `radius`. All three position components participate, so entities
/// must share height to collide.
#[inline]
pub fn spheres_intersect(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius
}

/// True iff the head has left the board. The low edges keep a
/// quarter-unit tolerance; the high edges end at the last cell center.
pub fn hits_wall(head: Vec3, board_width: u32, board_height: u32) -> bool {
    let max_x = (board_width - 1) as f32 * CELL_SIZE;
    let max_y = (board_height - 1) as f32 * CELL_SIZE;
    head.x < -WALL_TOLERANCE || head.x >= max_x || head.y < -WALL_TOLERANCE || head.y >= max_y
}

/// True iff the head overlaps any currently placeable trailing segment
pub fn hits_self(worm: &WormTrack) -> bool {
    (1..=worm.body_count)
        .filter_map(|i| worm.segment_pose(i))
        .any(|seg| spheres_intersect(worm.head, seg, SELF_HIT_RADIUS))
}

/// True iff the head reaches a candy (head radius plus candy radius)
#[inline]
pub fn hits_candy(head: Vec3, candy: Vec3) -> bool {
    spheres_intersect(head, candy, SELF_HIT_RADIUS + CANDY_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ENTITY_HEIGHT;
    use crate::sim::state::Dir;

    #[test]
    fn sphere_test_is_strict() {
        let a = Vec3::new(0.0, 0.0, ENTITY_HEIGHT);
        let b = Vec3::new(1.0, 0.0, ENTITY_HEIGHT);
        assert!(!spheres_intersect(a, b, 1.0));
        assert!(spheres_intersect(a, b, 1.0001));
    }

    #[test]
    fn height_participates_in_distance() {
        let a = Vec3::new(0.0, 0.0, ENTITY_HEIGHT);
        let b = Vec3::new(0.0, 0.0, 0.0);
        assert!(!spheres_intersect(a, b, 1.0));
    }

    #[test]
    fn wall_boundary_is_exact() {
        // 10-wide board: the playable range ends just below x = 18
        assert!(hits_wall(Vec3::new(18.0, 5.0, ENTITY_HEIGHT), 10, 10));
        assert!(!hits_wall(Vec3::new(17.99, 5.0, ENTITY_HEIGHT), 10, 10));
        assert!(hits_wall(Vec3::new(-0.26, 5.0, ENTITY_HEIGHT), 10, 10));
        assert!(!hits_wall(Vec3::new(-0.25, 5.0, ENTITY_HEIGHT), 10, 10));
        assert!(hits_wall(Vec3::new(5.0, 18.0, ENTITY_HEIGHT), 10, 10));
        assert!(!hits_wall(Vec3::new(5.0, 17.99, ENTITY_HEIGHT), 10, 10));
    }

    #[test]
    fn smaller_board_shrinks_the_walls() {
        assert!(hits_wall(Vec3::new(14.0, 5.0, ENTITY_HEIGHT), 8, 8));
        assert!(!hits_wall(Vec3::new(13.99, 5.0, ENTITY_HEIGHT), 8, 8));
    }

    #[test]
    fn self_collision_requires_growth() {
        let mut worm = WormTrack::new(0.10);
        worm.set_direction(Dir::Right);
        for _ in 0..100 {
            worm.advance();
        }
        // No segments exist, so no path can self-collide
        assert!(!hits_self(&worm));
    }

    #[test]
    fn candy_collision_radius() {
        let head = Vec3::new(4.0, 4.0, ENTITY_HEIGHT);
        let candy = Vec3::new(4.0, 5.8, ENTITY_HEIGHT);
        assert!(!hits_candy(head, candy));
        assert!(hits_candy(head, Vec3::new(4.0, 5.79, ENTITY_HEIGHT)));
    }
}
