//! Once-per-frame session tick
//!
//! The frame driver supplies a monotonic `now` in seconds and whatever
//! direction press arrived since the last frame. Order matters inside a
//! tick: collisions are judged against the pose the renderer last saw,
//! then the head moves, then the fields restock.

use super::collision;
use super::state::{GameSession, Snapshot};
use crate::consts::{CANDY_CAP, CANDY_COOLDOWN};

pub use super::state::Dir;

/// Input latched since the previous tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Most recent direction press, if any; last write wins
    pub direction: Option<Dir>,
}

/// Advance the session by one frame and return the renderable snapshot.
/// Every tick completes; there is no failure path.
pub fn tick(session: &mut GameSession, input: &TickInput, now: f64) -> Snapshot {
    if session.game_over {
        // Frozen until reset: no motion, no collisions, no field churn.
        session.worm.halt();
        return session.snapshot();
    }

    if let Some(dir) = input.direction {
        session.worm.set_direction(dir);
    }

    let (w, h) = (session.config.board_width, session.config.board_height);

    if collision::hits_wall(session.worm.head, w, h) || collision::hits_self(&session.worm) {
        session.worm.halt();
        session.game_over = true;
        session.score = 0;
        log::info!("game over at t={now:.2}s (high score {})", session.high_score);
        return session.snapshot();
    }

    // Eat every candy in reach this frame
    let mut i = 0;
    while i < session.candy.len() {
        if collision::hits_candy(session.worm.head, session.candy.entries[i].pos) {
            session.candy.remove_at(i);
            session.worm.grow();
            session.score += 1;
            session.high_score = session.high_score.max(session.score);
            log::debug!("candy eaten, score {}", session.score);
        } else {
            i += 1;
        }
    }

    session.poison.expire(now);

    session.worm.advance();

    session
        .candy
        .maybe_spawn(now, CANDY_COOLDOWN, CANDY_CAP, w, h, &mut session.rng);
    // The previous poison's rolled lifetime gates the next spawn; the
    // field itself is uncapped.
    let poison_cooldown = session.poison.last_lifetime.unwrap_or(0.0);
    session
        .poison
        .maybe_spawn(now, poison_cooldown, usize::MAX, w, h, &mut session.rng);

    session.snapshot()
}
