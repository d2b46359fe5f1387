//! Garden Worm entry point
//!
//! Headless driver: runs a scripted session at a fixed frame interval
//! and records the result to a leaderboard file. Rendering is a separate
//! concern; anything that calls `tick` once per frame can draw the
//! snapshots it gets back.

use garden_worm::sim::{Dir, GameSession, TickInput, tick};
use garden_worm::{Config, HighScores};

/// Frame interval of the scripted driver (60 Hz)
const FRAME_DT: f64 = 1.0 / 60.0;
const SCORES_FILE: &str = "highscores.json";

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load {path}: {err}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameSession::new(config, seed);
    log::info!(
        "session started: {}x{} board, seed {seed}",
        config.board_width,
        config.board_height
    );

    // Scripted run: lap the board perimeter until something ends the game.
    let script = [Dir::Right, Dir::Up, Dir::Left, Dir::Down];
    let leg_ticks = ((config.board_width - 1) as f64 * 2.0 / config.worm_speed as f64) as usize - 5;

    let mut now = 0.0;
    let mut snap = session.snapshot();
    'run: for lap in 0.. {
        for dir in script {
            let mut input = TickInput {
                direction: Some(dir),
            };
            for _ in 0..leg_ticks {
                snap = tick(&mut session, &input, now);
                input.direction = None;
                now += FRAME_DT;
                if snap.game_over || now > 300.0 {
                    break 'run;
                }
            }
        }
        log::debug!("lap {lap} complete, score {}", snap.score);
    }

    println!(
        "run ended at t={now:.1}s: high score {}, body {}, {} candies and {} poisons on board",
        snap.high_score,
        session.worm.body_count,
        snap.candies.len(),
        snap.poisons.len()
    );

    let mut scores = HighScores::load(SCORES_FILE).unwrap_or_default();
    let timestamp = seed as f64;
    if let Some(rank) = scores.add_score(snap.high_score, session.worm.body_count, timestamp) {
        println!("leaderboard rank #{rank}");
        if let Err(err) = scores.save(SCORES_FILE) {
            log::warn!("could not save high scores: {err}");
        }
    }
}
