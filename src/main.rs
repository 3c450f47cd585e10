//! Cup Bounce entry point
//!
//! Headless demo: drives the engine with an autopilot paddle at 60 Hz and
//! logs each run. Useful for eyeballing balance changes without a UI.

use cup_bounce::consts::SIM_DT;
use cup_bounce::sim::{GameEvent, GamePhase};
use cup_bounce::{GameSession, HighScores, Layout, Tuning};

/// Runs before giving up on a session (2 minutes of simulated play)
const MAX_FRAMES_PER_RUN: u32 = 60 * 120;
const RUNS: u32 = 3;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let layout = Layout::default();
    let tuning = Tuning::default();
    let seed = 0xC0FFEE;

    let mut session = GameSession::new(layout, tuning, seed);
    let mut scores = HighScores::new();

    for run in 0..RUNS {
        if run == 0 {
            session.start();
        } else {
            session.restart();
        }

        let mut frames = 0u32;
        while session.phase() == GamePhase::Running && frames < MAX_FRAMES_PER_RUN {
            autopilot(&mut session, frames);
            session.advance(SIM_DT);

            for event in session.drain_events() {
                match event {
                    GameEvent::ObstacleHit { score } => {
                        log::debug!("run {run}: notch hit, score {score}")
                    }
                    GameEvent::PaddleHit => log::trace!("run {run}: paddle save"),
                    GameEvent::SessionEnded { score } => {
                        log::info!("run {run}: over after {frames} frames, score {score}")
                    }
                }
            }
            frames += 1;
        }

        if session.phase() == GamePhase::Running {
            log::info!(
                "run {run}: still alive after {MAX_FRAMES_PER_RUN} frames, score {}",
                session.score()
            );
            break;
        }

        match scores.add_score(session.score(), session.ticks()) {
            Some(rank) => log::info!("run {run}: rank {rank} with {}", session.score()),
            None => log::info!("run {run}: no rank (score {})", session.score()),
        }
    }

    if !scores.is_empty() {
        match serde_json::to_string_pretty(&scores) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("leaderboard serialization failed: {err}"),
        }
    }
}

/// Chase the ball the way a distracted player would: aim the paddle at the
/// ball's center plus a slow sinusoidal wobble wide enough to drop it once
/// the ball outruns the wobble.
fn autopilot(session: &mut GameSession, frame: u32) {
    let target = session.ball().pos.x + session.ball().size / 2.0;
    let wobble = (frame as f32 * 0.05).sin() * 110.0;
    session.pointer_move(target + wobble);
}
