//! Per-tick simulation step
//!
//! Advances the session deterministically: same seed plus same input
//! sequence yields a bit-identical session.

use rand::Rng;

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer x from a drag, in screen coordinates
    pub pointer_x: Option<f32>,
    /// Start or restart the session (one-shot)
    pub start: bool,
}

/// Advance the game state by one tick.
///
/// The paddle tracks the pointer in every phase; physics runs only while
/// `Running`. Collision order is walls, then obstacle, then paddle, then the
/// terminal check. The obstacle check is gated on upward motion and the
/// paddle check on downward motion, so a top-wall flip in the same tick
/// cannot cascade into a second bounce.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(x) = input.pointer_x {
        state.paddle.track_pointer(x, state.layout.screen_width);
    }

    match state.phase {
        GamePhase::NotStarted | GamePhase::GameOver => {
            if input.start {
                state.serve();
            }
        }
        GamePhase::Running => advance_ball(state),
    }
}

fn advance_ball(state: &mut GameState) {
    state.time_ticks += 1;

    let layout = state.layout;
    let tuning = state.tuning;
    let ball = &mut state.ball;

    ball.pos += ball.vel;

    collision::resolve_walls(&mut ball.pos, &mut ball.vel, ball.size, layout.screen_width);

    if collision::hits_obstacle(&ball.rect(), ball.vel, &layout.obstacle) {
        ball.vel.y = -ball.vel.y;
        state.score += 1;
        ball.vel = collision::scale_speed(ball.vel, tuning.speed_growth, tuning.speed_cap);
        state.events.push(GameEvent::ObstacleHit { score: state.score });
        log::trace!(
            "obstacle hit: score={} speed={:.2}",
            state.score,
            ball.speed()
        );
    }

    if collision::hits_paddle(&ball.rect(), ball.vel, &state.paddle.rect()) {
        ball.vel.y = -ball.vel.y;
        ball.vel.x += state
            .rng
            .random_range(-tuning.paddle_jitter..=tuning.paddle_jitter);
        state.events.push(GameEvent::PaddleHit);
        log::trace!("paddle hit: vel=({:.2}, {:.2})", ball.vel.x, ball.vel.y);
    }

    if ball.pos.y > layout.screen_height {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::SessionEnded { score: state.score });
        log::info!("game over: score={} ticks={}", state.score, state.time_ticks);
    }
}
