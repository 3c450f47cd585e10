//! Screen-derived layout and gameplay tuning
//!
//! The hosting view reads screen dimensions once and builds a `Layout` from
//! them; `Tuning` carries the balance knobs with defaults matching the
//! shipped game.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rect;

/// Gameplay balance knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Per-axis serve speed in pixels per tick
    pub ball_speed: f32,
    /// Multiplicative speed gain per obstacle hit
    pub speed_growth: f32,
    /// Speed ceiling in pixels per tick
    pub speed_cap: f32,
    /// Half-width of the uniform horizontal jitter on paddle rebounds
    pub paddle_jitter: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            speed_growth: SPEED_GROWTH,
            speed_cap: SPEED_CAP,
            paddle_jitter: PADDLE_JITTER,
        }
    }
}

/// Fixed geometry computed once from screen dimensions
///
/// Widths scale with the screen; heights and margins are absolute, matching
/// the original layout rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Side length of the square ball sprite
    pub ball_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Top of the paddle band
    pub paddle_y: f32,
    /// The notch obstacle, centered horizontally near the top
    pub obstacle: Rect,
}

impl Layout {
    /// Derive the full layout from screen dimensions
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let obstacle_width = screen_width * (OBSTACLE_BASE_WIDTH / REFERENCE_WIDTH) * OBSTACLE_SCALE;
        let obstacle_height = OBSTACLE_BASE_HEIGHT * OBSTACLE_SCALE;
        Self {
            screen_width,
            screen_height,
            ball_size: BALL_SIZE,
            paddle_width: screen_width * PADDLE_WIDTH_FRACTION,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: screen_height - PADDLE_BOTTOM_OFFSET,
            obstacle: Rect::new(
                (screen_width - obstacle_width) / 2.0,
                OBSTACLE_TOP_MARGIN,
                obstacle_width,
                obstacle_height,
            ),
        }
    }

    /// Paddle x that centers it on the screen
    pub fn paddle_center_x(&self) -> f32 {
        (self.screen_width - self.paddle_width) / 2.0
    }

    /// Ball position for a fresh serve (horizontal center, vertical center)
    pub fn serve_position(&self) -> (f32, f32) {
        (
            (self.screen_width - self.ball_size) / 2.0,
            self.screen_height / 2.0,
        )
    }
}

impl Default for Layout {
    /// Reference device dimensions (430 x 932 logical pixels)
    fn default() -> Self {
        Self::new(REFERENCE_WIDTH, 932.0)
    }
}
