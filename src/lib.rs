//! Cup Bounce - the coffee-cup-and-notch arcade mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Host-facing lifecycle with fixed-timestep scheduling
//! - `config`: Screen-derived layout and gameplay tuning
//! - `highscores`: Session-local leaderboard

pub mod config;
pub mod highscores;
pub mod session;
pub mod sim;

pub use config::{Layout, Tuning};
pub use highscores::HighScores;
pub use session::GameSession;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Screen width the layout fractions were tuned against
    pub const REFERENCE_WIDTH: f32 = 430.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 64.0;
    /// Per-axis serve speed (pixels per tick)
    pub const BALL_SPEED: f32 = 6.0;
    /// Multiplicative speed gain per obstacle hit
    pub const SPEED_GROWTH: f32 = 1.08;
    /// Speed ceiling (pixels per tick)
    pub const SPEED_CAP: f32 = 18.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.32;
    pub const PADDLE_HEIGHT: f32 = 32.0;
    /// Distance from the bottom screen edge to the top of the paddle band
    pub const PADDLE_BOTTOM_OFFSET: f32 = 120.0;
    /// Half-width of the uniform horizontal jitter added on paddle rebounds
    pub const PADDLE_JITTER: f32 = 1.0;

    /// Notch obstacle defaults (sized off the reference screen, scaled up 10%)
    pub const OBSTACLE_BASE_WIDTH: f32 = 110.0;
    pub const OBSTACLE_BASE_HEIGHT: f32 = 32.0;
    pub const OBSTACLE_SCALE: f32 = 1.1;
    /// Gap between the top screen edge and the obstacle
    pub const OBSTACLE_TOP_MARGIN: f32 = 14.0;
}
