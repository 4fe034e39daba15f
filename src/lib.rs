//! Lunar Lander - a fixed-timestep landing simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, integration, collisions, outcome)
//! - `game`: Frame driver feeding wall-clock time through the fixed-step scheduler
//! - `settings`: Data-driven tuning loaded from JSON

pub mod game;
pub mod settings;
pub mod sim;

pub use game::{FrameReport, Game, Screen};
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const FIXED_STEP: f32 = 0.0166666;

    /// Horizontal thrust added to acceleration per accepted left/right burn
    pub const THRUST_X: f32 = 0.3;
    /// Vertical thrust added to acceleration per accepted up burn
    pub const THRUST_UP: f32 = 0.005;
    /// Downward nudge applied to positive vertical acceleration while coasting
    pub const VERTICAL_DECAY: f32 = 0.05;
    /// Left/right burns are refused once |acceleration.x| reaches this
    pub const MAX_ACCEL_X: f32 = 50.0;
    /// Up burns are refused once |acceleration.y| reaches this
    pub const MAX_ACCEL_Y: f32 = 0.1;
    /// Coasting horizontal acceleration drifts toward this magnitude, never below
    pub const DRIFT_FLOOR_X: f32 = 30.0;

    /// Fuel at the start of a run
    pub const INITIAL_FUEL: f32 = 50.0;
    /// Fuel spent per accepted burn
    pub const FUEL_PER_BURN: f32 = 0.1;
    /// Max |velocity.y| at touchdown for a landing to count
    pub const SAFE_LANDING_SPEED: f32 = 0.5;

    /// Lander defaults
    pub const LANDER_WIDTH: f32 = 0.7;
    pub const LANDER_HEIGHT: f32 = 0.8;
    pub const LANDER_SPEED: f32 = 5.0;
    pub const LANDER_JUMP_POWER: f32 = 3.0;
    /// Constant downward acceleration the lander starts with
    pub const LANDER_GRAVITY: f32 = -0.05;

    /// Moon tile edge length (rendered size and collision size)
    pub const TILE_SIZE: f32 = 0.5;
    /// Speed of the drifting landing pads (units/s)
    pub const MOVING_PAD_SPEED: f32 = 0.5;

    /// Penetration at or below this depth counts as touching, not overlapping
    pub const CONTACT_SLOP: f32 = 1.0e-5;
}
