//! Control intents and thrusters
//!
//! One intent is sampled per rendered frame. An accepted burn adds to the
//! lander's acceleration (not velocity) and costs fuel; anything else lets
//! the lander coast, which drifts acceleration back toward its floor.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;

/// Discrete control intent from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    #[default]
    Neutral,
    Left,
    Right,
    Up,
}

impl Intent {
    /// Raw control direction for this intent
    pub fn direction(self) -> Vec3 {
        match self {
            Intent::Neutral => Vec3::ZERO,
            Intent::Left => Vec3::NEG_X,
            Intent::Right => Vec3::X,
            Intent::Up => Vec3::Y,
        }
    }
}

/// What the thrusters did with an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Burn {
    /// Intent accepted, fuel spent
    Fired(Intent),
    /// Neutral or refused at the acceleration clamp; acceleration drifted
    Coasted,
    /// Tank empty, nothing applied
    NoFuel,
}

/// Thruster tuning for the controlled body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrustTuning {
    /// Acceleration added per left/right burn, also the horizontal drift nudge
    pub thrust_x: f32,
    /// Acceleration added per up burn
    pub thrust_up: f32,
    /// Downward nudge while coasting with positive vertical acceleration
    pub vertical_decay: f32,
    /// Left/right refused at or above this |acceleration.x|
    pub max_accel_x: f32,
    /// Up refused at or above this |acceleration.y|
    pub max_accel_y: f32,
    /// Coasting never pulls |acceleration.x| below this
    pub drift_floor_x: f32,
    /// Fuel spent per accepted burn
    pub fuel_per_burn: f32,
}

impl Default for ThrustTuning {
    fn default() -> Self {
        Self {
            thrust_x: THRUST_X,
            thrust_up: THRUST_UP,
            vertical_decay: VERTICAL_DECAY,
            max_accel_x: MAX_ACCEL_X,
            max_accel_y: MAX_ACCEL_Y,
            drift_floor_x: DRIFT_FLOOR_X,
            fuel_per_burn: FUEL_PER_BURN,
        }
    }
}

impl ThrustTuning {
    /// Whether the clamp still allows this intent
    fn accepts(&self, body: &Body, intent: Intent) -> bool {
        match intent {
            Intent::Neutral => false,
            Intent::Left | Intent::Right => body.acceleration.x.abs() < self.max_accel_x,
            Intent::Up => body.acceleration.y.abs() < self.max_accel_y,
        }
    }
}

/// Clamp a control direction to unit length.
///
/// Only vectors longer than 1 are normalized, so a zero vector is left alone.
pub fn clamp_movement(movement: Vec3) -> Vec3 {
    if movement.length() > 1.0 {
        movement.normalize()
    } else {
        movement
    }
}

/// Apply one frame's intent to the lander, spending fuel on accepted burns
pub fn apply_intent(body: &mut Body, fuel: &mut f32, intent: Intent, tuning: &ThrustTuning) -> Burn {
    body.movement = Vec3::ZERO;

    if *fuel <= 0.0 {
        return Burn::NoFuel;
    }

    if !tuning.accepts(body, intent) {
        if intent != Intent::Neutral {
            log::debug!("{:?} burn refused at acceleration {:?}", intent, body.acceleration);
        }
        coast(body, tuning);
        return Burn::Coasted;
    }

    body.movement = clamp_movement(intent.direction());
    body.acceleration.x += body.movement.x * tuning.thrust_x;
    body.acceleration.y += body.movement.y * tuning.thrust_up;
    *fuel -= tuning.fuel_per_burn;

    if *fuel <= 0.0 {
        log::info!("Fuel exhausted");
    }

    Burn::Fired(intent)
}

/// Drift acceleration while no burn is accepted.
///
/// Horizontal acceleration above the floor in magnitude is nudged toward the
/// floor and stops there; it is never pulled to zero. Vertical acceleration is
/// nudged down only while positive.
pub fn coast(body: &mut Body, tuning: &ThrustTuning) {
    let floor = tuning.drift_floor_x;
    let ax = body.acceleration.x;
    if ax > floor {
        body.acceleration.x = (ax - tuning.thrust_x).max(floor);
    } else if ax < -floor {
        body.acceleration.x = (ax + tuning.thrust_x).min(-floor);
    }

    if body.acceleration.y > 0.0 {
        body.acceleration.y -= tuning.vertical_decay;
    }
}
