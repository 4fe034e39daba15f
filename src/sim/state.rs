//! Game state and core simulation types
//!
//! Everything one run mutates lives in `GameState`, owned by the caller and
//! passed explicitly to `tick`. Obstacles are stored once, contiguously, and
//! keep their indices for the whole run.

use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind, Outcome};
use super::collision::StepContacts;
use super::control::ThrustTuning;
use super::level;
use super::outcome::LandingRules;
use crate::settings::Settings;

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The controlled body
    pub player: Body,
    /// Obstacle catalog (stable indices)
    pub obstacles: Vec<Body>,
    /// Control resource; spent by burns
    pub fuel: f32,
    /// Thruster tuning for the player
    pub thrust: ThrustTuning,
    /// Win/loss thresholds
    pub rules: LandingRules,
    /// Simulation steps run so far (frozen once the outcome is terminal)
    pub time_ticks: u64,
    /// Contacts from the most recent step
    #[serde(skip)]
    pub last_contacts: StepContacts,
}

impl GameState {
    /// Create a state from a player and an obstacle catalog
    pub fn new(player: Body, obstacles: Vec<Body>, fuel: f32) -> Self {
        debug_assert_eq!(player.kind, BodyKind::Dynamic);
        debug_assert!(obstacles.iter().all(|o| o.kind != BodyKind::Dynamic));

        Self {
            player,
            obstacles,
            fuel,
            thrust: ThrustTuning::default(),
            rules: LandingRules::default(),
            time_ticks: 0,
            last_contacts: StepContacts::default(),
        }
    }

    /// The moon-base level with the given tuning
    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::new(level::lander(), level::moon_base(), settings.initial_fuel);
        state.thrust = settings.thrust;
        state.rules = settings.landing;
        state
    }

    pub fn outcome(&self) -> Outcome {
        self.player.outcome
    }

    /// Fuel as shown on the HUD
    pub fn fuel_gauge(&self) -> u32 {
        self.fuel.abs() as u32
    }

    /// Bodies the renderer should draw, player first
    pub fn visible_bodies(&self) -> impl Iterator<Item = &Body> {
        std::iter::once(&self.player).chain(self.obstacles.iter().filter(|b| b.active))
    }

    /// Landing pads in the catalog, with their indices
    pub fn landing_pads(&self) -> impl Iterator<Item = (usize, &Body)> {
        self.obstacles
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_landing_pad())
    }

    /// Whether the player currently overlaps any active landing pad
    pub fn over_landing_pad(&self) -> bool {
        self.landing_pads()
            .any(|(_, pad)| pad.is_collidable() && self.player.overlaps(pad))
    }
}
