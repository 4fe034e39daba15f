//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by obstacle index)
//! - No clocks, rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod control;
pub mod integrate;
pub mod level;
pub mod outcome;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind, CollisionFlags, Outcome, SpriteId, Surface};
pub use collision::{Contact, Side, StepContacts, resolve_x, resolve_y};
pub use control::{Burn, Intent, ThrustTuning, apply_intent};
pub use outcome::{LandingRules, evaluate};
pub use scheduler::FixedStepScheduler;
pub use state::GameState;
pub use tick::{TickInput, TickReport, tick};
