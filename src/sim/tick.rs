//! Fixed timestep simulation tick
//!
//! One call advances the world by one fixed slice, in this order:
//! control -> flag reset -> velocity -> Y move + resolve -> X move + resolve
//! -> kinematic obstacles -> outcome.
//!
//! Once the outcome is terminal the tick is a no-op (frozen final frame).

use super::collision::{StepContacts, resolve_x, resolve_y};
use super::control::{Burn, Intent, apply_intent};
use super::integrate::{advance_kinematic, advance_x, advance_y, integrate_velocity};
use super::outcome::evaluate;
use super::state::GameState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Intents sampled since the previous step, oldest first. Empty when an
    /// earlier sub-step of the frame already consumed them.
    pub controls: Vec<Intent>,
}

impl TickInput {
    pub fn with_intent(intent: Intent) -> Self {
        Self {
            controls: vec![intent],
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Whether the tick advanced anything
    pub advanced: bool,
    pub burn: Option<Burn>,
    pub contacts: StepContacts,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    if state.player.outcome.is_terminal() {
        return TickReport::default();
    }

    state.time_ticks += 1;

    let mut burn = None;
    for &intent in &input.controls {
        burn = Some(apply_intent(&mut state.player, &mut state.fuel, intent, &state.thrust));
    }

    let player = &mut state.player;
    player.collisions.clear();

    integrate_velocity(player, dt);

    advance_y(player, dt);
    let vertical = resolve_y(player, &state.obstacles);

    advance_x(player, dt);
    let horizontal = resolve_x(player, &state.obstacles);

    for obstacle in &mut state.obstacles {
        advance_kinematic(obstacle, dt);
    }

    let contacts = StepContacts {
        vertical,
        horizontal,
    };
    state.last_contacts = contacts;

    let outcome = evaluate(&state.player, &contacts, &state.obstacles, state.fuel, &state.rules);
    if outcome.is_terminal() {
        let player = &mut state.player;
        player.outcome = outcome;
        let impact = contacts.vertical.map(|c| c.impact_velocity).unwrap_or(0.0);
        log::info!(
            "{:?} at tick {} (pos ({:.3}, {:.3}), impact {:.3}, fuel {:.1})",
            outcome,
            state.time_ticks,
            player.position.x,
            player.position.y,
            impact,
            state.fuel
        );
    }

    TickReport {
        advanced: true,
        burn,
        contacts,
    }
}
