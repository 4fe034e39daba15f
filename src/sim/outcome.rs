//! Landing rules
//!
//! Neutral -> Win | Loss, evaluated once per step while Neutral. Terminal
//! states never change again.

use serde::{Deserialize, Serialize};

use super::body::{Body, Outcome};
use super::collision::{Side, StepContacts};
use crate::consts::SAFE_LANDING_SPEED;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingRules {
    /// Touchdown must be slower than this (|velocity.y|) to count as a landing
    pub safe_landing_speed: f32,
}

impl Default for LandingRules {
    fn default() -> Self {
        Self {
            safe_landing_speed: SAFE_LANDING_SPEED,
        }
    }
}

/// Classify the step that just ran.
///
/// - Bottom contact with a landing pad, slow enough, with fuel >= 0: Win
/// - Bottom contact with terrain, any top/side contact, or an empty tank: Loss
/// - Otherwise (including near misses without contact): unchanged
pub fn evaluate(
    lander: &Body,
    contacts: &StepContacts,
    obstacles: &[Body],
    fuel: f32,
    rules: &LandingRules,
) -> Outcome {
    if lander.outcome.is_terminal() {
        return lander.outcome;
    }

    if contacts.horizontal.is_some() || lander.collisions.any_side_or_top() {
        return Outcome::Loss;
    }

    if let Some(contact) = contacts.vertical {
        if contact.side != Side::Bottom {
            return Outcome::Loss;
        }
        let on_pad = obstacles
            .get(contact.obstacle)
            .is_some_and(|pad| pad.is_landing_pad());
        let gentle = contact.impact_velocity.abs() < rules.safe_landing_speed;

        return if on_pad && gentle && fuel >= 0.0 {
            Outcome::Win
        } else {
            Outcome::Loss
        };
    }

    if fuel <= 0.0 {
        return Outcome::Loss;
    }

    Outcome::Neutral
}
