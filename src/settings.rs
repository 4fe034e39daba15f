//! Game settings and tuning
//!
//! Loaded from a JSON file; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::INITIAL_FUEL;
use crate::sim::{LandingRules, ThrustTuning};

/// Data-driven tuning for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Thrusters and coasting drift
    pub thrust: ThrustTuning,
    /// Win/loss thresholds
    pub landing: LandingRules,
    /// Fuel at the start of a run
    pub initial_fuel: f32,
    /// Cap on simulation steps per rendered frame (`None` = uncapped)
    pub max_substeps: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thrust: ThrustTuning::default(),
            landing: LandingRules::default(),
            initial_fuel: INITIAL_FUEL,
            max_substeps: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, `None` if malformed
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Invalid settings: {}", e);
                None
            }
        }
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Some(settings) = Self::from_json(&json) {
                log::info!("Loaded settings from {}", path.display());
                return settings;
            }
        }

        log::warn!("Using default settings ({} not usable)", path.display());
        Self::default()
    }

    /// Write settings to a file as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
