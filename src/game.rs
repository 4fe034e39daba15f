//! Frame driver
//!
//! Owns the simulation state, the fixed-step scheduler and the run flag. The
//! platform layer calls [`Game::frame`] once per rendered frame with the clock
//! reading and the intent it sampled, then draws whatever [`Game::screen`] says.

use crate::settings::Settings;
use crate::sim::{Burn, FixedStepScheduler, GameState, Intent, Outcome, TickInput, tick};

/// What the renderer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Bodies plus the fuel gauge
    Flight,
    MissionAccomplished,
    MissionFailed,
}

impl From<Outcome> for Screen {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Neutral => Screen::Flight,
            Outcome::Win => Screen::MissionAccomplished,
            Outcome::Loss => Screen::MissionFailed,
        }
    }
}

/// Summary of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Simulation steps run this frame
    pub steps: u32,
    /// What the frame's intent did, if a step consumed it
    pub burn: Option<Burn>,
    pub outcome: Outcome,
}

/// A running game
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    scheduler: FixedStepScheduler,
    /// Intents sampled on frames that have not run a step yet, oldest first
    pending: Vec<Intent>,
    running: bool,
}

impl Game {
    /// The moon-base level with the given settings
    pub fn new(settings: &Settings) -> Self {
        Self::with_state(GameState::from_settings(settings), settings)
    }

    /// Run a custom state under the given settings' scheduling
    pub fn with_state(state: GameState, settings: &Settings) -> Self {
        Self {
            state,
            scheduler: FixedStepScheduler::default().with_max_steps(settings.max_substeps),
            pending: Vec::new(),
            running: true,
        }
    }

    /// Advance to wall-clock time `now` (seconds).
    ///
    /// The intent is applied by the first step of this frame only. A frame
    /// too short to run a step queues it for the next step instead.
    pub fn frame(&mut self, now: f64, intent: Intent) -> FrameReport {
        self.pending.push(intent);

        let state = &mut self.state;
        let pending = &mut self.pending;
        let mut burn = None;

        let steps = self.scheduler.advance(now, |dt| {
            let input = TickInput {
                controls: std::mem::take(&mut *pending),
            };
            let report = tick(state, &input, dt);
            burn = burn.or(report.burn);
        });

        FrameReport {
            steps,
            burn,
            outcome: self.state.outcome(),
        }
    }

    /// Restart frame timing, e.g. after the window was hidden
    pub fn resync(&mut self, now: f64) {
        self.scheduler.reset(now);
    }

    pub fn screen(&self) -> Screen {
        self.state.outcome().into()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Whether the loop should keep going
    pub fn is_running(&self) -> bool {
        self.running && !self.state.outcome().is_terminal()
    }

    /// Clear the run flag
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn scheduler(&self) -> &FixedStepScheduler {
        &self.scheduler
    }
}
