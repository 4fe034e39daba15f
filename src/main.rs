//! Lunar Lander entry point
//!
//! Native builds run a headless descent: a seeded, jittered clock stands in
//! for the display's frame timing and a simple autopilot stands in for the
//! keyboard. Pass a settings JSON path as the first argument to override tuning.

use std::path::PathBuf;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use lunar_lander::sim::Intent;
use lunar_lander::{Game, Screen, Settings};

/// Seed for the synthetic frame clock
const DEMO_SEED: u64 = 0x1a4d;
/// Give up after this much simulated wall time
const DEMO_TIME_LIMIT: f64 = 120.0;
/// Frame time range (seconds), roughly 30-120 fps
const FRAME_TIME: std::ops::Range<f64> = 0.008..0.034;
/// Autopilot fires the main thruster when sinking faster than this
const AUTOPILOT_SINK_RATE: f32 = 0.3;

fn main() {
    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map(|path| Settings::load(&path))
        .unwrap_or_default();

    let mut game = Game::new(&settings);
    let mut rng = Pcg32::seed_from_u64(DEMO_SEED);
    let mut now = 0.0;
    let mut frames = 0u64;
    let mut last_gauge = game.state.fuel_gauge();

    while game.is_running() {
        now += rng.random_range(FRAME_TIME);
        frames += 1;

        let intent = autopilot(&game);
        let report = game.frame(now, intent);
        log::trace!(
            "frame {} ran {} steps ({:?}), {} bodies drawn, over pad: {}",
            frames,
            report.steps,
            report.burn,
            game.state.visible_bodies().count(),
            game.state.over_landing_pad()
        );

        let gauge = game.state.fuel_gauge();
        if gauge != last_gauge {
            log::debug!("Fuel {}", gauge);
            last_gauge = gauge;
        }

        if now > DEMO_TIME_LIMIT {
            log::warn!("Time limit reached, stopping");
            game.quit();
        }
    }

    let player = &game.state.player;
    log::info!(
        "{} frames, {} steps, final position ({:.3}, {:.3}), fuel {}",
        frames,
        game.state.time_ticks,
        player.position.x,
        player.position.y,
        game.state.fuel_gauge()
    );

    match game.screen() {
        Screen::MissionAccomplished => println!("Mission accomplished"),
        Screen::MissionFailed => println!("Mission failed"),
        Screen::Flight => println!("Still flying"),
    }
}

/// Hold the sink rate down with the main thruster, otherwise coast
fn autopilot(game: &Game) -> Intent {
    if game.state.player.velocity.y < -AUTOPILOT_SINK_RATE {
        Intent::Up
    } else {
        Intent::Neutral
    }
}
