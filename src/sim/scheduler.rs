//! Fixed-timestep scheduler
//!
//! Turns variable wall-clock frame times into a whole number of fixed-size
//! steps. Unconsumed time is carried in the accumulator to the next frame and
//! never dropped, so the simulated time tracks the wall clock over a long run
//! regardless of frame rate. No interpolation between steps.

use crate::consts::FIXED_STEP;

#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    step: f64,
    accumulator: f64,
    previous_ticks: f64,
    max_steps: Option<u32>,
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self::new(FIXED_STEP)
    }
}

impl FixedStepScheduler {
    pub fn new(step: f32) -> Self {
        Self {
            step: step as f64,
            accumulator: 0.0,
            previous_ticks: 0.0,
            max_steps: None,
        }
    }

    /// Cap the steps run in one frame. Time past the cap stays in the
    /// accumulator and is worked off in later frames.
    ///
    /// A cap of zero would never step at all, so it is raised to one.
    pub fn with_max_steps(mut self, max_steps: Option<u32>) -> Self {
        if max_steps == Some(0) {
            log::warn!("Step cap of 0 would stall the simulation, using 1");
        }
        self.max_steps = max_steps.map(|max| max.max(1));
        self
    }

    pub fn step(&self) -> f32 {
        self.step as f32
    }

    /// Time carried over to the next frame (seconds)
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Clock reading of the previous frame (seconds)
    pub fn previous_ticks(&self) -> f64 {
        self.previous_ticks
    }

    /// Restart timing from `now` with an empty accumulator
    pub fn reset(&mut self, now: f64) {
        self.previous_ticks = now;
        self.accumulator = 0.0;
    }

    /// Account for the frame ending at `now` and run `step_fn` once per whole
    /// fixed step. Returns the number of steps run.
    pub fn advance(&mut self, now: f64, mut step_fn: impl FnMut(f32)) -> u32 {
        let mut delta = now - self.previous_ticks;
        self.previous_ticks = now;
        delta += self.accumulator;

        if delta < self.step {
            self.accumulator = delta;
            return 0;
        }

        let dt = self.step as f32;
        let mut steps = 0;
        while delta >= self.step {
            if self.max_steps.is_some_and(|max| steps >= max) {
                log::debug!("Step cap hit, deferring {:.4}s", delta);
                break;
            }
            step_fn(dt);
            delta -= self.step;
            steps += 1;
        }

        self.accumulator = delta;
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_frame_only_accumulates() {
        let mut scheduler = FixedStepScheduler::new(0.01);
        let mut calls = 0;
        let steps = scheduler.advance(0.004, |_| calls += 1);
        assert_eq!(steps, 0);
        assert_eq!(calls, 0);
        assert!((scheduler.accumulator() - 0.004).abs() < 1e-12);

        // The carried time counts toward the next frame
        let steps = scheduler.advance(0.011, |_| calls += 1);
        assert_eq!(steps, 1);
        assert_eq!(calls, 1);
        assert!((scheduler.accumulator() - 0.001).abs() < 1e-9);
    }

    #[test]
    fn test_long_frame_runs_several_steps() {
        let mut scheduler = FixedStepScheduler::new(0.01);
        let mut dts = Vec::new();
        let steps = scheduler.advance(0.0355, |dt| dts.push(dt));
        assert_eq!(steps, 3);
        assert!(dts.iter().all(|&dt| dt == 0.01));
        assert!((scheduler.accumulator() - 0.0055).abs() < 1e-9);
        assert_eq!(scheduler.previous_ticks(), 0.0355);
    }

    #[test]
    fn test_step_cap_defers_time() {
        let mut scheduler = FixedStepScheduler::new(0.01).with_max_steps(Some(2));
        let steps = scheduler.advance(0.05, |_| {});
        assert_eq!(steps, 2);
        assert!((scheduler.accumulator() - 0.03).abs() < 1e-9);

        // Deferred time is worked off, not dropped
        let steps = scheduler.advance(0.05, |_| {});
        assert_eq!(steps, 2);
        let steps = scheduler.advance(0.05, |_| {});
        assert_eq!(steps, 1);
        assert!(scheduler.accumulator().abs() < 1e-8);
    }

    #[test]
    fn test_zero_step_cap_still_advances() {
        let mut scheduler = FixedStepScheduler::new(0.01).with_max_steps(Some(0));
        let mut now = 0.0f64;
        let mut total = 0;
        for _ in 0..100 {
            now += 0.01;
            total += scheduler.advance(now, |_| {});
        }
        assert!(total >= 99);
        assert!(scheduler.accumulator() < 0.02);
    }

    #[test]
    fn test_reset() {
        let mut scheduler = FixedStepScheduler::new(0.01);
        scheduler.advance(0.005, |_| {});
        scheduler.reset(10.0);
        assert_eq!(scheduler.accumulator(), 0.0);
        assert_eq!(scheduler.advance(10.005, |_| {}), 0);
    }

    #[test]
    fn test_default_uses_fixed_step() {
        let scheduler = FixedStepScheduler::default();
        assert_eq!(scheduler.step(), FIXED_STEP);
    }

    proptest! {
        #[test]
        fn accumulator_conserves_time(frames in prop::collection::vec(0.0f64..0.1, 1..200)) {
            let mut scheduler = FixedStepScheduler::default();
            let step = scheduler.step() as f64;
            let mut now = 0.0f64;
            let mut total_steps = 0u64;
            for frame in &frames {
                now += frame;
                total_steps += scheduler.advance(now, |_| {}) as u64;
            }
            let simulated = total_steps as f64 * step + scheduler.accumulator();
            prop_assert!((simulated - now).abs() < 1e-9);
            prop_assert!(scheduler.accumulator() >= 0.0);
            prop_assert!(scheduler.accumulator() < step);
        }

        #[test]
        fn step_count_independent_of_frame_split(
            frames in prop::collection::vec(0.001f64..0.05, 1..100),
            extra in 0.1f64..0.9,
        ) {
            let step = FIXED_STEP as f64;
            // Keep the total away from a step boundary so rounding cannot flip the count
            let whole: f64 = frames.iter().sum::<f64>();
            let total = ((whole / step).floor() + extra) * step;

            let mut split = FixedStepScheduler::default();
            let mut now = 0.0f64;
            let mut split_steps = 0;
            for frame in &frames {
                now = (now + frame).min(total);
                split_steps += split.advance(now, |_| {});
            }
            split_steps += split.advance(total, |_| {});

            let mut single = FixedStepScheduler::default();
            let single_steps = single.advance(total, |_| {});

            prop_assert_eq!(split_steps, single_steps);
        }
    }
}
