use rand::{CryptoRng, RngCore};

use crate::constants::RESULT_PREFIX;
use crate::error::WheelError;
use crate::outcome;
use crate::prize_config::PrizeConfig;
use crate::randomness::secure_random_angle;
use crate::wheel_geometry::normalize_deg;

/// Cubic ease-out: fast start, slow finish.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Represents the result of a wheel spin
#[derive(Debug, Clone, PartialEq)]
pub struct WheelResult {
    pub index: usize,
    pub name: String,
}

impl WheelResult {
    pub fn message(&self) -> String {
        format!("{}{}", RESULT_PREFIX, self.name)
    }
}

/// One running spin. The clock starts at the first frame it sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    target_deg: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl SpinAnimation {
    pub fn new(target_deg: f64, duration_ms: f64) -> Self {
        Self {
            target_deg,
            duration_ms,
            started_at: None,
        }
    }

    pub fn target_deg(&self) -> f64 {
        self.target_deg
    }

    /// Fraction of the animation elapsed at `timestamp`, clamped to `[0, 1]`.
    pub fn progress(&mut self, timestamp: f64) -> f64 {
        let start = *self.started_at.get_or_insert(timestamp);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((timestamp - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn rotation_at(&self, t: f64) -> f64 {
        normalize_deg(self.target_deg * ease_out_cubic(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinTrigger {
    Started,
    AlreadySpinning,
}

/// What a single animation frame produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStep {
    Idle,
    Animating { rotation_deg: f64 },
    Completed { rotation_deg: f64, result: WheelResult },
}

/// Represents the current state of the wheel
///
/// `IDLE -> SPINNING` on a trigger, `SPINNING -> IDLE` once the frame that
/// reaches `t = 1` has resolved the winner. A spin cannot be cancelled.
#[derive(Debug, Clone, Default)]
pub struct WheelGame {
    rotation_deg: f64,
    spin: Option<SpinAnimation>,
    last_result: Option<WheelResult>,
}

impl WheelGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    pub fn last_result(&self) -> Option<&WheelResult> {
        self.last_result.as_ref()
    }

    /// Starts a spin towards a target drawn from `rng`. Ignored while a spin
    /// is already running.
    pub fn start_spin<R>(&mut self, config: &PrizeConfig, rng: &mut R) -> Result<SpinTrigger, WheelError>
    where
        R: RngCore + CryptoRng,
    {
        if self.is_spinning() {
            log::warn!("Spin requested while the wheel is still turning");
            return Ok(SpinTrigger::AlreadySpinning);
        }
        let target = secure_random_angle(rng, config.spin().min_spin_degrees)?;
        Ok(self.spin_to(config, target))
    }

    /// Starts a spin that animates from 0 to `target_deg`. The resting angle is
    /// kept until the first frame of the new spin overwrites it.
    pub fn spin_to(&mut self, config: &PrizeConfig, target_deg: f64) -> SpinTrigger {
        if self.is_spinning() {
            return SpinTrigger::AlreadySpinning;
        }
        log::info!("Spinning {:.1} degrees", target_deg);
        self.spin = Some(SpinAnimation::new(
            target_deg,
            config.spin().duration_ms,
        ));
        self.last_result = None;
        SpinTrigger::Started
    }

    /// Animation step, called once per display frame with its timestamp.
    pub fn advance(&mut self, config: &PrizeConfig, pointer_deg: f64, timestamp: f64) -> FrameStep {
        let Some(spin) = self.spin.as_mut() else {
            return FrameStep::Idle;
        };
        let t = spin.progress(timestamp);
        self.rotation_deg = spin.rotation_at(t);
        if t < 1.0 {
            return FrameStep::Animating {
                rotation_deg: self.rotation_deg,
            };
        }

        let result = outcome::resolve(config, pointer_deg, self.rotation_deg);
        self.complete_spin(result.clone());
        FrameStep::Completed {
            rotation_deg: self.rotation_deg,
            result,
        }
    }

    fn complete_spin(&mut self, result: WheelResult) {
        log::info!("Wheel stopped at {:.2} on {}", self.rotation_deg, result.name);
        self.spin = None;
        self.last_result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize_config::{PrizeEntry, SpinSettings, WheelConfig};
    use crate::randomness::tests::UnavailableRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const POINTER: f64 = 90.0;

    fn halves() -> PrizeConfig {
        PrizeConfig::new(WheelConfig {
            prizes: vec![
                PrizeEntry::new("A", 50.0, "#ff0000"),
                PrizeEntry::new("B", 50.0, "#00ff00"),
            ],
            spin: SpinSettings {
                duration_ms: 1000.0,
                min_spin_degrees: 720.0,
            },
        })
        .unwrap()
    }

    /// Drives frames 16ms apart until the spin finishes.
    fn run_frames(game: &mut WheelGame, config: &PrizeConfig, start: f64) -> Vec<FrameStep> {
        let mut steps = Vec::new();
        let mut ts = start;
        loop {
            let step = game.advance(config, POINTER, ts);
            let done = !matches!(step, FrameStep::Animating { .. });
            steps.push(step);
            if done {
                return steps;
            }
            ts += 16.0;
        }
    }

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let mut previous = ease_out_cubic(0.0);
        for i in 1..=1000 {
            let current = ease_out_cubic(i as f64 / 1000.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_idle_wheel_ignores_frames() {
        let config = halves();
        let mut game = WheelGame::new();
        assert_eq!(game.advance(&config, POINTER, 123.0), FrameStep::Idle);
        assert_eq!(game.rotation_deg(), 0.0);
    }

    #[test]
    fn test_first_frame_starts_the_clock() {
        let config = halves();
        let mut game = WheelGame::new();
        game.spin_to(&config, 800.0);
        assert_eq!(
            game.advance(&config, POINTER, 5000.0),
            FrameStep::Animating { rotation_deg: 0.0 }
        );
        // halfway through: 800 * 0.875 = 700 -> 340
        assert_eq!(
            game.advance(&config, POINTER, 5500.0),
            FrameStep::Animating { rotation_deg: 340.0 }
        );
    }

    #[test]
    fn test_retrigger_while_spinning_is_ignored() {
        let config = halves();
        let mut game = WheelGame::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(game.start_spin(&config, &mut rng).unwrap(), SpinTrigger::Started);
        assert!(game.is_spinning());
        assert_eq!(
            game.start_spin(&config, &mut rng).unwrap(),
            SpinTrigger::AlreadySpinning
        );
        assert_eq!(game.spin_to(&config, 10.0), SpinTrigger::AlreadySpinning);

        let steps = run_frames(&mut game, &config, 0.0);
        let completed = steps
            .iter()
            .filter(|s| matches!(s, FrameStep::Completed { .. }))
            .count();
        assert_eq!(completed, 1);
        assert_eq!(game.advance(&config, POINTER, 99_999.0), FrameStep::Idle);
    }

    #[test]
    fn test_spin_runs_to_completion_once() {
        let config = halves();
        let mut game = WheelGame::new();
        let mut rng = StdRng::seed_from_u64(99);
        game.start_spin(&config, &mut rng).unwrap();

        let steps = run_frames(&mut game, &config, 100.0);
        assert!(!game.is_spinning());
        match steps.last() {
            Some(FrameStep::Completed { result, rotation_deg }) => {
                assert!(!result.message().is_empty());
                assert_eq!(*rotation_deg, game.rotation_deg());
                assert_eq!(game.last_result(), Some(result));
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_full_turns_land_on_first_half() {
        let config = halves();
        let mut game = WheelGame::new();
        game.spin_to(&config, 720.0);
        game.advance(&config, POINTER, 0.0);
        match game.advance(&config, POINTER, 1000.0) {
            FrameStep::Completed { rotation_deg, result } => {
                assert_eq!(rotation_deg, 0.0);
                assert_eq!(result.name, "A");
                assert_eq!(result.message(), "You won: A");
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_half_turn_lands_on_second_half() {
        let config = halves();
        let mut game = WheelGame::new();
        game.spin_to(&config, 900.0);
        let steps = run_frames(&mut game, &config, 0.0);
        match steps.last() {
            Some(FrameStep::Completed { rotation_deg, result }) => {
                assert_eq!(*rotation_deg, 180.0);
                assert_eq!(result.name, "B");
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_next_spin_restarts_from_zero() {
        let config = halves();
        let mut game = WheelGame::new();
        game.spin_to(&config, 900.0);
        run_frames(&mut game, &config, 0.0);
        assert_eq!(game.rotation_deg(), 180.0);

        game.spin_to(&config, 810.0);
        assert!(game.last_result().is_none());
        // resting angle survives until the first frame of the new spin
        assert_eq!(game.rotation_deg(), 180.0);
        assert_eq!(
            game.advance(&config, POINTER, 2000.0),
            FrameStep::Animating { rotation_deg: 0.0 }
        );
        let steps = run_frames(&mut game, &config, 2016.0);
        match steps.last() {
            Some(FrameStep::Completed { rotation_deg, result }) => {
                assert_eq!(*rotation_deg, 90.0);
                // effective angle 0 is the start of the first half
                assert_eq!(result.name, "A");
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_random_source_keeps_wheel_idle() {
        let config = halves();
        let mut game = WheelGame::new();
        let result = game.start_spin(&config, &mut UnavailableRng);
        assert!(matches!(result, Err(WheelError::Randomness(_))));
        assert!(!game.is_spinning());
    }
}
