//! Platform seam and loop driver
//!
//! The window, input devices, and display live outside this crate;
//! [`InputSource`] and [`Presenter`] are the holes they plug into.
//! [`run`] drives the fixed-rate loop: sample, tick, build the scene,
//! present, sleep until the next deadline.

pub mod autopilot;
pub mod console;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::sim::{GamePhase, GameState, Scene, TickInput, build_scene, tick};

/// How long the terminal banner stays up before the loop returns
pub const TERMINAL_HOLD: Duration = Duration::from_millis(3000);

/// Source of held input signals, sampled once per tick
pub trait InputSource {
    fn sample(&mut self, state: &GameState) -> TickInput;
}

/// Consumer of per-tick draw commands
pub trait Presenter {
    fn present(&mut self, scene: &Scene);
}

/// Replays a fixed input sequence, then yields defaults. For tests and
/// recorded sessions.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self, _state: &GameState) -> TickInput {
        self.queue.pop_front().unwrap_or_default()
    }
}

/// Blocking frame limiter with an absolute deadline per tick
pub struct FrameClock {
    tick_duration: Duration,
    next_tick_time: Instant,
}

impl FrameClock {
    pub fn new(tick_hz: u32) -> Self {
        Self {
            tick_duration: Duration::from_nanos(1_000_000_000 / tick_hz as u64),
            next_tick_time: Instant::now(),
        }
    }

    /// Sleep until the next tick deadline. Resets the deadline instead of
    /// chasing it once the loop is more than two ticks behind.
    pub fn wait(&mut self) {
        self.next_tick_time += self.tick_duration;
        let now = Instant::now();
        if self.next_tick_time > now {
            std::thread::sleep(self.next_tick_time - now);
        } else if now - self.next_tick_time > self.tick_duration * 2 {
            self.next_tick_time = now;
        }
    }
}

/// Drive a session to its end and return the final phase.
///
/// Quit lets the tick in flight finish and exits after presenting it.
/// A terminal phase presents the banner scene, holds it, then exits.
pub fn run(
    state: &mut GameState,
    input: &mut impl InputSource,
    presenter: &mut impl Presenter,
) -> GamePhase {
    let mut clock = FrameClock::new(state.config.tick_hz);
    log::info!(
        "loop started at {} Hz (seed {})",
        state.config.tick_hz,
        state.seed
    );

    while state.running {
        let sampled = input.sample(state);
        tick(state, &sampled);
        presenter.present(&build_scene(state));

        if sampled.quit {
            log::info!("quit requested, stopping after tick {}", state.time_ticks);
            state.running = false;
        } else if state.phase.is_terminal() {
            std::thread::sleep(TERMINAL_HOLD);
            state.running = false;
        } else {
            clock.wait();
        }
    }

    log::info!(
        "loop finished in phase {:?} after {} ticks",
        state.phase,
        state.time_ticks
    );
    state.phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;

    struct CountingPresenter {
        frames: u64,
    }

    impl Presenter for CountingPresenter {
        fn present(&mut self, _scene: &Scene) {
            self.frames += 1;
        }
    }

    #[test]
    fn test_tick_duration_at_60hz() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.tick_duration.as_nanos(), 16_666_666);
    }

    #[test]
    fn test_scripted_input_defaults_after_queue() {
        let mut source = ScriptedInput::new([TickInput {
            fire: true,
            ..Default::default()
        }]);
        let state = GameState::new(GameConfig::default(), 1);

        assert!(source.sample(&state).fire);
        assert!(!source.sample(&state).fire);
    }

    #[test]
    fn test_run_stops_on_quit_after_finishing_the_tick() {
        let mut state = GameState::new(GameConfig::default(), 5);
        let mut input = ScriptedInput::new([
            TickInput::default(),
            TickInput::default(),
            TickInput {
                quit: true,
                ..Default::default()
            },
        ]);
        let mut presenter = CountingPresenter { frames: 0 };

        let phase = run(&mut state, &mut input, &mut presenter);

        assert_eq!(phase, GamePhase::Playing);
        assert!(!state.running);
        // The quit tick itself still ran and was presented
        assert_eq!(state.time_ticks, 3);
        assert_eq!(presenter.frames, 3);
    }
}
