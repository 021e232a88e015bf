//! Real-time frame loop over narrow input/clock/render/audio interfaces
//!
//! The loop itself is deterministic given its collaborators, so tests and the
//! headless mode run it with a fixed clock and a null renderer.

use std::convert::Infallible;

use crate::systems::sanitize_dt;
use crate::{Config, Events, Field, GameState, PaddleInput, Time};

/// What the input source reports for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn from_paddle(input: PaddleInput) -> Self {
        Self {
            up: input == PaddleInput::Up,
            down: input == PaddleInput::Down,
            quit: false,
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    pub fn paddle(&self) -> PaddleInput {
        PaddleInput::from_keys(self.up, self.down)
    }
}

/// Per-frame input query
pub trait InputSource {
    fn poll(&mut self, field: &Field) -> FrameInput;
}

/// Seconds since the previous call (monotonic, non-negative)
pub trait Clock {
    fn elapsed(&mut self) -> f32;
}

/// Draws a snapshot; never feeds back into the simulation
pub trait Renderer {
    type Error: std::error::Error + Send + Sync + 'static;

    fn draw(&mut self, field: &Field) -> Result<(), Self::Error>;

    /// Called once after the loop ends
    fn finish(&mut self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Sound effects, fire-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    PaddleHit,
    WallHit,
}

pub trait Audio {
    fn play(&mut self, sound: Sound);
}

/// Driver errors
#[derive(thiserror::Error, Debug)]
pub enum DriverError<E>
where
    E: std::error::Error + 'static,
{
    #[error("renderer failed: {0}")]
    Render(#[source] E),
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    BallExited,
    Quit,
    FrameLimit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop after this many simulated frames
    pub max_frames: Option<u64>,
}

/// Summary of a finished loop
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub reason: EndReason,
    pub frames: u64,
    pub paddle_hits: u64,
    pub wall_hits: u64,
    pub time: Time,
    pub final_state: GameState,
}

/// The collaborators a game loop needs
pub struct Session<I, C, R, A> {
    pub input: I,
    pub clock: C,
    pub renderer: R,
    pub audio: A,
}

impl<I, C, R, A> Session<I, C, R, A>
where
    I: InputSource,
    C: Clock,
    R: Renderer,
    A: Audio,
{
    pub fn new(input: I, clock: C, renderer: R, audio: A) -> Self {
        Self {
            input,
            clock,
            renderer,
            audio,
        }
    }

    /// Run frames until the ball exits, input asks to quit, or the frame
    /// limit is reached. Each frame: draw, measure time, poll input, step.
    pub fn run(
        &mut self,
        mut state: GameState,
        config: &Config,
        options: RunOptions,
    ) -> Result<Outcome, DriverError<R::Error>> {
        let mut time = Time::new(0.0, 0.0);
        let mut frames = 0u64;
        let mut paddle_hits = 0u64;
        let mut wall_hits = 0u64;

        let reason = loop {
            self.renderer
                .draw(state.field())
                .map_err(DriverError::Render)?;

            if state.is_over() {
                break EndReason::BallExited;
            }
            if options.max_frames.is_some_and(|max| frames >= max) {
                break EndReason::FrameLimit;
            }

            // Clamp dt to prevent large jumps after a stall
            let dt = sanitize_dt(self.clock.elapsed()).min(config.max_frame_dt);
            let input = self.input.poll(state.field());
            if input.quit {
                log::info!("Quit requested after {frames} frames");
                break EndReason::Quit;
            }

            let (next, events) = state.step(input.paddle(), dt, config);
            self.play_sounds(&events);
            paddle_hits += u64::from(events.ball_hit_paddle);
            wall_hits += u64::from(events.ball_hit_wall);

            time = time.advance(dt);
            frames += 1;
            state = next;
        };

        self.renderer
            .finish(&state)
            .map_err(DriverError::Render)?;

        Ok(Outcome {
            reason,
            frames,
            paddle_hits,
            wall_hits,
            time,
            final_state: state,
        })
    }

    fn play_sounds(&mut self, events: &Events) {
        if events.ball_hit_paddle {
            self.audio.play(Sound::PaddleHit);
        }
        if events.ball_hit_wall {
            self.audio.play(Sound::WallHit);
        }
    }
}

/// Clock that reports the same step every frame
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Clock for FixedClock {
    fn elapsed(&mut self) -> f32 {
        self.dt
    }
}

/// Replays a list of inputs, then holds still
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: std::collections::VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    /// `count` frames of the same paddle input
    pub fn repeat(input: PaddleInput, count: usize) -> Self {
        Self::new(std::iter::repeat(FrameInput::from_paddle(input)).take(count))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _field: &Field) -> FrameInput {
        self.inputs.pop_front().unwrap_or_default()
    }
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    type Error = Infallible;

    fn draw(&mut self, _field: &Field) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Audio that plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl Audio for SilentAudio {
    fn play(&mut self, _sound: Sound) {}
}
