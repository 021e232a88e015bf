//! Single-paddle Pong in the terminal
//!
//! Interactive by default; `--headless` lets the autopilot play with a fixed
//! clock and prints a summary instead of drawing.

mod camera;
mod input;
mod renderer;
mod terminal;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::autopilot::Autopilot;
use game_core::driver::{
    EndReason, FixedClock, NullRenderer, Outcome, RunOptions, Session, SilentAudio,
};
use game_core::{Config, ExitRule, GameState};

use crate::input::KeyboardInput;
use crate::renderer::TerminalRenderer;
use crate::terminal::{Bell, PacedClock, TerminalGuard};

const DEFAULT_HEADLESS_FRAMES: u64 = 3_600;
const GAME_OVER_WAIT: Duration = Duration::from_secs(3);

#[derive(Parser, Debug)]
#[command(name = "pong_term", version, about = "Single-paddle Pong in the terminal")]
struct Cli {
    /// TOML file overriding the default field, ball and paddle settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let the autopilot play without drawing
    #[arg(long)]
    headless: bool,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Fixed frame time in seconds for headless runs
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Target frames per second for interactive play
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Grow the ball speed a little every frame
    #[arg(long)]
    speed_up: bool,

    /// Only end the game once the whole ball has left the field
    #[arg(long)]
    strict_exit: bool,

    /// No terminal bell on hits
    #[arg(long)]
    mute: bool,
}

impl Cli {
    fn build_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config: {}", path.display()))?,
            None => Config::new(),
        };
        if self.speed_up {
            config = config.with_classic_speed_up();
        }
        if self.strict_exit {
            config.exit_rule = ExitRule::TrailingEdge;
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.build_config()?;
    log::info!("Starting with {config:?}");

    let outcome = if cli.headless {
        run_headless(&cli, &config)?
    } else {
        run_interactive(&cli, &config)?
    };

    print_summary(&outcome);
    Ok(())
}

fn run_headless(cli: &Cli, config: &Config) -> Result<Outcome> {
    anyhow::ensure!(
        cli.dt.is_finite() && cli.dt > 0.0,
        "--dt must be positive, got {}",
        cli.dt
    );
    let options = RunOptions {
        max_frames: Some(cli.frames.unwrap_or(DEFAULT_HEADLESS_FRAMES)),
    };
    let mut session = Session::new(
        Autopilot::default(),
        FixedClock::new(cli.dt),
        NullRenderer,
        SilentAudio,
    );
    let outcome = session.run(GameState::from_config(config), config, options)?;
    Ok(outcome)
}

fn run_interactive(cli: &Cli, config: &Config) -> Result<Outcome> {
    let size = crossterm::terminal::size().context("failed to query terminal size")?;
    let guard = TerminalGuard::enter().context("failed to set up terminal")?;

    let mut session = Session::new(
        KeyboardInput::default(),
        PacedClock::new(cli.fps),
        TerminalRenderer::new(io::stdout(), size),
        Bell::new(io::stdout(), !cli.mute),
    );
    let options = RunOptions {
        max_frames: cli.frames,
    };
    let outcome = session.run(GameState::from_config(config), config, options)?;

    if outcome.reason == EndReason::BallExited {
        // Leave the final frame up for a moment
        if let Err(e) = crossterm::event::poll(GAME_OVER_WAIT) {
            log::warn!("Failed to wait for a key: {e}");
        }
    }

    drop(guard);
    Ok(outcome)
}

fn print_summary(outcome: &Outcome) {
    let reason = match outcome.reason {
        EndReason::BallExited => "ball exited",
        EndReason::Quit => "quit",
        EndReason::FrameLimit => "frame limit reached",
    };
    println!("Game finished: {reason}");
    println!("  Frames:       {}", outcome.frames);
    println!("  Time:         {:.2}s", outcome.time.now);
    println!("  Paddle hits:  {}", outcome.paddle_hits);
    println!("  Wall hits:    {}", outcome.wall_hits);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pong_term"]);
        assert!(!cli.headless);
        assert_eq!(cli.fps, 60);
        let config = cli.build_config().expect("Defaults are valid");
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_cli_flags_adjust_config() {
        let cli = Cli::parse_from(["pong_term", "--speed-up", "--strict-exit"]);
        let config = cli.build_config().expect("Flags keep config valid");
        assert_eq!(config.exit_rule, ExitRule::TrailingEdge);
        assert_ne!(config.speed_up, game_core::SpeedUp::Off);
    }

    #[test]
    fn test_headless_run_reaches_frame_limit() {
        let cli = Cli::parse_from(["pong_term", "--headless", "--frames", "300"]);
        let config = cli.build_config().expect("Defaults are valid");
        let outcome = run_headless(&cli, &config).expect("Headless run never fails");
        assert_eq!(outcome.reason, EndReason::FrameLimit);
        assert_eq!(outcome.frames, 300);
    }

    #[test]
    fn test_headless_rejects_bad_dt() {
        let cli = Cli::parse_from(["pong_term", "--headless", "--dt", "0"]);
        let config = cli.build_config().expect("Defaults are valid");
        assert!(run_headless(&cli, &config).is_err());
    }

    #[test]
    fn test_bundled_classic_config() {
        let config = Config::from_toml_str(include_str!("../config/classic.toml"))
            .expect("Bundled config should parse");
        assert_eq!(config, Config::new().with_classic_speed_up());
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let cli = Cli::parse_from(["pong_term", "--config", "/nope/pong.toml"]);
        let err = cli.build_config().expect_err("Missing file should fail");
        assert!(err.to_string().contains("failed to load config"));
    }
}
