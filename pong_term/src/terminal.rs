//! Terminal session plumbing: raw mode, frame pacing, the bell

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use game_core::driver::{Audio, Clock, Sound};

/// Raw mode + alternate screen for as long as this lives
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
            log::warn!("Failed to leave alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {e}");
        }
    }
}

/// Wall clock that sleeps so frames are at least `1 / fps` apart
#[derive(Debug, Clone, Copy)]
pub struct PacedClock {
    frame: Duration,
    last: Instant,
}

impl PacedClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            last: Instant::now(),
        }
    }
}

impl Clock for PacedClock {
    fn elapsed(&mut self) -> f32 {
        let target = self.last + self.frame;
        let now = Instant::now();
        if now < target {
            thread::sleep(target - now);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Rings the terminal bell on every hit
pub struct Bell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }
}

impl<W: Write> Audio for Bell<W> {
    fn play(&mut self, sound: Sound) {
        if !self.enabled {
            return;
        }
        log::trace!("Playing {sound:?}");
        if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            log::debug!("Bell failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paced_clock_waits_for_frame() {
        let mut clock = PacedClock::new(100);
        let dt = clock.elapsed();
        assert!(dt >= 0.01, "Frame should last at least 10ms, got {dt}");
        assert!(clock.elapsed() >= 0.01);
    }

    #[test]
    fn test_bell_rings_per_sound() {
        let mut bell = Bell::new(Vec::new(), true);
        bell.play(Sound::PaddleHit);
        bell.play(Sound::WallHit);
        assert_eq!(bell.out, b"\x07\x07");
    }

    #[test]
    fn test_muted_bell_is_silent() {
        let mut bell = Bell::new(Vec::new(), false);
        bell.play(Sound::PaddleHit);
        assert!(bell.out.is_empty());
    }
}
