//! Keyboard input handling
//!
//! Most terminals only report key presses and auto-repeats, never releases,
//! so a direction counts as held until no repeat has arrived for a short
//! latch window.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::driver::{FrameInput, InputSource};
use game_core::{Field, PaddleInput};

/// Long enough to bridge the gap before the OS starts auto-repeating
pub const DEFAULT_LATCH: Duration = Duration::from_millis(300);

/// Map a key to a paddle direction
pub fn key_direction(code: KeyCode) -> Option<PaddleInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(PaddleInput::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(PaddleInput::Down),
        _ => None,
    }
}

pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Remembers the last direction pressed and when
#[derive(Debug, Clone, Copy)]
pub struct KeyLatch {
    held: Option<(PaddleInput, Instant)>,
    window: Duration,
}

impl KeyLatch {
    pub fn new(window: Duration) -> Self {
        Self { held: None, window }
    }

    pub fn press(&mut self, dir: PaddleInput, now: Instant) {
        self.held = Some((dir, now));
    }

    pub fn release(&mut self, dir: PaddleInput) {
        if matches!(self.held, Some((held, _)) if held == dir) {
            self.held = None;
        }
    }

    pub fn current(&self, now: Instant) -> PaddleInput {
        match self.held {
            Some((dir, at)) if now.saturating_duration_since(at) <= self.window => dir,
            _ => PaddleInput::Neither,
        }
    }
}

/// Input source reading crossterm events without blocking
#[derive(Debug, Clone, Copy)]
pub struct KeyboardInput {
    latch: KeyLatch,
}

impl KeyboardInput {
    pub fn new(latch: Duration) -> Self {
        Self {
            latch: KeyLatch::new(latch),
        }
    }

    /// Apply one event; returns true if it asks to quit
    fn handle(&mut self, event: Event, now: Instant) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        if key.kind == KeyEventKind::Release {
            if let Some(dir) = key_direction(key.code) {
                self.latch.release(dir);
            }
            return false;
        }
        if is_quit(&key) {
            return true;
        }
        if let Some(dir) = key_direction(key.code) {
            self.latch.press(dir, now);
        }
        false
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new(DEFAULT_LATCH)
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self, _field: &Field) -> FrameInput {
        let now = Instant::now();
        let mut quit = false;

        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => match event::read() {
                    Ok(event) => quit |= self.handle(event, now),
                    Err(e) => {
                        log::error!("Failed to read terminal event: {e}");
                        quit = true;
                        break;
                    }
                },
                Ok(false) => break,
                Err(e) => {
                    log::error!("Failed to poll terminal events: {e}");
                    quit = true;
                    break;
                }
            }
        }

        FrameInput {
            quit,
            ..FrameInput::from_paddle(self.latch.current(now))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_direction() {
        assert_eq!(key_direction(KeyCode::Up), Some(PaddleInput::Up));
        assert_eq!(key_direction(KeyCode::Char('w')), Some(PaddleInput::Up));
        assert_eq!(key_direction(KeyCode::Char('S')), Some(PaddleInput::Down));
        assert_eq!(key_direction(KeyCode::Left), None);
    }

    #[test]
    fn test_is_quit() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_latch_expires() {
        let start = Instant::now();
        let mut latch = KeyLatch::new(Duration::from_millis(100));
        latch.press(PaddleInput::Down, start);

        assert_eq!(latch.current(start + Duration::from_millis(50)), PaddleInput::Down);
        assert_eq!(
            latch.current(start + Duration::from_millis(150)),
            PaddleInput::Neither,
            "No repeat within the window releases the key"
        );
    }

    #[test]
    fn test_latch_release_only_matching_direction() {
        let now = Instant::now();
        let mut latch = KeyLatch::new(DEFAULT_LATCH);
        latch.press(PaddleInput::Up, now);
        latch.release(PaddleInput::Down);
        assert_eq!(latch.current(now), PaddleInput::Up);
        latch.release(PaddleInput::Up);
        assert_eq!(latch.current(now), PaddleInput::Neither);
    }

    #[test]
    fn test_handle_events() {
        let now = Instant::now();
        let mut input = KeyboardInput::default();

        assert!(!input.handle(press(KeyCode::Down), now));
        assert_eq!(input.latch.current(now), PaddleInput::Down);

        assert!(!input.handle(press(KeyCode::Up), now));
        assert_eq!(input.latch.current(now), PaddleInput::Up, "Latest key wins");

        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert!(!input.handle(release, now));
        assert_eq!(input.latch.current(now), PaddleInput::Neither);

        assert!(!input.handle(Event::Resize(80, 24), now));
        assert!(input.handle(press(KeyCode::Char('q')), now));
    }
}
