//! Two-state game machine: running until the ball leaves the field.

use crate::{step_field, Config, Events, Field, PaddleInput};

/// Game states
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameState {
    Running(Field),
    /// Terminal. Holds the last field (ball exited) for a final draw.
    Over(Field),
}

impl GameState {
    pub fn new(field: Field) -> Self {
        if field.ball.is_exited() {
            GameState::Over(field)
        } else {
            GameState::Running(field)
        }
    }

    /// Start a game from the configured initial field
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.initial_field())
    }

    pub fn field(&self) -> &Field {
        match self {
            GameState::Running(field) | GameState::Over(field) => field,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Over(_))
    }

    /// Advance one frame. `Over` never transitions back.
    pub fn step(self, input: PaddleInput, dt: f32, config: &Config) -> (Self, Events) {
        match self {
            GameState::Running(field) => {
                let (next, events) = step_field(&field, input, dt, config);
                if next.ball.is_exited() {
                    log::info!("Game over");
                    (GameState::Over(next), events)
                } else {
                    (GameState::Running(next), events)
                }
            }
            GameState::Over(_) => (self, Events::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ball, BallState};
    use glam::Vec2;

    fn losing_state(config: &Config) -> GameState {
        let mut field = config.initial_field();
        field.ball = BallState::Active(Ball::new(
            Vec2::new(1.0, 300.0),
            Vec2::splat(10.0),
            Vec2::new(-50.0, 0.0),
        ));
        GameState::new(field)
    }

    #[test]
    fn test_new_game_is_running() {
        let state = GameState::from_config(&Config::new());
        assert!(!state.is_over());
    }

    #[test]
    fn test_running_to_over_on_exit() {
        let config = Config::new();
        let (state, _) = losing_state(&config).step(PaddleInput::Neither, 1.0, &config);
        assert!(state.is_over());
        assert!(state.field().ball.is_exited());
    }

    #[test]
    fn test_over_is_terminal() {
        let config = Config::new();
        let (over, _) = losing_state(&config).step(PaddleInput::Neither, 1.0, &config);
        let (again, events) = over.step(PaddleInput::Down, 0.5, &config);
        assert_eq!(again, over, "Over state does not change");
        assert!(!events.any_hit());
    }

    #[test]
    fn test_paddle_still_moves_on_final_frame() {
        let config = Config::new();
        let (state, _) = losing_state(&config).step(PaddleInput::Down, 0.1, &config);
        // Candidate x = -4: out on the same frame the paddle moves
        assert!(state.is_over());
        assert!((state.field().paddle.pos.y - 160.0).abs() < 1e-3);
    }

    #[test]
    fn test_field_with_exited_ball_starts_over() {
        let mut field = Config::new().initial_field();
        field.ball = BallState::Exited;
        assert!(GameState::new(field).is_over());
    }
}
