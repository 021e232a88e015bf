//! Computer-controlled paddle input
//!
//! Strategy:
//! 1. If the ball is heading for the paddle, predict where it will cross the
//!    paddle's face, folding the path off the top and bottom walls.
//! 2. Steer the paddle centre toward that point, with a deadzone so it
//!    does not jitter.
//! 3. If the ball is moving away, drift back to the middle of the field.

use crate::driver::{FrameInput, InputSource};
use crate::{Ball, BallState, Field, Paddle, PaddleInput};

/// Autopilot tuning
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// How close (in field units) the paddle centre must be to the target
    pub deadzone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { deadzone: 4.0 }
    }
}

impl Autopilot {
    /// Pick a paddle direction for the current field
    pub fn decide(&self, field: &Field) -> PaddleInput {
        let paddle = &field.paddle;
        let target_y = match field.ball {
            BallState::Active(ball) => self.target_y(&ball, paddle, field.height),
            BallState::Exited => return PaddleInput::Neither,
        };

        let paddle_center = paddle.pos.y + paddle.size.y / 2.0;
        let diff = target_y - paddle_center;
        if diff > self.deadzone {
            PaddleInput::Down
        } else if diff < -self.deadzone {
            PaddleInput::Up
        } else {
            PaddleInput::Neither
        }
    }

    fn target_y(&self, ball: &Ball, paddle: &Paddle, field_height: f32) -> f32 {
        let ball_center = ball.pos.y + ball.size.y / 2.0;
        if ball.vel.x >= 0.0 {
            return field_height / 2.0;
        }

        let distance = (ball.pos.x - paddle.right()).max(0.0);
        let time_to_reach = distance / -ball.vel.x;
        let predicted = ball_center + ball.vel.y * time_to_reach;
        fold_into(predicted, ball.size.y / 2.0, field_height - ball.size.y / 2.0)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, field: &Field) -> FrameInput {
        FrameInput::from_paddle(self.decide(field))
    }
}

/// Reflect `y` back into `[lo, hi]` as if it bounced off both ends
fn fold_into(y: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span <= 0.0 {
        return lo;
    }
    let period = 2.0 * span;
    let offset = (y - lo).rem_euclid(period);
    if offset <= span {
        lo + offset
    } else {
        lo + period - offset
    }
}
