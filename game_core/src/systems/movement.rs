use glam::Vec2;

use super::collision::{resolve_speed_x, resolve_speed_y, Bounce};
use crate::{BallState, Config, Events, Field, Paddle, PaddleInput};

/// Negative, infinite or NaN frame times are treated as zero
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame time {dt}, using 0");
        0.0
    }
}

/// Advance the ball one frame, reflecting off the paddle and the three walls.
///
/// The new position is always `pos + dt * vel`; only the velocity is reflected.
/// Returns `BallState::Exited` once the ball leaves past the paddle side.
pub fn update_ball(field: &Field, dt: f32, config: &Config) -> (BallState, Events) {
    let mut events = Events::new();
    let ball = match field.ball {
        BallState::Active(ball) => ball,
        BallState::Exited => return (BallState::Exited, events),
    };
    let dt = sanitize_dt(dt);

    let candidate = ball.moved_to(ball.pos + ball.vel * dt);
    if config.exit_rule.has_exited(&candidate) {
        log::info!("Ball exited at x = {:.1}", candidate.pos.x);
        return (BallState::Exited, events);
    }

    let (vx, bounce_x) = resolve_speed_x(&candidate, &field.paddle, field.width);
    let (vy, bounce_y) = resolve_speed_y(&candidate, field.height);

    match bounce_x {
        Some(Bounce::Paddle) => {
            log::debug!("Ball hit paddle at y = {:.1}", candidate.pos.y);
            events.ball_hit_paddle = true;
        }
        Some(Bounce::Wall) => events.ball_hit_wall = true,
        None => {}
    }
    if bounce_y.is_some() {
        events.ball_hit_wall = true;
    }

    let factor = config.speed_up.factor(dt);
    let ball = candidate.with_vel(Vec2::new(vx, vy) * factor);
    (BallState::Active(ball), events)
}

/// Move the paddle at full speed in the input direction.
///
/// A move that would put the paddle past the top or onto the bottom edge is
/// rejected: the paddle keeps its previous height and its speed drops to 0.
pub fn update_paddle(field: &Field, input: PaddleInput, dt: f32) -> Paddle {
    let paddle = field.paddle;
    let dt = sanitize_dt(dt);

    let speed_y = input.dir() * paddle.max_speed_y;
    let new_y = paddle.pos.y + dt * speed_y;
    if new_y < 0.0 || new_y + paddle.size.y >= field.height {
        paddle.stopped()
    } else {
        paddle.moved_to_y(new_y, speed_y)
    }
}
