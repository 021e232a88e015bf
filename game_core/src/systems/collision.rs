use crate::{Ball, Paddle};

/// Check if the ball (at its candidate position) has hit the paddle.
///
/// The ball must be heading left, its left edge must be between the paddle's
/// horizontal midpoint (inclusive) and its right edge (exclusive), and the
/// vertical extents must overlap.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.vel.x < 0.0
        && ball.pos.x >= paddle.mid_x()
        && ball.pos.x < paddle.right()
        && ball.bottom() > paddle.pos.y
        && ball.pos.y <= paddle.bottom()
}

/// Which surface the ball bounced off on an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    Paddle,
    Wall,
}

/// Resolve horizontal speed for the candidate ball.
/// Paddle is checked before the right wall; first match wins.
pub fn resolve_speed_x(
    candidate: &Ball,
    paddle: &Paddle,
    field_width: f32,
) -> (f32, Option<Bounce>) {
    let vx = candidate.vel.x;
    if ball_hits_paddle(candidate, paddle) {
        (vx.abs(), Some(Bounce::Paddle))
    } else if vx > 0.0 && candidate.right() >= field_width {
        (-vx.abs(), Some(Bounce::Wall))
    } else {
        (vx, None)
    }
}

/// Resolve vertical speed for the candidate ball against top and bottom walls
pub fn resolve_speed_y(candidate: &Ball, field_height: f32) -> (f32, Option<Bounce>) {
    let vy = candidate.vel.y;
    if vy < 0.0 && candidate.pos.y < 0.0 {
        (vy.abs(), Some(Bounce::Wall))
    } else if vy > 0.0 && candidate.bottom() >= field_height {
        (-vy.abs(), Some(Bounce::Wall))
    } else {
        (vy, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn paddle() -> Paddle {
        Paddle::new(Vec2::new(10.0, 100.0), Vec2::new(20.0, 50.0), 600.0)
    }

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::splat(10.0), Vec2::new(vx, vy))
    }

    #[test]
    fn test_ball_hits_paddle_inside_band() {
        assert!(ball_hits_paddle(&ball(22.5, 110.0, -550.0, 0.0), &paddle()));
    }

    #[test]
    fn test_ball_hits_paddle_band_edges() {
        let paddle = paddle();
        assert!(
            ball_hits_paddle(&ball(20.0, 110.0, -1.0, 0.0), &paddle),
            "Paddle midpoint is inclusive"
        );
        assert!(
            !ball_hits_paddle(&ball(30.0, 110.0, -1.0, 0.0), &paddle),
            "Paddle far edge is exclusive"
        );
        assert!(
            !ball_hits_paddle(&ball(19.9, 110.0, -1.0, 0.0), &paddle),
            "Ball past the midpoint is not a hit"
        );
    }

    #[test]
    fn test_ball_hits_paddle_vertical_overlap() {
        let paddle = paddle();
        // Ball bottom exactly on paddle top: no overlap
        assert!(!ball_hits_paddle(&ball(25.0, 90.0, -1.0, 0.0), &paddle));
        assert!(ball_hits_paddle(&ball(25.0, 90.1, -1.0, 0.0), &paddle));
        // Ball top exactly on paddle bottom: still counts
        assert!(ball_hits_paddle(&ball(25.0, 150.0, -1.0, 0.0), &paddle));
        assert!(!ball_hits_paddle(&ball(25.0, 150.1, -1.0, 0.0), &paddle));
    }

    #[test]
    fn test_ball_moving_away_does_not_hit_paddle() {
        assert!(!ball_hits_paddle(&ball(22.5, 110.0, 550.0, 0.0), &paddle()));
        assert!(!ball_hits_paddle(&ball(22.5, 110.0, 0.0, 0.0), &paddle()));
    }

    #[test]
    fn test_resolve_speed_x_paddle_before_wall() {
        // Candidate already overlaps the right wall of a tiny field; the paddle wins
        let (vx, bounce) = resolve_speed_x(&ball(22.5, 110.0, -550.0, 0.0), &paddle(), 25.0);
        assert_eq!(vx, 550.0);
        assert_eq!(bounce, Some(Bounce::Paddle));
    }

    #[test]
    fn test_resolve_speed_x_right_wall() {
        let (vx, bounce) = resolve_speed_x(&ball(630.0, 200.0, 300.0, 0.0), &paddle(), 640.0);
        assert_eq!(vx, -300.0, "Trailing edge at the wall reflects");
        assert_eq!(bounce, Some(Bounce::Wall));

        let (vx, bounce) = resolve_speed_x(&ball(629.0, 200.0, 300.0, 0.0), &paddle(), 640.0);
        assert_eq!(vx, 300.0);
        assert_eq!(bounce, None);
    }

    #[test]
    fn test_resolve_speed_y_walls() {
        assert_eq!(
            resolve_speed_y(&ball(100.0, -0.5, 0.0, -300.0), 480.0),
            (300.0, Some(Bounce::Wall))
        );
        assert_eq!(
            resolve_speed_y(&ball(100.0, 470.0, 0.0, 300.0), 480.0),
            (-300.0, Some(Bounce::Wall))
        );
        // Already heading away from the wall it overlaps
        assert_eq!(
            resolve_speed_y(&ball(100.0, -0.5, 0.0, 300.0), 480.0),
            (300.0, None)
        );
        assert_eq!(resolve_speed_y(&ball(100.0, 0.0, 0.0, -300.0), 480.0), (-300.0, None));
    }
}
