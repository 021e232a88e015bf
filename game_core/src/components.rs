use glam::Vec2;

/// The ball: top-left position, size and velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2, // negative x = moving toward the paddle
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    /// Same ball with a new position, velocity untouched
    pub fn moved_to(self, pos: Vec2) -> Self {
        Self { pos, ..self }
    }

    /// Same ball with a new velocity, position untouched
    pub fn with_vel(self, vel: Vec2) -> Self {
        Self { vel, ..self }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict box overlap with the paddle; shared edges do not count
    pub fn overlaps(&self, paddle: &Paddle) -> bool {
        self.pos.x < paddle.right()
            && self.right() > paddle.pos.x
            && self.pos.y < paddle.bottom()
            && self.bottom() > paddle.pos.y
    }
}

/// Ball slot of the field. `Exited` is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallState {
    Active(Ball),
    Exited,
}

impl BallState {
    pub fn ball(&self) -> Option<&Ball> {
        match self {
            BallState::Active(ball) => Some(ball),
            BallState::Exited => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        matches!(self, BallState::Exited)
    }
}

/// The player's paddle, guarding the left side of the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed the paddle moved at during the last frame
    pub speed_y: f32,
    pub max_speed_y: f32,
}

impl Paddle {
    /// A paddle at rest
    pub fn new(pos: Vec2, size: Vec2, max_speed_y: f32) -> Self {
        Self {
            pos,
            size,
            speed_y: 0.0,
            max_speed_y,
        }
    }

    /// Same paddle at a new height, having moved there at `speed_y`
    pub fn moved_to_y(self, y: f32, speed_y: f32) -> Self {
        Self {
            pos: Vec2::new(self.pos.x, y),
            speed_y,
            ..self
        }
    }

    /// Same paddle, not moving
    pub fn stopped(self) -> Self {
        Self {
            speed_y: 0.0,
            ..self
        }
    }

    /// Horizontal midpoint; the ball must reach it to count as a hit
    pub fn mid_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The play area and everything in it at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub ball: BallState,
    pub paddle: Paddle,
}

impl Field {
    pub fn new(width: f32, height: f32, ball: Ball, paddle: Paddle) -> Self {
        Self {
            width,
            height,
            ball: BallState::Active(ball),
            paddle,
        }
    }
}

/// Directional paddle input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleInput {
    Up,
    Down,
    #[default]
    Neither,
}

impl PaddleInput {
    /// Down wins when both keys are held
    pub fn from_keys(up: bool, down: bool) -> Self {
        if down {
            PaddleInput::Down
        } else if up {
            PaddleInput::Up
        } else {
            PaddleInput::Neither
        }
    }

    /// Direction sign: -1 = up, 0 = stop, 1 = down
    pub fn dir(self) -> f32 {
        match self {
            PaddleInput::Up => -1.0,
            PaddleInput::Down => 1.0,
            PaddleInput::Neither => 0.0,
        }
    }
}
