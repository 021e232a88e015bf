/// Default tuning parameters for the single-paddle game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (screen-sized, in pixels)
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_X: f32 = 10.0;
    pub const PADDLE_Y: f32 = 100.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_MAX_SPEED: f32 = 600.0; // pixels per second

    // Ball
    pub const BALL_X: f32 = 100.0;
    pub const BALL_Y: f32 = 200.0;
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 550.0;
    pub const BALL_SPEED_Y: f32 = 300.0;

    // Speed-up: velocity *= 1 + dt / divisor, every frame
    pub const SPEED_UP_DIVISOR: f32 = 50.0;

    // Physics
    pub const MAX_FRAME_DT: f32 = 0.25; // Clamp to prevent large jumps
}
