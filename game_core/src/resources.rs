/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Advance by one frame of `dt` seconds
    pub fn advance(self, dt: f32) -> Self {
        Self {
            dt,
            now: self.now + dt,
        }
    }
}

/// Collisions that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anything worth a sound effect
    pub fn any_hit(&self) -> bool {
        self.ball_hit_paddle || self.ball_hit_wall
    }
}
