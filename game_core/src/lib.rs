pub mod autopilot;
pub mod components;
pub mod config;
pub mod driver;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Run one deterministic frame of the simulation.
///
/// Paddle and ball are both computed from the same pre-frame `field`, so the
/// ball collides with where the paddle was, not where it is moving to.
pub fn step_field(field: &Field, input: PaddleInput, dt: f32, config: &Config) -> (Field, Events) {
    // 1. Move paddle based on input
    let paddle = update_paddle(field, input, dt);

    // 2. Move ball, resolve collisions, check exit
    let (ball, events) = update_ball(field, dt, config);

    let next = Field {
        ball,
        paddle,
        ..*field
    };
    (next, events)
}
