pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the simulation.
///
/// Returns the side that won the round if the ball left the field.
pub fn tick(
    world: &mut World,
    config: &Config,
    input: &mut InputQueue,
    events: &mut Events,
    rally: &mut Rally,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. Move keyboard paddles
    move_paddles(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Bounds and paddle contacts, against the new ball position
    check_collisions(world, config, events, rally);

    // 5. Computer paddle follows the ball
    track_ball(world, config);

    // 6. Round over?
    check_out_of_bounds(world, config, events)
}

/// Run the fixed-step simulation for one frame.
///
/// `dt` is the frame delta in seconds. Whole ticks of `config.tick_dt` are
/// run; the remainder stays in the clock. Stops early once the ball leaves
/// the field, leaving `events.ball_out` set. Returns the number of ticks run.
///
/// `before_tick` sees the world as it was just before each tick.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    clock: &mut Clock,
    config: &Config,
    input: &mut InputQueue,
    events: &mut Events,
    rally: &mut Rally,
    dt: f32,
    mut before_tick: impl FnMut(&World),
) -> u32 {
    clock.accumulate(dt, config.max_frame_dt);

    let mut ticks = 0;
    while clock.consume(config.tick_dt) {
        ticks += 1;
        before_tick(world);
        if tick(world, config, input, events, rally).is_some() {
            clock.accumulator = 0.0;
            break;
        }
    }

    ticks
}

/// Spawn the keyboard paddle at its start position
pub fn create_player_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(Side::Player, config.clamp_paddle_y(config.paddle_start_y)),
        PaddleIntent::new(),
    ))
}

/// Spawn the ball-tracking paddle at its start position
pub fn create_computer_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(Side::Computer, config.clamp_paddle_y(config.paddle_start_y)),
        Tracker {
            step: config.computer_step,
        },
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
