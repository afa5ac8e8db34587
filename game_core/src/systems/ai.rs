use crate::{Ball, Config, Paddle, Tracker};
use hecs::World;

/// Move tracking paddles one fixed step toward the ball.
///
/// The paddle compares the ball's top against its own centre and steps by
/// `sign(diff) * step`, so it stops only when the two line up exactly.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, (paddle, tracker)) in world.query_mut::<(&mut Paddle, &Tracker)>() {
        let diff = ball_y - (paddle.y + config.paddle_center_offset());
        let dir = if diff > 0.0 {
            1.0
        } else if diff < 0.0 {
            -1.0
        } else {
            0.0
        };
        paddle.y = config.clamp_paddle_y(paddle.y + dir * tracker.step);
    }
}
