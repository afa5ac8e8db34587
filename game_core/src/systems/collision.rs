use crate::{Ball, Config, Events, Paddle, Rally, Side};
use hecs::World;

/// Check ball collisions with the top/bottom bounds and the paddles.
///
/// Reflections are directional: the ball always leaves a contact moving
/// away from it, so it cannot get trapped flipping back and forth.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events, rally: &mut Rally) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom bounds
        if ball.pos.y <= 0.0 && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        } else if ball.pos.y >= config.ball_max_y() && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }

        for paddle in &paddles {
            if !paddle.covers(ball.pos.y, config.paddle_height) {
                continue;
            }

            let hit = match paddle.side {
                Side::Player => ball.pos.x <= config.player_contact_x && ball.vel.x < 0.0,
                Side::Computer => ball.pos.x >= config.computer_contact_x && ball.vel.x > 0.0,
            };

            if hit {
                ball.vel.x = -ball.vel.x;
                events.paddle_hit = Some(paddle.side);
                rally.hits += 1;
                break;
            }
        }
    }
}
