use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply keyboard paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = intent.dir as f32 * config.player_step;
            paddle.y = config.clamp_paddle_y(paddle.y + delta);
        }
    }
}

/// Advance the ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_player_paddle};
    use glam::Vec2;

    fn player_y(world: &World) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .next()
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    fn set_dir(world: &mut World, dir: i8) {
        for (_e, intent) in world.query_mut::<&mut PaddleIntent>() {
            intent.dir = dir;
        }
    }

    #[test]
    fn test_paddle_moves_by_step() {
        let mut world = World::new();
        let config = Config::new();
        create_player_paddle(&mut world, &config);

        set_dir(&mut world, -1);
        move_paddles(&mut world, &config);
        assert_eq!(player_y(&world), 180.0);

        set_dir(&mut world, 1);
        move_paddles(&mut world, &config);
        move_paddles(&mut world, &config);
        assert_eq!(player_y(&world), 220.0);
    }

    #[test]
    fn test_paddle_clamps_to_field() {
        let mut world = World::new();
        let config = Config::new();
        create_player_paddle(&mut world, &config);

        set_dir(&mut world, -1);
        for _ in 0..50 {
            move_paddles(&mut world, &config);
        }
        assert_eq!(player_y(&world), 0.0);

        set_dir(&mut world, 1);
        for _ in 0..50 {
            move_paddles(&mut world, &config);
        }
        assert_eq!(player_y(&world), 400.0);
    }

    #[test]
    fn test_paddle_holds_without_intent() {
        let mut world = World::new();
        let config = Config::new();
        create_player_paddle(&mut world, &config);
        move_paddles(&mut world, &config);
        assert_eq!(player_y(&world), 200.0);
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut world = World::new();
        let ball = create_ball(&mut world, Vec2::new(300.0, 200.0), Vec2::new(6.0, 6.0));
        move_ball(&mut world);
        move_ball(&mut world);
        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(312.0, 212.0));
    }
}
