use crate::{Config, GameRng};
use glam::Vec2;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // left, keyboard
    Computer, // right, tracks the ball
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge, clamped to the field
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Whether a ball top at `ball_y` lies inside this paddle's contact zone
    pub fn covers(&self, ball_y: f32, paddle_height: f32) -> bool {
        ball_y >= self.y && ball_y <= self.y + paddle_height
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2, // units per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back at the serve position
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = Vec2::from(config.ball_start);
        self.vel = Vec2::from(config.ball_start_vel);

        if config.randomize_serve {
            use rand::Rng;
            if rng.0.gen_bool(0.5) {
                self.vel.x = -self.vel.x;
            }
            if rng.0.gen_bool(0.5) {
                self.vel.y = -self.vel.y;
            }
        }
    }
}

/// Movement intent for a keyboard paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marks a paddle that follows the ball by a fixed step per tick
#[derive(Debug, Clone, Copy)]
pub struct Tracker {
    pub step: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_covers_inclusive_zone() {
        let paddle = Paddle::new(Side::Player, 200.0);
        assert!(paddle.covers(200.0, 100.0));
        assert!(paddle.covers(300.0, 100.0));
        assert!(!paddle.covers(199.9, 100.0));
        assert!(!paddle.covers(300.1, 100.0));
    }

    #[test]
    fn test_serve_default_is_fixed() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(&config, &mut rng);
        assert_eq!(ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(ball.vel, Vec2::new(6.0, 6.0));
    }

    #[test]
    fn test_randomized_serve_keeps_speed() {
        let config = Config {
            randomize_serve: true,
            ..Config::new()
        };
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        for _ in 0..16 {
            ball.serve(&config, &mut rng);
            assert_eq!(ball.pos, Vec2::new(300.0, 200.0));
            assert_eq!(ball.vel.x.abs(), 6.0);
            assert_eq!(ball.vel.y.abs(), 6.0);
        }
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Player);
    }
}
