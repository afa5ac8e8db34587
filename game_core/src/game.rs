//! Single-player match driver
//!
//! Owns the ECS world and resources for one player against the computer
//! and turns frame deltas into fixed ticks.

use crate::{
    create_ball, create_computer_paddle, create_player_paddle, step, Ball, Clock, Config, Events,
    GameRng, InputQueue, Outcome, Paddle, Rally, Score, Side,
};
use glam::Vec2;
use hecs::World;

/// Positions needed to draw one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball: Vec2, // top-left corner
    pub player_y: f32,
    pub computer_y: f32,
}

impl Snapshot {
    /// Read paddle and ball positions out of the world
    pub fn capture(world: &World, config: &Config) -> Snapshot {
        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.pos)
            .unwrap_or(Vec2::from(config.ball_start));

        let start_y = config.clamp_paddle_y(config.paddle_start_y);
        let mut player_y = start_y;
        let mut computer_y = start_y;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => player_y = paddle.y,
                Side::Computer => computer_y = paddle.y,
            }
        }

        Snapshot {
            ball,
            player_y,
            computer_y,
        }
    }

    /// Linear blend between two snapshots; `t` is clamped to 0..=1
    pub fn lerp(a: &Snapshot, b: &Snapshot, t: f32) -> Snapshot {
        let t = t.clamp(0.0, 1.0);
        Snapshot {
            ball: a.ball.lerp(b.ball, t),
            player_y: a.player_y + (b.player_y - a.player_y) * t,
            computer_y: a.computer_y + (b.computer_y - a.computer_y) * t,
        }
    }
}

pub struct Game {
    world: World,
    clock: Clock,
    config: Config,
    input: InputQueue,
    events: Events,
    rally: Rally,
    score: Score,
    rng: GameRng,
    running: bool,
    dir: i8,
    previous: Snapshot,
    last_outcome: Option<Outcome>,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_player_paddle(&mut world, &config);
        create_computer_paddle(&mut world, &config);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        let mut game = Self {
            world,
            clock: Clock::new(),
            config,
            input: InputQueue::new(),
            events: Events::new(),
            rally: Rally::new(),
            score: Score::new(),
            rng,
            running: false,
            dir: 0,
            previous: Snapshot {
                ball: Vec2::ZERO,
                player_y: 0.0,
                computer_y: 0.0,
            },
            last_outcome: None,
        };
        game.previous = game.snapshot();
        game
    }

    /// Reset paddles and ball and start a round.
    ///
    /// Used both for the first start and for a restart after a miss. The
    /// session score is kept.
    pub fn start(&mut self) {
        let start_y = self.config.clamp_paddle_y(self.config.paddle_start_y);
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = start_y;
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(&self.config, &mut self.rng);
        }

        self.clock.reset();
        self.events.clear();
        self.rally = Rally::new();
        self.input.clear();
        // Keys held across a restart keep driving the paddle
        self.input.push_input(Side::Player, self.dir);

        self.previous = self.snapshot();
        self.last_outcome = None;
        self.running = true;
        log::info!("round started (score {}-{})", self.score.player, self.score.computer);
    }

    /// Player paddle direction for subsequent ticks. Out-of-range values are ignored.
    pub fn set_direction(&mut self, dir: i8) {
        if !(-1..=1).contains(&dir) || dir == self.dir {
            return;
        }
        self.dir = dir;
        self.input.push_input(Side::Player, dir);
    }

    /// Abandon the current round without awarding it
    pub fn stop(&mut self) {
        if self.running {
            log::info!("round abandoned at tick {}", self.clock.tick);
        }
        self.running = false;
        self.clock.accumulator = 0.0;
    }

    /// Advance by a frame delta in seconds. Returns the outcome when the
    /// round ends during this call.
    pub fn advance(&mut self, dt: f32) -> Option<Outcome> {
        if !self.running {
            return None;
        }

        let hits_before = self.rally.hits;
        let config = &self.config;
        let previous = &mut self.previous;
        step(
            &mut self.world,
            &mut self.clock,
            config,
            &mut self.input,
            &mut self.events,
            &mut self.rally,
            dt,
            |world| *previous = Snapshot::capture(world, config),
        );

        if self.rally.hits > hits_before {
            log::debug!("tick {}: rally at {} hits", self.clock.tick, self.rally.hits);
        }

        let winner = self.events.ball_out?;
        Some(self.finish(winner))
    }

    fn finish(&mut self, winner: Side) -> Outcome {
        self.score.award(winner);
        self.running = false;
        self.clock.accumulator = 0.0;

        let outcome = Outcome {
            winner,
            rally_hits: self.rally.hits,
            ticks: self.clock.tick,
        };
        self.last_outcome = Some(outcome);
        log::info!(
            "round over: {:?} wins after {} ticks, {} paddle hits",
            winner,
            outcome.ticks,
            outcome.rally_hits
        );
        outcome
    }

    /// Current positions
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, &self.config)
    }

    /// Positions before the most recent tick
    pub fn previous_snapshot(&self) -> Snapshot {
        self.previous
    }

    /// How far the clock is into the next tick (1.0 while stopped)
    pub fn interpolation_alpha(&self) -> f32 {
        if self.running {
            self.clock.alpha(self.config.tick_dt)
        } else {
            1.0
        }
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.vel)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rally(&self) -> Rally {
        self.rally
    }

    pub fn events(&self) -> Events {
        self.events
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn ticks(&self) -> u32 {
        self.clock.tick
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f32 = 0.016;

    #[test]
    fn test_new_game_is_idle_at_start_positions() {
        let game = Game::new(Config::new(), 1);
        assert!(!game.is_running());
        let snap = game.snapshot();
        assert_eq!(snap.ball, Vec2::new(300.0, 200.0));
        assert_eq!(snap.player_y, 200.0);
        assert_eq!(snap.computer_y, 200.0);
    }

    #[test]
    fn test_advance_is_noop_before_start() {
        let mut game = Game::new(Config::new(), 1);
        assert_eq!(game.advance(1.0), None);
        assert_eq!(game.snapshot().ball, Vec2::new(300.0, 200.0));
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn test_first_tick_moves_ball_and_computer() {
        let mut game = Game::new(Config::new(), 1);
        game.start();
        game.advance(TICK);

        let snap = game.snapshot();
        assert_eq!(game.ticks(), 1);
        assert_eq!(snap.ball, Vec2::new(306.0, 206.0));
        // Ball top 206 is above the paddle centre at 250, so the paddle steps up
        assert_eq!(snap.computer_y, 190.0);
        assert_eq!(game.previous_snapshot().ball, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_set_direction_moves_player() {
        let mut game = Game::new(Config::new(), 1);
        game.start();
        game.set_direction(-1);
        game.advance(TICK);
        assert_eq!(game.snapshot().player_y, 180.0);

        game.set_direction(5); // ignored
        game.advance(TICK);
        assert_eq!(game.snapshot().player_y, 160.0);

        game.set_direction(0);
        game.advance(TICK);
        assert_eq!(game.snapshot().player_y, 160.0);
    }

    #[test]
    fn test_stop_abandons_round_without_scoring() {
        let mut game = Game::new(Config::new(), 1);
        game.start();
        game.advance(0.01);
        game.stop();

        assert!(!game.is_running());
        assert_eq!(game.advance(1.0), None);
        assert_eq!(game.score().player + game.score().computer, 0);
        assert_eq!(game.last_outcome(), None);
    }

    #[test]
    fn test_unvalidated_start_y_is_clamped() {
        let config = Config {
            paddle_start_y: 450.0,
            ..Config::new()
        };
        let mut game = Game::new(config, 1);
        assert_eq!(game.snapshot().player_y, 400.0);
        game.start();
        let snap = game.snapshot();
        assert_eq!(snap.player_y, 400.0);
        assert_eq!(snap.computer_y, 400.0);
    }

    #[test]
    fn test_partial_frame_accumulates() {
        let mut game = Game::new(Config::new(), 1);
        game.start();
        game.advance(0.01);
        assert_eq!(game.ticks(), 0);
        assert!(game.interpolation_alpha() > 0.5);
        game.advance(0.01);
        assert_eq!(game.ticks(), 1);
    }

    #[test]
    fn test_snapshot_lerp() {
        let a = Snapshot {
            ball: Vec2::new(0.0, 0.0),
            player_y: 0.0,
            computer_y: 100.0,
        };
        let b = Snapshot {
            ball: Vec2::new(10.0, 20.0),
            player_y: 40.0,
            computer_y: 0.0,
        };
        let mid = Snapshot::lerp(&a, &b, 0.5);
        assert_eq!(mid.ball, Vec2::new(5.0, 10.0));
        assert_eq!(mid.player_y, 20.0);
        assert_eq!(mid.computer_y, 50.0);
        assert_eq!(Snapshot::lerp(&a, &b, 3.0), b);
    }
}
