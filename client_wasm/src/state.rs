//! Render state with interpolation between simulation ticks

use game_core::{Game, Score, Snapshot};

/// What the renderer draws this frame
#[derive(Clone, Debug)]
pub struct RenderState {
    // State before the latest tick
    previous: Snapshot,
    // State after the latest tick
    current: Snapshot,
    // Interpolation factor (0.0 = previous, 1.0 = current)
    alpha: f32,
    score: Score,
    rally_hits: u32,
}

impl RenderState {
    pub fn new(game: &Game) -> Self {
        let snapshot = game.snapshot();
        Self {
            previous: snapshot,
            current: snapshot,
            alpha: 1.0,
            score: game.score(),
            rally_hits: 0,
        }
    }

    /// Pull the latest tick pair and the clock's progress into the next tick
    pub fn sync(&mut self, game: &Game) {
        self.previous = game.previous_snapshot();
        self.current = game.snapshot();
        self.alpha = game.interpolation_alpha();
        self.score = game.score();
        self.rally_hits = game.rally().hits;
    }

    /// Interpolated positions
    pub fn interpolated(&self) -> Snapshot {
        Snapshot::lerp(&self.previous, &self.current, self.alpha)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rally_hits(&self) -> u32 {
        self.rally_hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Config;
    use glam::Vec2;

    #[test]
    fn test_idle_game_renders_current_positions() {
        let game = Game::new(Config::new(), 3);
        let state = RenderState::new(&game);
        assert_eq!(state.interpolated(), game.snapshot());
    }

    #[test]
    fn test_interpolates_between_ticks() {
        let mut game = Game::new(Config::new(), 3);
        game.start();
        // One full tick plus half of the next
        game.advance(0.016 + 0.008);

        let mut state = RenderState::new(&game);
        state.sync(&game);

        let ball = state.interpolated().ball;
        // Previous tick had the ball at 300, current at 306
        assert!(ball.x > 300.0 && ball.x < 306.0, "ball x {}", ball.x);
        assert!((ball - Vec2::new(303.0, 203.0)).length() < 0.1);
    }

    #[test]
    fn test_sync_copies_score() {
        let mut game = Game::new(Config::new(), 3);
        game.start();
        while game.advance(0.016).is_none() {}

        let mut state = RenderState::new(&game);
        state.sync(&game);
        assert_eq!(state.score().computer, 1);
        assert_eq!(state.interpolated(), game.snapshot());
    }
}
