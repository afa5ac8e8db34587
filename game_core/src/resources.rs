use crate::Side;

/// Fixed-step clock for the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    pub tick: u32,        // Ticks run since the round started
    pub accumulator: f32, // Unconsumed frame time in seconds
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta. Non-finite or negative deltas are ignored.
    pub fn accumulate(&mut self, dt: f32, max_frame_dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.accumulator += dt.min(max_frame_dt);
    }

    /// Take one tick out of the accumulator if enough time has built up
    pub fn consume(&mut self, tick_dt: f32) -> bool {
        if self.accumulator >= tick_dt {
            self.accumulator -= tick_dt;
            self.tick += 1;
            true
        } else {
            false
        }
    }

    /// Fraction of a tick left in the accumulator (0.0 ..= 1.0)
    pub fn alpha(&self, tick_dt: f32) -> f32 {
        (self.accumulator / tick_dt).clamp(0.0, 1.0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Session score: rounds won by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

/// Paddle hits in the current round
#[derive(Debug, Clone, Copy, Default)]
pub struct Rally {
    pub hits: u32,
}

impl Rally {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    pub ball_out: Option<Side>, // side that won the round
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Queued paddle inputs, drained once per tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, i8)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a direction; anything outside -1..=1 is dropped
    pub fn push_input(&mut self, side: Side, dir: i8) {
        if (-1..=1).contains(&dir) {
            self.inputs.push((side, dir));
        }
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn pop_inputs(&mut self) -> Vec<(Side, i8)> {
        std::mem::take(&mut self.inputs)
    }
}

/// Result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Side,
    pub rally_hits: u32,
    pub ticks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_consumes_whole_ticks() {
        let mut clock = Clock::new();
        clock.accumulate(0.05, 0.25);
        let mut ticks = 0;
        while clock.consume(0.016) {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(clock.tick, 3);
        assert!(clock.accumulator < 0.016);
    }

    #[test]
    fn test_clock_ignores_bad_deltas() {
        let mut clock = Clock::new();
        clock.accumulate(f32::NAN, 0.25);
        clock.accumulate(f32::INFINITY, 0.25);
        clock.accumulate(-1.0, 0.25);
        assert_eq!(clock.accumulator, 0.0);
    }

    #[test]
    fn test_clock_clamps_large_delta() {
        let mut clock = Clock::new();
        clock.accumulate(5.0, 0.25);
        assert_eq!(clock.accumulator, 0.25);
    }

    #[test]
    fn test_clock_alpha() {
        let mut clock = Clock::new();
        clock.accumulate(0.008, 0.25);
        assert!((clock.alpha(0.016) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::new();
        score.award(Side::Player);
        score.award(Side::Computer);
        score.award(Side::Computer);
        assert_eq!(score.player, 1);
        assert_eq!(score.computer, 2);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.wall_bounce = true;
        events.paddle_hit = Some(Side::Player);
        events.ball_out = Some(Side::Computer);

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_input_queue_drops_out_of_range() {
        let mut queue = InputQueue::new();
        queue.push_input(Side::Player, -1);
        queue.push_input(Side::Player, 3);
        queue.push_input(Side::Player, i8::MIN);
        queue.push_input(Side::Player, 1);

        assert_eq!(queue.inputs, vec![(Side::Player, -1), (Side::Player, 1)]);
    }

    #[test]
    fn test_input_queue_pop_drains() {
        let mut queue = InputQueue::new();
        queue.push_input(Side::Player, 1);
        let inputs = queue.pop_inputs();
        assert_eq!(inputs.len(), 1);
        assert!(queue.inputs.is_empty());
    }
}
