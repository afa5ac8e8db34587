//! Ties keyboard, screens and the simulation together for one page

use crate::fsm::{Screen, ScreenAction, ScreenFsm};
use crate::input::{KeyCommand, KeyState};
use crate::state::RenderState;
use game_core::{Config, Game, Outcome, Snapshot};

pub struct Session {
    game: Game,
    fsm: ScreenFsm,
    keys: KeyState,
    render: RenderState,
    last_frame_ms: Option<f64>,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let game = Game::new(config, seed);
        let render = RenderState::new(&game);
        Self {
            game,
            fsm: ScreenFsm::new(),
            keys: KeyState::new(),
            render,
            last_frame_ms: None,
        }
    }

    /// Handle a key press. Returns whether the key did something.
    pub fn key_down(&mut self, key: &str) -> bool {
        match self.keys.key_down(key) {
            Some(KeyCommand::Up | KeyCommand::Down) => {
                self.game.set_direction(self.keys.dir());
                true
            }
            Some(KeyCommand::Start) => self.start(),
            Some(KeyCommand::Quit) => self.quit(),
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        let handled = self.keys.key_up(key);
        if handled {
            self.game.set_direction(self.keys.dir());
        }
        handled
    }

    /// Start from the title card or restart after a miss
    pub fn start(&mut self) -> bool {
        let action = match self.fsm.screen() {
            Screen::GameOver => ScreenAction::Restart,
            _ => ScreenAction::Start,
        };
        if !self.fsm.transition(action).success {
            return false;
        }

        self.game.start();
        self.last_frame_ms = None;
        self.render.sync(&self.game);
        true
    }

    /// Back to the title card
    pub fn quit(&mut self) -> bool {
        if !self.fsm.transition(ScreenAction::Quit).success {
            return false;
        }

        self.game.stop();
        self.last_frame_ms = None;
        self.render.sync(&self.game);
        true
    }

    /// Apply a screen action named by the page's buttons.
    /// Only the simulation can end a round, so `BallOut` is refused.
    pub fn apply_action(&mut self, action: ScreenAction) -> bool {
        match action {
            ScreenAction::Start | ScreenAction::Restart => self.start(),
            ScreenAction::Quit => self.quit(),
            ScreenAction::BallOut => false,
        }
    }

    /// Advance to the page timestamp `now_ms` (from `requestAnimationFrame`).
    /// The first frame after a start only records the timestamp.
    pub fn frame(&mut self, now_ms: f64) -> Option<Outcome> {
        let outcome = if self.fsm.is_playing() {
            let dt = self
                .last_frame_ms
                .map(|last| ((now_ms - last) / 1000.0) as f32)
                .unwrap_or(0.0);
            self.last_frame_ms = Some(now_ms);
            self.game.advance(dt)
        } else {
            None
        };

        if outcome.is_some() {
            self.fsm.transition(ScreenAction::BallOut);
            self.last_frame_ms = None;
        }

        self.render.sync(&self.game);
        outcome
    }

    /// Positions to draw this frame
    pub fn snapshot(&self) -> Snapshot {
        self.render.interpolated()
    }

    pub fn screen(&self) -> Screen {
        self.fsm.screen()
    }

    pub fn screen_string(&self) -> String {
        self.fsm.screen_string()
    }

    pub fn score_player(&self) -> u32 {
        self.render.score().player
    }

    pub fn score_computer(&self) -> u32 {
        self.render.score().computer
    }

    pub fn rally_hits(&self) -> u32 {
        self.render.rally_hits()
    }

    /// Forget held keys, e.g. when the page loses focus
    pub fn release_keys(&mut self) {
        self.keys.release_all();
        self.game.set_direction(0);
    }

    pub fn config(&self) -> &Config {
        self.game.config()
    }
}
