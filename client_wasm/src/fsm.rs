//! Screen State Machine
//!
//! Tracks which screen the page shows: the title card, the running game,
//! or the game-over card with its restart button.

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    GameOver,
}

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Start,
    BallOut,
    Restart,
    Quit,
}

impl ScreenAction {
    /// Parse an action name coming from JS
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "START" => Some(ScreenAction::Start),
            "BALL_OUT" => Some(ScreenAction::BallOut),
            "RESTART" => Some(ScreenAction::Restart),
            "QUIT" => Some(ScreenAction::Quit),
            _ => None,
        }
    }
}

/// Result of a screen transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Screen,
    pub to: Screen,
    pub action: ScreenAction,
}

/// Screen Finite State Machine
#[derive(Debug)]
pub struct ScreenFsm {
    screen: Screen,
}

impl ScreenFsm {
    pub fn new() -> Self {
        Self {
            screen: Screen::Title,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Get current screen as string (for JS interop)
    pub fn screen_string(&self) -> String {
        format!("{:?}", self.screen)
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: ScreenAction) -> bool {
        self.next_screen(action).is_some()
    }

    /// Attempt a transition; invalid ones leave the screen unchanged
    pub fn transition(&mut self, action: ScreenAction) -> TransitionResult {
        let from = self.screen;
        match self.next_screen(action) {
            Some(to) => {
                self.screen = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_screen(&self, action: ScreenAction) -> Option<Screen> {
        match (self.screen, action) {
            (Screen::Title, ScreenAction::Start) => Some(Screen::Playing),

            (Screen::Playing, ScreenAction::BallOut) => Some(Screen::GameOver),
            (Screen::Playing, ScreenAction::Quit) => Some(Screen::Title),

            // Enter on the game-over card behaves like the restart button
            (Screen::GameOver, ScreenAction::Restart | ScreenAction::Start) => {
                Some(Screen::Playing)
            }
            (Screen::GameOver, ScreenAction::Quit) => Some(Screen::Title),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}
