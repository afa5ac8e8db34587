//! Keyboard input handling

/// Something a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Up,
    Down,
    Start,
    Quit,
}

/// Map a `KeyboardEvent.key` value to a command. Matching ignores case.
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key.to_ascii_lowercase().as_str() {
        "arrowup" | "w" => Some(KeyCommand::Up),
        "arrowdown" | "s" => Some(KeyCommand::Down),
        "enter" => Some(KeyCommand::Start),
        "escape" => Some(KeyCommand::Quit),
        _ => None,
    }
}

/// Currently held movement keys
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns the command it mapped to, if any.
    pub fn key_down(&mut self, key: &str) -> Option<KeyCommand> {
        let command = command_for_key(key)?;
        match command {
            KeyCommand::Up => self.up = true,
            KeyCommand::Down => self.down = true,
            KeyCommand::Start | KeyCommand::Quit => {}
        }
        Some(command)
    }

    /// Record a key release. Returns whether the key is one we track.
    pub fn key_up(&mut self, key: &str) -> bool {
        match command_for_key(key) {
            Some(KeyCommand::Up) => self.up = false,
            Some(KeyCommand::Down) => self.down = false,
            Some(_) => {}
            None => return false,
        }
        true
    }

    /// Paddle direction: up wins when both keys are held
    pub fn dir(&self) -> i8 {
        if self.up {
            -1
        } else if self.down {
            1
        } else {
            0
        }
    }

    /// Forget held keys, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
