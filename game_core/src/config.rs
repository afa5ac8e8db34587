use crate::{Params, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game configuration
///
/// Every field falls back to its [`Params`] default when omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_inset: f32,
    pub paddle_height: f32,
    pub paddle_start_y: f32,
    pub player_step: f32,
    pub computer_step: f32,
    pub ball_size: f32,
    pub ball_start: [f32; 2],
    pub ball_start_vel: [f32; 2],
    pub player_contact_x: f32,
    pub computer_contact_x: f32,
    pub randomize_serve: bool,
    pub tick_dt: f32,
    pub max_frame_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_inset: Params::PADDLE_INSET,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_start_y: Params::PADDLE_START_Y,
            player_step: Params::PLAYER_STEP,
            computer_step: Params::COMPUTER_STEP,
            ball_size: Params::BALL_SIZE,
            ball_start: [Params::BALL_START_X, Params::BALL_START_Y],
            ball_start_vel: [Params::BALL_START_VX, Params::BALL_START_VY],
            player_contact_x: Params::PLAYER_CONTACT_X,
            computer_contact_x: Params::COMPUTER_CONTACT_X,
            randomize_serve: false,
            tick_dt: Params::TICK_DT,
            max_frame_dt: Params::MAX_FRAME_DT,
        }
    }
}

/// Reasons a [`Config`] is rejected
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    NonPositive(&'static str),
    PaddleTooTall { paddle_height: f32, field_height: f32 },
    BallTooLarge { ball_size: f32 },
    ContactOutsideField(&'static str),
    OutsideField(&'static str),
    NonFinite(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid config JSON: {e}"),
            ConfigError::NonPositive(field) => write!(f, "{field} must be positive"),
            ConfigError::PaddleTooTall {
                paddle_height,
                field_height,
            } => write!(
                f,
                "paddle height {paddle_height} exceeds field height {field_height}"
            ),
            ConfigError::BallTooLarge { ball_size } => {
                write!(f, "ball size {ball_size} does not fit in the field")
            }
            ConfigError::ContactOutsideField(field) => {
                write!(f, "{field} lies outside the field")
            }
            ConfigError::OutsideField(field) => {
                write!(f, "{field} puts a paddle or the ball outside the field")
            }
            ConfigError::NonFinite(field) => write!(f, "{field} must be finite"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_step", self.player_step),
            ("computer_step", self.computer_step),
            ("ball_size", self.ball_size),
            ("tick_dt", self.tick_dt),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            // NaN fails this comparison too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive(name));
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        if self.ball_size >= self.field_height || self.ball_size >= self.field_width {
            return Err(ConfigError::BallTooLarge {
                ball_size: self.ball_size,
            });
        }
        if !(0.0..=self.field_width).contains(&self.player_contact_x) {
            return Err(ConfigError::ContactOutsideField("player_contact_x"));
        }
        if !(0.0..=self.field_width).contains(&self.computer_contact_x) {
            return Err(ConfigError::ContactOutsideField("computer_contact_x"));
        }

        // Both paddles must be drawn inside the field without crossing
        let max_inset = self.field_width / 2.0 - self.paddle_width;
        if !(0.0..=max_inset).contains(&self.paddle_inset) {
            return Err(ConfigError::OutsideField("paddle_inset"));
        }
        if !(0.0..=self.paddle_max_y()).contains(&self.paddle_start_y) {
            return Err(ConfigError::OutsideField("paddle_start_y"));
        }
        let [x, y] = self.ball_start;
        if !(0.0..=self.field_width).contains(&x) || !(0.0..=self.ball_max_y()).contains(&y) {
            return Err(ConfigError::OutsideField("ball_start"));
        }
        if !self.ball_start_vel.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::NonFinite("ball_start_vel"));
        }
        Ok(())
    }

    /// Lowest allowed paddle top
    pub fn paddle_max_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp a paddle top to the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Bottom reflection threshold for the ball's top edge
    pub fn ball_max_y(&self) -> f32 {
        self.field_height - self.ball_size
    }

    pub fn paddle_center_offset(&self) -> f32 {
        self.paddle_height / 2.0
    }

    /// Left edge of a paddle, used for drawing
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Computer => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = Config::new();
        assert_eq!(config.paddle_max_y(), Params::PADDLE_MAX_Y);
        assert_eq!(config.ball_max_y(), Params::BALL_MAX_Y);
        assert_eq!(config.paddle_center_offset(), 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-20.0), 0.0);
        assert_eq!(config.clamp_paddle_y(420.0), 400.0);
        assert_eq!(config.clamp_paddle_y(180.0), 180.0);
    }

    #[test]
    fn test_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 8.0);
        assert_eq!(config.paddle_x(Side::Computer), 684.0);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = Config::from_json(r#"{ "computer_step": 5.0, "randomize_serve": true }"#)
            .expect("partial config should parse");
        assert_eq!(config.computer_step, 5.0);
        assert!(config.randomize_serve);
        assert_eq!(config.player_step, Params::PLAYER_STEP);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            Config::from_json(r#"{ "tick_dt": 0.0 }"#),
            Err(ConfigError::NonPositive("tick_dt"))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "paddle_height": 900.0 }"#),
            Err(ConfigError::PaddleTooTall { .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{ "computer_contact_x": 1000.0 }"#),
            Err(ConfigError::ContactOutsideField("computer_contact_x"))
        ));
        assert!(matches!(
            Config::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_oversized_ball_and_bad_contacts() {
        assert!(matches!(
            Config::from_json(r#"{ "ball_size": 500.0 }"#),
            Err(ConfigError::BallTooLarge { .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{ "player_contact_x": -1.0 }"#),
            Err(ConfigError::ContactOutsideField("player_contact_x"))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "computer_step": -10.0 }"#),
            Err(ConfigError::NonPositive("computer_step"))
        ));
    }

    #[test]
    fn test_from_json_rejects_start_outside_field() {
        assert!(matches!(
            Config::from_json(r#"{ "paddle_start_y": 450.0 }"#),
            Err(ConfigError::OutsideField("paddle_start_y"))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "paddle_start_y": -1.0 }"#),
            Err(ConfigError::OutsideField("paddle_start_y"))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "ball_start": [300.0, -50.0] }"#),
            Err(ConfigError::OutsideField("ball_start"))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "ball_start": [701.0, 200.0] }"#),
            Err(ConfigError::OutsideField("ball_start"))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "paddle_inset": -500.0 }"#),
            Err(ConfigError::OutsideField("paddle_inset"))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "paddle_inset": 400.0 }"#),
            Err(ConfigError::OutsideField("paddle_inset"))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_serve() {
        let config = Config {
            ball_start_vel: [f32::NAN, 6.0],
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite("ball_start_vel"))
        ));
    }

    #[test]
    fn test_start_positions_on_field_edges_are_accepted() {
        let config = Config::from_json(
            r#"{ "paddle_start_y": 400.0, "ball_start": [0.0, 480.0], "paddle_inset": 0.0 }"#,
        )
        .expect("edge positions are inside the field");
        assert_eq!(config.paddle_x(Side::Player), 0.0);
        assert_eq!(config.paddle_x(Side::Computer), 692.0);
    }
}
