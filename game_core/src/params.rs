/// Game tuning parameters for Pong.
///
/// Field units are CSS pixels with the origin at the top-left corner and
/// y growing downwards. Speeds are expressed per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_INSET: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MAX_Y: f32 = 400.0;
    pub const PADDLE_START_Y: f32 = 200.0;
    pub const PLAYER_STEP: f32 = 20.0;
    pub const COMPUTER_STEP: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_MAX_Y: f32 = 480.0;
    pub const BALL_START_X: f32 = 300.0;
    pub const BALL_START_Y: f32 = 200.0;
    pub const BALL_START_VX: f32 = 6.0;
    pub const BALL_START_VY: f32 = 6.0;

    // Contact lines
    pub const PLAYER_CONTACT_X: f32 = 20.0;
    pub const COMPUTER_CONTACT_X: f32 = 640.0;

    // Timing
    pub const TICK_DT: f32 = 0.016; // 62.5 Hz
    pub const MAX_FRAME_DT: f32 = 0.25; // Clamp to prevent a spiral after a tab stall
}
