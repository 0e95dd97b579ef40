/// Game tuning parameters for Pong
///
/// All distances are playfield pixels; all speeds are distance per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (portrait)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 1280.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 300.0;
    pub const PADDLE_MARGIN: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_BASE_SPEED: f32 = 15.0;
    pub const BALL_MAX_SPEED: f32 = 25.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.1;
    pub const BALL_SPIN_FACTOR: f32 = 5.0;
    pub const BALL_SERVE_DRIFT: f32 = 5.0;

    // AI paddle chase speed
    pub const AI_SPEED: f32 = 8.0;

    // Match
    pub const WIN_SCORE: u8 = 5;

    // Restart zone (vertical band below screen center)
    pub const RESTART_ZONE_OFFSET: f32 = 150.0;
    pub const RESTART_ZONE_HALF_HEIGHT: f32 = 50.0;

    // Loop
    pub const TARGET_TPS: u32 = 60;
}
