use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_max_speed: f32,
    pub ball_speed_increase: f32,
    pub ball_spin_factor: f32,
    pub ball_serve_drift: f32,
    pub ai_speed: f32,
    pub win_score: u8,
    pub restart_zone_offset: f32,
    pub restart_zone_half_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            ball_max_speed: Params::BALL_MAX_SPEED,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_spin_factor: Params::BALL_SPIN_FACTOR,
            ball_serve_drift: Params::BALL_SERVE_DRIFT,
            ai_speed: Params::AI_SPEED,
            win_score: Params::WIN_SCORE,
            restart_zone_offset: Params::RESTART_ZONE_OFFSET,
            restart_zone_half_height: Params::RESTART_ZONE_HALF_HEIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of the player (left) paddle
    pub fn player_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// X position of the AI (right) paddle
    pub fn ai_paddle_x(&self) -> f32 {
        self.screen_width - self.paddle_margin - self.paddle_width
    }

    /// Top-edge Y that centers a paddle vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }

    /// Center of the playfield, where the ball spawns and respawns
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Clamp a paddle's top-edge Y to the playfield
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.screen_height - self.paddle_height)
    }

    /// Whether a tap at Y lands in the restart zone shown on the
    /// game-over screen
    pub fn in_restart_zone(&self, y: f32) -> bool {
        let center = self.screen_height / 2.0 + self.restart_zone_offset;
        y > center - self.restart_zone_half_height && y < center + self.restart_zone_half_height
    }
}
