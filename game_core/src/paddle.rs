use glam::Vec2;

use crate::config::Config;
use crate::geom::Aabb;

/// A paddle. X is fixed at creation (left = player, right = AI); Y is the
/// top edge and moves within `[0, screen_height - paddle_height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move up by `speed`, clamped to the playfield
    pub fn move_up(&mut self, speed: f32, config: &Config) {
        self.y = config.clamp_paddle_y(self.y - speed);
    }

    /// Move down by `speed`, clamped to the playfield
    pub fn move_down(&mut self, speed: f32, config: &Config) {
        self.y = config.clamp_paddle_y(self.y + speed);
    }

    /// Center the paddle on the target Y, clamped to the playfield.
    /// Used for direct pointer control.
    pub fn move_to(&mut self, target_center_y: f32, config: &Config) {
        self.y = config.clamp_paddle_y(target_center_y - config.paddle_height / 2.0);
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Current bounding rectangle; always reflects the latest Y
    pub fn bounding_box(&self, config: &Config) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + config.paddle_width, self.y + config.paddle_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_up_clamps_at_top() {
        let config = Config::new();
        let mut paddle = Paddle::new(100.0, 5.0);
        paddle.move_up(20.0, &config);
        assert_eq!(paddle.y, 0.0, "Paddle must stop at the top edge");
    }

    #[test]
    fn test_move_down_clamps_at_bottom() {
        let config = Config::new();
        let max_y = config.screen_height - config.paddle_height;
        let mut paddle = Paddle::new(100.0, max_y - 3.0);
        paddle.move_down(50.0, &config);
        assert_eq!(paddle.y, max_y, "Paddle must stop at the bottom edge");
    }

    #[test]
    fn test_move_within_bounds() {
        let config = Config::new();
        let mut paddle = Paddle::new(100.0, 400.0);
        paddle.move_down(8.0, &config);
        assert_eq!(paddle.y, 408.0);
        paddle.move_up(8.0, &config);
        assert_eq!(paddle.y, 400.0);
    }

    #[test]
    fn test_move_to_centers_on_target() {
        let config = Config::new();
        let mut paddle = Paddle::new(100.0, 0.0);
        paddle.move_to(640.0, &config);
        assert_eq!(paddle.center_y(&config), 640.0);
    }

    #[test]
    fn test_move_to_clamps_extremes() {
        let config = Config::new();
        let mut paddle = Paddle::new(100.0, 400.0);

        paddle.move_to(0.0, &config);
        assert_eq!(paddle.y, 0.0, "Target above the field clamps to the top");

        paddle.move_to(config.screen_height, &config);
        assert_eq!(
            paddle.y,
            config.screen_height - config.paddle_height,
            "Target below the field clamps to the bottom"
        );
    }

    #[test]
    fn test_bounding_box_tracks_position() {
        let config = Config::new();
        let mut paddle = Paddle::new(100.0, 200.0);
        let rect = paddle.bounding_box(&config);
        assert_eq!(rect.min, Vec2::new(100.0, 200.0));
        assert_eq!(rect.max, Vec2::new(140.0, 500.0));

        paddle.move_down(10.0, &config);
        let rect = paddle.bounding_box(&config);
        assert_eq!(rect.min.y, 210.0, "Box must reflect the latest Y");
    }
}
