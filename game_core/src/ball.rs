use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::geom::Aabb;
use crate::paddle::Paddle;
use crate::resources::GameRng;

/// The ball. Velocity is distance per tick; the playfield bounds and
/// radius live in `Config`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Create a ball at `pos` with a fresh random serve
    pub fn new(pos: Vec2, config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self {
            pos,
            vel: Vec2::ZERO,
        };
        ball.serve(config, rng);
        ball
    }

    /// Randomize velocity: horizontal at base speed toward a random side,
    /// vertical drift uniform in [-serve_drift, serve_drift)
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        let direction = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            config.ball_base_speed * direction,
            rng.0.gen_range(-config.ball_serve_drift..config.ball_serve_drift),
        );
    }

    /// Advance one tick and bounce off the top/bottom walls.
    /// Returns true if a wall was hit. Horizontal exits are not handled
    /// here; they mean a point was scored and belong to the simulation.
    pub fn update(&mut self, config: &Config) -> bool {
        self.pos += self.vel;

        let r = config.ball_radius;
        if self.pos.y - r < 0.0 {
            self.pos.y = r;
            self.vel.y = -self.vel.y;
            true
        } else if self.pos.y + r > config.screen_height {
            self.pos.y = config.screen_height - r;
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Box-overlap collision test against a paddle. The ball is treated
    /// as its bounding square; cheap and fully deterministic.
    pub fn collides_with(&self, paddle: &Paddle, config: &Config) -> bool {
        let ball_box = Aabb::from_center_size(self.pos, Vec2::splat(config.ball_radius * 2.0));
        ball_box.overlaps(&paddle.bounding_box(config))
    }

    /// Reflect off a paddle, adding spin from the hit position and
    /// speeding up toward the cap.
    pub fn bounce_off_paddle(&mut self, paddle: &Paddle, config: &Config) {
        self.vel.x = -self.vel.x;

        // Spin: hit near the top sends the ball up, near the bottom down.
        // Corner clips can push the offset past [-1, 1], giving edge hits
        // extra spin.
        let half_height = config.paddle_height / 2.0;
        let normalized_offset = (self.pos.y - paddle.center_y(config)) / half_height;
        self.vel.y += normalized_offset * config.ball_spin_factor;

        // Speed up while under the cap; checked after the reflection
        if self.vel.x.abs() < config.ball_max_speed {
            self.vel.x *= config.ball_speed_increase;
        }

        // Step clear of the paddle so the next tick cannot re-collide
        if self.vel.x > 0.0 {
            self.pos.x = paddle.x + config.paddle_width + config.ball_radius;
        } else {
            self.pos.x = paddle.x - config.ball_radius;
        }
    }

    /// Reposition (after a point) and serve again
    pub fn reset(&mut self, pos: Vec2, config: &Config, rng: &mut GameRng) {
        self.pos = pos;
        self.serve(config, rng);
    }
}
