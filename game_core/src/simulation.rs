use crate::ball::Ball;
use crate::config::Config;
use crate::paddle::Paddle;
use crate::resources::{Events, GameRng, Score, Side};

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// The whole match: one ball, two paddles, the score, and the phase.
/// Owns its state exclusively; the host mutates it only through
/// `update`, the pointer-input methods, and `new_game`.
pub struct Simulation {
    config: Config,
    rng: GameRng,
    ball: Ball,
    player_paddle: Paddle,
    ai_paddle: Paddle,
    score: Score,
    phase: Phase,
    events: Events,
}

impl Simulation {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let ball = Ball::new(config.ball_spawn(), &config, &mut rng);
        let player_paddle = Paddle::new(config.player_paddle_x(), config.paddle_spawn_y());
        let ai_paddle = Paddle::new(config.ai_paddle_x(), config.paddle_spawn_y());
        Self {
            config,
            rng,
            ball,
            player_paddle,
            ai_paddle,
            score: Score::new(),
            phase: Phase::Playing,
            events: Events::new(),
        }
    }

    /// Advance the match by one fixed tick. Does nothing once the match
    /// is over; `new_game` is the only way back to play.
    pub fn update(&mut self) {
        // Event flags describe one tick only
        self.events.clear();
        if self.phase == Phase::GameOver {
            return;
        }

        self.events.ball_hit_wall = self.ball.update(&self.config);

        self.chase_ball();

        // Player (left) paddle is tested first; on a degenerate tick both
        // paddles may register and both bounces apply.
        if self.ball.collides_with(&self.player_paddle, &self.config) {
            self.ball.bounce_off_paddle(&self.player_paddle, &self.config);
            self.events.ball_hit_paddle = true;
        }
        if self.ball.collides_with(&self.ai_paddle, &self.config) {
            self.ball.bounce_off_paddle(&self.ai_paddle, &self.config);
            self.events.ball_hit_paddle = true;
        }

        self.check_scoring();
    }

    /// AI paddle follows the ball: a fixed step toward the ball's Y each
    /// tick, no prediction, no speed scaling with distance.
    fn chase_ball(&mut self) {
        let target = self.ball.pos.y;
        let center = self.ai_paddle.center_y(&self.config);
        if center < target {
            self.ai_paddle.move_down(self.config.ai_speed, &self.config);
        } else if center > target {
            self.ai_paddle.move_up(self.config.ai_speed, &self.config);
        }
    }

    fn check_scoring(&mut self) {
        let r = self.config.ball_radius;
        if self.ball.pos.x - r < 0.0 {
            self.score.increment_ai();
            self.events.ai_scored = true;
            self.check_game_over();
            self.reset_ball();
        } else if self.ball.pos.x + r > self.config.screen_width {
            self.score.increment_player();
            self.events.player_scored = true;
            self.check_game_over();
            self.reset_ball();
        }
    }

    fn check_game_over(&mut self) {
        if self.score.winner(self.config.win_score).is_some() {
            self.phase = Phase::GameOver;
            self.events.match_over = true;
        }
    }

    fn reset_ball(&mut self) {
        self.ball
            .reset(self.config.ball_spawn(), &self.config, &mut self.rng);
    }

    /// Center the player paddle on the given Y (pointer control)
    pub fn set_player_paddle_target(&mut self, y: f32) {
        self.player_paddle.move_to(y, &self.config);
    }

    /// Route a raw pointer Y: paddle target while playing, restart-zone
    /// check once the match is over.
    pub fn pointer_input(&mut self, y: f32) {
        match self.phase {
            Phase::Playing => self.set_player_paddle_target(y),
            Phase::GameOver => {
                if self.config.in_restart_zone(y) {
                    self.new_game();
                }
            }
        }
    }

    /// Reset everything to the initial state: scores zeroed, ball served
    /// from center, paddles recentered. Idempotent.
    pub fn new_game(&mut self) {
        self.ball = Ball::new(self.config.ball_spawn(), &self.config, &mut self.rng);
        self.player_paddle = Paddle::new(self.config.player_paddle_x(), self.config.paddle_spawn_y());
        self.ai_paddle = Paddle::new(self.config.ai_paddle_x(), self.config.paddle_spawn_y());
        self.score = Score::new();
        self.phase = Phase::Playing;
        self.events.clear();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn player_paddle(&self) -> &Paddle {
        &self.player_paddle
    }

    pub fn ai_paddle(&self) -> &Paddle {
        &self.ai_paddle
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.winner(self.config.win_score)
    }

    pub fn events(&self) -> &Events {
        &self.events
    }
}
