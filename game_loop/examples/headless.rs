//! Headless run: drives a full match with a scripted pointer and logs
//! frames as text instead of drawing.
//!
//! RUST_LOG=debug cargo run --example headless

use std::thread;
use std::time::Duration;

use game_core::{Config, GameRng, Simulation};
use game_loop::{GameLoop, RenderError, Renderer};

/// Logs the score line whenever it changes
struct ScoreboardRenderer {
    last_line: String,
}

impl Renderer for ScoreboardRenderer {
    fn render(&mut self, sim: &Simulation) -> Result<(), RenderError> {
        let score = sim.score();
        let line = if sim.is_game_over() {
            format!("{} - {}  ({:?} wins)", score.player, score.ai, sim.winner())
        } else {
            format!("{} - {}", score.player, score.ai)
        };
        if line != self.last_line {
            println!("score: {line}");
            self.last_line = line;
        }
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let sim = Simulation::new(Config::default(), GameRng::from_entropy());
    let screen_height = sim.config().screen_height;

    let mut game = GameLoop::new(sim);
    game.start(ScoreboardRenderer {
        last_line: String::new(),
    })
    .expect("loop failed to start");

    // Sweep the pointer up and down like a thumb on the screen
    let mut t = 0.0f32;
    while !game.with_state(|sim| sim.is_game_over()) {
        t += 0.02;
        let y = (t.sin() * 0.5 + 0.5) * screen_height;
        game.on_pointer_input(y);
        thread::sleep(Duration::from_millis(10));
    }

    game.stop();
    let score = game.with_state(|sim| sim.score());
    println!("final: {} - {}", score.player, score.ai);
}
