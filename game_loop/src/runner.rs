use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use game_core::{Params, Simulation};

use crate::clock::FrameClock;
use crate::render::Renderer;

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("game loop is already running")]
    AlreadyRunning,
    #[error("failed to spawn loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Last-writer-wins hand-off for the pointer Y coordinate.
///
/// Pointer events may arrive from any thread; only the most recent value
/// before a tick matters, so a single atomic slot replaces any queue.
#[derive(Debug)]
struct PointerCell {
    y_bits: AtomicU32,
    pending: AtomicBool,
}

impl PointerCell {
    fn new() -> Self {
        Self {
            y_bits: AtomicU32::new(0),
            pending: AtomicBool::new(false),
        }
    }

    fn set(&self, y: f32) {
        self.y_bits.store(y.to_bits(), Ordering::Release);
        self.pending.store(true, Ordering::Release);
    }

    /// Consume the pending value, if any. Called once per tick.
    fn take(&self) -> Option<f32> {
        if self.pending.swap(false, Ordering::Acquire) {
            Some(f32::from_bits(self.y_bits.load(Ordering::Acquire)))
        } else {
            None
        }
    }
}

struct Shared {
    sim: Mutex<Simulation>,
    running: AtomicBool,
    pointer: PointerCell,
}

/// Drives the simulation at a fixed tick rate on a dedicated thread.
///
/// Each tick, under one lock: pending pointer input is applied, the
/// simulation advances, and the renderer draws the result. Readers going
/// through [`GameLoop::with_state`] are serialized with that critical
/// section, so they only ever see state between ticks.
pub struct GameLoop {
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
    target_tps: u32,
}

impl GameLoop {
    pub fn new(sim: Simulation) -> Self {
        Self::with_tps(sim, Params::TARGET_TPS)
    }

    pub fn with_tps(sim: Simulation, target_tps: u32) -> Self {
        Self {
            shared: Arc::new(Shared {
                sim: Mutex::new(sim),
                running: AtomicBool::new(false),
                pointer: PointerCell::new(),
            }),
            thread: None,
            target_tps,
        }
    }

    /// Spawn the loop thread. After a `stop`, `start` runs the loop on a
    /// fresh thread; threads are never reused.
    pub fn start<R: Renderer + 'static>(&mut self, mut renderer: R) -> Result<(), LoopError> {
        if self.thread.is_some() {
            return Err(LoopError::AlreadyRunning);
        }

        self.shared.running.store(true, Ordering::Release);
        let shared = self.shared.clone();
        let target_tps = self.target_tps;

        let handle = thread::Builder::new()
            .name("game-loop".into())
            .spawn(move || run_loop(&shared, &mut renderer, target_tps))?;
        self.thread = Some(handle);

        info!(target_tps, "game loop started");
        Ok(())
    }

    /// Request a cooperative stop and block until the loop thread has
    /// terminated. Idempotent; safe to call when never started.
    pub fn stop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                error!("game loop thread panicked during shutdown");
            }
            info!("game loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.is_some() && self.shared.running.load(Ordering::Acquire)
    }

    /// Forward a raw pointer Y coordinate. Non-blocking; the most recent
    /// value before the next tick wins.
    pub fn on_pointer_input(&self, y: f32) {
        self.shared.pointer.set(y);
    }

    /// Explicit reset entry point
    pub fn new_game(&self) {
        self.shared.sim.lock().new_game();
    }

    /// Serialized read access to the simulation, between ticks
    pub fn with_state<T>(&self, f: impl FnOnce(&Simulation) -> T) -> T {
        f(&self.shared.sim.lock())
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop<R: Renderer>(shared: &Shared, renderer: &mut R, target_tps: u32) {
    let mut clock = FrameClock::new(target_tps);

    while shared.running.load(Ordering::Acquire) {
        clock.begin_frame();
        {
            let mut sim = shared.sim.lock();

            if let Some(y) = shared.pointer.take() {
                sim.pointer_input(y);
            }

            sim.update();

            let events = *sim.events();
            if events.player_scored || events.ai_scored {
                let score = sim.score();
                debug!(player = score.player, ai = score.ai, "point scored");
            }
            if events.match_over {
                info!(winner = ?sim.winner(), "match over");
            }

            if let Err(err) = renderer.render(&sim) {
                warn!(%err, "render failed; continuing");
            }
        }
        clock.end_frame();
    }

    debug!("game loop thread exiting");
}
