pub mod ball;
pub mod config;
pub mod geom;
pub mod paddle;
pub mod params;
pub mod resources;
pub mod simulation;

pub use ball::Ball;
pub use config::Config;
pub use geom::Aabb;
pub use paddle::Paddle;
pub use params::Params;
pub use resources::{Events, GameRng, Score, Side};
pub use simulation::{Phase, Simulation};
