pub mod config;
mod camera;
mod game_state;

pub use camera::Camera;
pub use config::SimulationConfig;
pub use game_state::GameState;
