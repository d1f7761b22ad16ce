// Domain layer - the universe engine, no I/O
pub mod domain;

// Application layer - pacing, camera, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Rule, Universe, UniverseError};
pub use application::{Camera, GameState, SimulationConfig};
