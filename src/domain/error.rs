//! Error types for the universe engine.

use super::Cell;
use thiserror::Error;

/// Errors that can occur while advancing a universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UniverseError {
    /// A living cell sits on the edge of the coordinate range, so one of its
    /// neighbours is not representable.
    #[error("coordinate overflow: neighbours of {cell} leave the i64 range")]
    CoordinateOverflow {
        /// The cell whose neighbourhood could not be enumerated.
        cell: Cell,
    },
}
