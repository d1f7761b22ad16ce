/// Simulation configuration constants.
///
/// Speeds are in generations per second, zoom in pixels per cell.
pub const DEFAULT_SPEED: f32 = 10.0;
pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 60.0;

pub const DEFAULT_ZOOM: f64 = 20.0;
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 120.0;

/// Cells per second the camera moves when panning with the keyboard, at zoom 1
pub const PAN_SPEED: f64 = 600.0;

/// Half side of the square filled by randomize, centred on the origin
pub const RANDOM_EXTENT: i64 = 40;
/// Probability that a cell in that square starts alive
pub const RANDOM_DENSITY: f64 = 0.3;

/// Tunable parameters consumed by the front-end.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub updates_per_second: f32,
    pub random_extent: i64,
    pub random_density: f64,
    /// RNG seed for randomize; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 800,
            updates_per_second: DEFAULT_SPEED,
            random_extent: RANDOM_EXTENT,
            random_density: RANDOM_DENSITY,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speed_is_in_range() {
        let config = SimulationConfig::default();
        assert!((MIN_SPEED..=MAX_SPEED).contains(&config.updates_per_second));
    }

    #[test]
    fn test_zoom_limits_are_ordered() {
        assert!(MIN_ZOOM <= DEFAULT_ZOOM && DEFAULT_ZOOM <= MAX_ZOOM);
    }

    #[test]
    fn test_density_is_probability() {
        assert!((0.0..=1.0).contains(&RANDOM_DENSITY));
    }
}
