use rand::Rng;

use crate::domain::{Cell, Universe, all_rules};
use super::config::{MAX_SPEED, MIN_SPEED, SimulationConfig};

/// GameState orchestrates the simulation.
/// This is the application layer that drives the universe on a timer.
#[derive(Debug)]
pub struct GameState {
    pub universe: Universe,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
    rule_index: usize,
}

impl GameState {
    /// Create a paused game state over an empty universe
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            universe: Universe::new(),
            is_running: false,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second.clamp(MIN_SPEED, MAX_SPEED),
            last_step_time_ms: 0.0,
            rule_index: 0,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::debug!("simulation {}", if self.is_running { "resumed" } else { "paused" });
        self
    }

    /// Kill every cell, reset generation counter and pause
    pub fn clear(mut self) -> Self {
        self.universe.reset();
        self.is_running = false;
        self.update_timer = 0.0;
        log::info!("universe cleared");
        self
    }

    /// Replace the population with a random square soup around the origin
    pub fn randomize<R: Rng>(mut self, rng: &mut R, extent: i64, density: f64) -> Self {
        self.universe.reset();
        let density = density.clamp(0.0, 1.0);
        for y in -extent..extent {
            for x in -extent..extent {
                if rng.random_bool(density) {
                    self.universe.add(Cell::new(x, y));
                }
            }
        }
        self.is_running = false;
        log::info!("randomized universe with {} cells", self.universe.len());
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Switch to the next rule in `all_rules()`
    pub fn cycle_rule(mut self) -> Self {
        let mut rules = all_rules();
        self.rule_index = (self.rule_index + 1) % rules.len();
        let rule = rules.swap_remove(self.rule_index);
        log::info!("rule set to {} ({})", rule.name(), rule.description());
        self.universe.set_rule(rule);
        self
    }

    /// Switch to the next stepping algorithm
    pub fn cycle_algorithm(mut self) -> Self {
        let algorithm = self.universe.algorithm().next();
        log::info!("algorithm set to {}", algorithm.name());
        self.universe.set_algorithm(algorithm);
        self
    }

    pub fn paint(&mut self, cell: Cell) {
        self.universe.add(cell);
    }

    pub fn erase(&mut self, cell: Cell) {
        self.universe.remove(cell);
    }

    /// Advance one generation right away, measuring how long it took.
    /// A rejected step pauses the simulation.
    pub fn step_once(mut self) -> Self {
        let start = std::time::Instant::now();
        match self.universe.step() {
            Ok(()) => {
                self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
                log::debug!(
                    "generation {}: {} cells in {:.2}ms",
                    self.universe.generation(),
                    self.universe.len(),
                    self.last_step_time_ms
                );
            }
            Err(err) => {
                log::warn!("step rejected, pausing: {err}");
                self.is_running = false;
            }
        }
        self
    }

    /// Update simulation by one frame
    /// This is the main game loop coordination
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            self = self.step_once();
        }

        self
    }
}
