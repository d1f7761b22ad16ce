use macroquad::prelude::*;
use ::rand::{SeedableRng, rngs::StdRng};

use crate::application::config::PAN_SPEED;
use crate::application::{Camera, GameState, SimulationConfig};
use crate::domain::Cell;
use crate::ui::viewport;

/// Cell halfway between two corners, rounded towards negative infinity.
/// Sums in i128 so corners at opposite ends of the i64 range do not overflow.
pub fn midpoint(min: Cell, max: Cell) -> Cell {
    let mid = |a: i64, b: i64| (a as i128 + b as i128).div_euclid(2) as i64;
    Cell::new(mid(min.x, max.x), mid(min.y, max.y))
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with WASD or the arrow keys, scaled by frame time
pub fn handle_pan(camera: &mut Camera) {
    let step = PAN_SPEED * get_frame_time() as f64;
    let held = |keys: [KeyCode; 2]| keys.iter().any(|&k| is_key_down(k));

    if held([KeyCode::W, KeyCode::Up]) {
        camera.pan(0.0, -step);
    }
    if held([KeyCode::S, KeyCode::Down]) {
        camera.pan(0.0, step);
    }
    if held([KeyCode::A, KeyCode::Left]) {
        camera.pan(-step, 0.0);
    }
    if held([KeyCode::D, KeyCode::Right]) {
        camera.pan(step, 0.0);
    }
}

/// Paint with the left button, erase with the right
pub fn handle_mouse_paint(state: &mut GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    let cell = camera.screen_to_cell((mouse_pos.0 as f64, mouse_pos.1 as f64), viewport());

    if is_mouse_button_down(MouseButton::Left) {
        state.paint(cell);
    } else if is_mouse_button_down(MouseButton::Right) {
        state.erase(cell);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    state: GameState,
    camera: &mut Camera,
    config: &SimulationConfig,
) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 11] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::Enter, GameState::toggle_running),
        (KeyCode::Delete, GameState::clear),
        (KeyCode::C, GameState::clear),
        (KeyCode::N, GameState::step_once),
        (KeyCode::G, GameState::cycle_rule),
        (KeyCode::T, GameState::cycle_algorithm),
        (KeyCode::Equal, |s| s.adjust_speed(1.0)),
        (KeyCode::KpAdd, |s| s.adjust_speed(1.0)),
        (KeyCode::Minus, |s| s.adjust_speed(-1.0)),
        (KeyCode::KpSubtract, |s| s.adjust_speed(-1.0)),
    ];

    let mut new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::R) {
        let (extent, density) = (config.random_extent, config.random_density);
        new_state = match config.seed {
            Some(seed) => new_state.randomize(&mut StdRng::seed_from_u64(seed), extent, density),
            None => new_state.randomize(&mut ::rand::rng(), extent, density),
        };
    }

    if is_key_pressed(KeyCode::Delete) || is_key_pressed(KeyCode::C) {
        camera.reset();
    }

    // Recentre on the population with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        match new_state.universe.bounding_box() {
            Some((min, max)) => camera.center_on(midpoint(min, max)),
            None => camera.reset(),
        }
    }

    new_state
}
