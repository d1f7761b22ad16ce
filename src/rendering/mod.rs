use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::{Cell, Universe};
use crate::ui::{
    CELL_COLOR, GAP_FACTOR, HUD_FONT_SIZE, HUD_LINE_HEIGHT, HUD_MARGIN, MIN_GAP_ZOOM,
    SELECT_COLOR, TEXT_COLOR, format_number, viewport,
};

/// Pixel size and inset of a painted cell at the camera's zoom
fn cell_extent(camera: &Camera) -> (f32, f32) {
    let zoom = camera.zoom as f32;
    if zoom < MIN_GAP_ZOOM {
        (zoom, 0.0)
    } else {
        let size = zoom * GAP_FACTOR;
        (size, (zoom - size) / 2.0)
    }
}

fn draw_cell(cell: Cell, camera: &Camera, color: Color) {
    let (size, inset) = cell_extent(camera);
    let (x, y) = camera.cell_to_screen(cell, viewport());
    draw_rectangle(x as f32 + inset, y as f32 + inset, size, size, color);
}

/// Draw the living cells inside the viewport.
/// Walks the population, not the screen, so empty space costs nothing.
pub fn draw_universe(universe: &Universe, camera: &Camera) {
    let (min, max) = camera.visible_cells(viewport());

    universe
        .cells()
        .filter(|c| (min.x..=max.x).contains(&c.x) && (min.y..=max.y).contains(&c.y))
        .for_each(|&cell| draw_cell(cell, camera, CELL_COLOR));
}

/// Highlight the cell under the mouse
pub fn draw_cursor(camera: &Camera, mouse_pos: (f32, f32)) {
    let cell = camera.screen_to_cell((mouse_pos.0 as f64, mouse_pos.1 as f64), viewport());
    draw_cell(cell, camera, SELECT_COLOR);
}

/// Draw speed, population, generation and the rest of the status lines
pub fn draw_hud(state: &GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    let universe = &state.universe;
    let hovered = camera.screen_to_cell((mouse_pos.0 as f64, mouse_pos.1 as f64), viewport());

    let lines = [
        format!("Simulation speed: {:.2} Hz", state.updates_per_second),
        format!("Cells No.: {}", format_number(universe.len())),
        format!("Current generation: {}", universe.generation()),
        format!("Status: {}", if state.is_running { "Running" } else { "Paused" }),
        format!("Rule: {} | Algorithm: {}", universe.rule().name(), universe.algorithm().name()),
        format!("Step: {:.2}ms | FPS: {}", state.last_step_time_ms, get_fps()),
        format!("Zoom: {:.1}px | Cursor: {}", camera.zoom, hovered),
    ];

    lines.iter().enumerate().for_each(|(i, text)| {
        let y = HUD_MARGIN + HUD_LINE_HEIGHT * (i as f32 + 1.0);
        draw_text(text, HUD_MARGIN, y, HUD_FONT_SIZE, TEXT_COLOR);
    });
}
