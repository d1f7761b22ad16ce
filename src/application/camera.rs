use crate::domain::Cell;
use super::config::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// Camera manages viewport and zoom for navigating the infinite board.
/// `center` is in cell units; `zoom` is pixels per cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f64) {
        self.zoom = (self.zoom / factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan by a screen-space distance in pixels
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center_x += dx / self.zoom;
        self.center_y += dy / self.zoom;
    }

    /// Put a cell in the middle of the viewport
    pub fn center_on(&mut self, cell: Cell) {
        self.center_x = cell.x as f64 + 0.5;
        self.center_y = cell.y as f64 + 0.5;
    }

    /// Cell under a screen position. Floors, so pixels left of the origin
    /// land in negative cells.
    pub fn screen_to_cell(&self, screen: (f64, f64), viewport: (f64, f64)) -> Cell {
        let x = (screen.0 - viewport.0 / 2.0) / self.zoom + self.center_x;
        let y = (screen.1 - viewport.1 / 2.0) / self.zoom + self.center_y;
        Cell::new(x.floor() as i64, y.floor() as i64)
    }

    /// Top-left corner of a cell on screen
    pub fn cell_to_screen(&self, cell: Cell, viewport: (f64, f64)) -> (f64, f64) {
        let x = (cell.x as f64 - self.center_x) * self.zoom + viewport.0 / 2.0;
        let y = (cell.y as f64 - self.center_y) * self.zoom + viewport.1 / 2.0;
        (x, y)
    }

    /// Inclusive corners of the cells at least partly visible, for culling
    pub fn visible_cells(&self, viewport: (f64, f64)) -> (Cell, Cell) {
        let min = self.screen_to_cell((0.0, 0.0), viewport);
        let max = self.screen_to_cell(viewport, viewport);
        (min, max)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
