// UI constants - functions where they depend on the window size
use macroquad::prelude::{Color, screen_height, screen_width};

pub const HUD_FONT_SIZE: f32 = 22.0;
pub const HUD_MARGIN: f32 = 20.0;
pub const HUD_LINE_HEIGHT: f32 = 26.0;

/// Fraction of a cell's square painted, leaving a gap between cells
pub const GAP_FACTOR: f32 = 0.9;
/// Below this many pixels per cell the gap is dropped
pub const MIN_GAP_ZOOM: f32 = 4.0;

pub const BG_COLOR: Color = Color::new(0.02, 0.27, 0.37, 1.0);
pub const CELL_COLOR: Color = Color::new(0.83, 0.95, 0.96, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.46, 0.90, 0.85, 1.0);
pub const SELECT_COLOR: Color = Color::new(0.09, 0.60, 0.71, 1.0);

/// Size of the drawing area in pixels
pub fn viewport() -> (f64, f64) {
    (screen_width() as f64, screen_height() as f64)
}

/// Format large numbers with K/M/B suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
        assert_eq!(format_number(3_100_000_000), "3.1B");
    }
}
