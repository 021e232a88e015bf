//! Camera for the terminal
//!
//! Maps field coordinates onto the character grid inside the border.
//! Terminal cells are taller than wide, so x and y scale independently.

use glam::Vec2;
use std::ops::RangeInclusive;

/// Rows used by the top border, bottom border and status line
pub const CHROME_ROWS: u16 = 3;
/// Columns used by the left and right border
pub const CHROME_COLS: u16 = 2;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub cols: u16,
    pub rows: u16,
    scale: Vec2,
}

impl Camera {
    /// Fit a `field_width` x `field_height` field into a terminal of the given size
    pub fn fit(field_width: f32, field_height: f32, term_cols: u16, term_rows: u16) -> Self {
        let cols = term_cols.saturating_sub(CHROME_COLS).max(1);
        let rows = term_rows.saturating_sub(CHROME_ROWS).max(1);
        let scale = Vec2::new(cols as f32 / field_width, rows as f32 / field_height);
        Self { cols, rows, scale }
    }

    /// Cells covered by a field-space rectangle, clamped to the play area
    pub fn rect_cells(&self, pos: Vec2, size: Vec2) -> (RangeInclusive<u16>, RangeInclusive<u16>) {
        let start = (pos * self.scale).floor();
        let end = ((pos + size) * self.scale).ceil() - Vec2::ONE;

        let c0 = clamp_cell(start.x, self.cols);
        let c1 = clamp_cell(end.x.max(start.x), self.cols);
        let r0 = clamp_cell(start.y, self.rows);
        let r1 = clamp_cell(end.y.max(start.y), self.rows);
        (c0..=c1, r0..=r1)
    }
}

fn clamp_cell(v: f32, len: u16) -> u16 {
    v.clamp(0.0, f32::from(len - 1)) as u16
}
