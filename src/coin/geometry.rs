//! Pixel-space geometry for the coin.
//!
//! The widget reasons in device pixels so tilt and float distances keep the
//! same feel regardless of terminal font. Cells are converted through
//! [`CellMetrics`]; a cell maps to the pixel at its center.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of a measured element, like a DOM client rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PxRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PxRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> PxPoint {
        PxPoint::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Whether `p` lies on the disc inscribed in the rect, drawn at `scale`.
    pub fn disc_contains(&self, p: PxPoint, scale: f64) -> bool {
        let c = self.center();
        let radius = self.width.min(self.height) / 2.0 * scale;
        let (dx, dy) = (p.x - c.x, p.y - c.y);
        radius > 0.0 && dx * dx + dy * dy <= radius * radius
    }
}

/// Size of one terminal cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width_px: f64,
    pub cell_height_px: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn cell_center(&self, column: u16, row: u16) -> PxPoint {
        PxPoint::new(
            (column as f64 + 0.5) * self.cell_width_px,
            (row as f64 + 0.5) * self.cell_height_px,
        )
    }

    /// Cell containing a pixel, or `None` when it lies left of or above the
    /// origin.
    pub fn cell_at(&self, p: PxPoint) -> Option<(u16, u16)> {
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let col = (p.x / self.cell_width_px).floor();
        let row = (p.y / self.cell_height_px).floor();
        if col > u16::MAX as f64 || row > u16::MAX as f64 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    pub fn rect_to_px(&self, r: Rect) -> PxRect {
        PxRect::new(
            r.x as f64 * self.cell_width_px,
            r.y as f64 * self.cell_height_px,
            r.width as f64 * self.cell_width_px,
            r.height as f64 * self.cell_height_px,
        )
    }
}
