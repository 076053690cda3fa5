use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::coin::{CellMetrics, PxRect};

/// Share of the stage's shorter side taken by the coin.
const COIN_FILL: f64 = 0.6;

pub struct AppLayout {
    pub stage: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Stage
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        stage: chunks[0],
        status_bar: chunks[1],
    }
}

/// Largest pixel-square region centered in `area`, shrunk by `fill`.
pub fn centered_square(area: Rect, metrics: &CellMetrics, fill: f64) -> PxRect {
    let px = metrics.rect_to_px(area);
    let side = px.width.min(px.height) * fill;
    let center = px.center();
    PxRect::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
}

/// Where the coin element sits inside the stage.
pub fn coin_geometry(stage: Rect, metrics: &CellMetrics) -> PxRect {
    centered_square(stage, metrics, COIN_FILL)
}

/// Smallest cell rectangle covering a pixel rectangle, clipped to `bounds`.
pub fn px_to_cells(r: &PxRect, metrics: &CellMetrics, bounds: Rect) -> Rect {
    let left = (r.left / metrics.cell_width_px).floor().max(bounds.x as f64);
    let top = (r.top / metrics.cell_height_px).floor().max(bounds.y as f64);
    let right = ((r.left + r.width) / metrics.cell_width_px)
        .ceil()
        .min(bounds.right() as f64);
    let bottom = ((r.top + r.height) / metrics.cell_height_px)
        .ceil()
        .min(bounds.bottom() as f64);
    if right <= left || bottom <= top {
        return Rect::new(bounds.x, bounds.y, 0, 0);
    }
    Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    )
}
