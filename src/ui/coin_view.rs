use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::coin::floating::FloatingNumber;
use crate::coin::motion::Visual;
use crate::coin::tilt::Tilt;
use crate::coin::{CellMetrics, PxPoint, PxRect};
use crate::ui::layout::{coin_geometry, px_to_cells};
use crate::ui::projection::CoinFace;
use crate::ui::theme::Theme;

/// Below this the layer is invisible and is skipped.
const MIN_OPACITY: f64 = 0.02;
/// Headroom for the entrance spring overshooting full size.
const OVERSHOOT: f64 = 1.25;
const RIM_START: f64 = 0.86;
const EMBOSS: std::ops::Range<f64> = 0.56..0.64;

pub struct ClickableLayer<'a> {
    pub fun: bool,
    pub dimmed: bool,
    pub caption: Option<&'a str>,
    pub tilt: Tilt,
    pub numbers: &'a [&'a FloatingNumber],
    pub visual: Visual,
}

pub fn render(
    frame: &mut Frame,
    stage: Rect,
    layer: &ClickableLayer,
    metrics: &CellMetrics,
    tick: u64,
    now: Instant,
) {
    if layer.visual.opacity < MIN_OPACITY {
        return;
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::container(layer.fun, layer.dimmed, tick, layer.visual.opacity));
    if layer.dimmed {
        block = block.title(" zzz ").title_style(Theme::border());
    }
    let inner = block.inner(stage);
    frame.render_widget(block, stage);

    if let Some(caption) = layer.caption {
        let row = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
        let line = Line::from(caption).centered();
        frame.render_widget(Paragraph::new(line).style(Theme::title()), row);
    }

    render_coin(frame, stage, inner, layer, metrics, tick);
    render_numbers(frame, inner, layer.numbers, metrics, now);
}

fn render_coin(
    frame: &mut Frame,
    stage: Rect,
    bounds: Rect,
    layer: &ClickableLayer,
    metrics: &CellMetrics,
    tick: u64,
) {
    let rect = coin_geometry(stage, metrics);
    let center = rect.center();
    let face = CoinFace::new(rect.width / 2.0, &layer.tilt, layer.visual.scale);

    let reach = rect.width / 2.0 * layer.visual.scale.max(1.0) * OVERSHOOT;
    let search = PxRect::new(center.x - reach, center.y - reach, reach * 2.0, reach * 2.0);
    let cells = px_to_cells(&search, metrics, bounds);

    let buf = frame.buffer_mut();
    for y in cells.top()..cells.bottom() {
        for x in cells.left()..cells.right() {
            let p = metrics.cell_center(x, y);
            let Some(hit) = face.hit(p.x - center.x, p.y - center.y) else {
                continue;
            };
            let rim = hit.radius > RIM_START;
            let brightness = hit.intensity * (0.85 + 0.2 * hit.toward_light);
            let symbol = if !rim && EMBOSS.contains(&hit.radius) {
                '▓'
            } else {
                '█'
            };
            let style = Theme::coin(
                layer.fun,
                layer.dimmed,
                tick,
                brightness,
                rim,
                layer.visual.opacity,
            );
            buf[(x, y)].set_char(symbol).set_style(style);
        }
    }
}

fn render_numbers(
    frame: &mut Frame,
    bounds: Rect,
    numbers: &[&FloatingNumber],
    metrics: &CellMetrics,
    now: Instant,
) {
    let buf = frame.buffer_mut();
    for number in numbers {
        let (x, y, opacity) = number.animated(now);
        if opacity < MIN_OPACITY {
            continue;
        }
        let Some((col, row)) = metrics.cell_at(PxPoint::new(x, y)) else {
            continue;
        };
        let label = number.label();
        let start = col.saturating_sub((label.len() / 2) as u16).max(bounds.x);
        if row < bounds.y || row >= bounds.bottom() || start >= bounds.right() {
            continue;
        }
        let width = (bounds.right() - start) as usize;
        buf.set_stringn(start, row, &label, width, Theme::floating_number(opacity));
    }
}
