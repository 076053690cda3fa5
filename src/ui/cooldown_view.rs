use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::Paragraph;

use crate::coin::motion::Visual;
use crate::coin::CellMetrics;
use crate::ui::layout::{centered_square, px_to_cells};
use crate::ui::theme::Theme;

/// The ring is drawn in a 300x300 box with radius 140.
const VIEW_BOX: f64 = 300.0;
const RING_RADIUS: f64 = 140.0;
const RING_FILL: f64 = 0.9;

pub fn render(frame: &mut Frame, stage: Rect, label: &str, visual: Visual, metrics: &CellMetrics) {
    if visual.opacity < 0.02 {
        return;
    }

    let square = centered_square(stage, metrics, RING_FILL);
    let area = px_to_cells(&square, metrics, stage);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let color = Theme::cooldown_ring(visual.opacity);
    let radius = RING_RADIUS * visual.scale;
    let ring = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, VIEW_BOX])
        .y_bounds([0.0, VIEW_BOX])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: VIEW_BOX / 2.0,
                y: VIEW_BOX / 2.0,
                radius,
                color,
            });
        });
    frame.render_widget(ring, area);

    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    let text = Paragraph::new(Line::from(label).centered()).style(Theme::cooldown_number(visual.opacity));
    frame.render_widget(text, middle);
}
