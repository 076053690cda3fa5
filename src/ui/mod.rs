mod coin_view;
mod cooldown_view;
pub mod layout;
mod projection;
mod status_bar;
mod theme;

use std::time::Instant;

use crate::app::state::AppState;
use crate::coin::CoinView;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState, now: Instant) {
    let app_layout = layout::compute_layout(frame.area());

    for view in state.coin.view(&state.props, now) {
        match view {
            CoinView::Clickable {
                fun,
                dimmed,
                caption,
                tilt,
                numbers,
                visual,
            } => {
                let layer = coin_view::ClickableLayer {
                    fun,
                    dimmed,
                    caption,
                    tilt,
                    numbers: &numbers,
                    visual,
                };
                coin_view::render(
                    frame,
                    app_layout.stage,
                    &layer,
                    &state.metrics,
                    state.tick_count,
                    now,
                );
            }
            CoinView::Cooldown { label, visual } => {
                cooldown_view::render(frame, app_layout.stage, &label, visual, &state.metrics);
            }
        }
    }

    status_bar::render(frame, app_layout.status_bar, state);
}
