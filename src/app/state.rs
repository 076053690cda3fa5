use std::time::Instant;

use crate::coin::{CellMetrics, CoinProps, CoinWidget, PxRect};
use crate::config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    /// Props handed to the coin. Owned here, read-only to the widget.
    pub props: CoinProps,
    pub coin: CoinWidget,
    pub metrics: CellMetrics,
    pub tick_count: u64,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, now: Instant) -> Self {
        let props = config.widget.clone();
        let metrics = config.ui.cell_metrics();
        Self {
            coin: CoinWidget::mount(&props, now),
            props,
            metrics,
            config,
            tick_count: 0,
            dirty: true,
            should_quit: false,
        }
    }

    /// Record the coin's layout after a frame was drawn.
    pub fn remeasure(&mut self, coin: Option<PxRect>) {
        let rect = if self.props.can_click { coin } else { None };
        if self.coin.coin_rect() != rect {
            tracing::trace!(?rect, "coin measured");
            self.coin.measure(rect);
        }
    }
}
