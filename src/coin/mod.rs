//! Headless model of the tappable coin.
//!
//! Nothing in here draws. [`CoinWidget`] holds tilt and floating numbers and
//! reports what should be drawn as [`CoinView`] layers; `ui` turns those into
//! terminal cells.

pub mod floating;
pub mod geometry;
pub mod motion;
pub mod presence;
pub mod props;
pub mod tilt;
pub mod widget;

pub use geometry::{CellMetrics, PxPoint, PxRect};
pub use props::CoinProps;
pub use widget::{CoinView, CoinWidget, Press};
