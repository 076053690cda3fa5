//! Press-response transform applied to the coin.

use super::geometry::{PxPoint, PxRect};

/// Degrees of rotation per pixel of offset from the coin center.
const TILT_PER_PX: f64 = 0.1;
/// How far the coin sinks while pressed, in pixels.
const PRESSED_DEPTH: f64 = -5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub scale: f64,
    pub depth_offset: f64,
    /// Degrees.
    pub rotate_x: f64,
    /// Degrees.
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        scale: 1.0,
        depth_offset: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilt for a press at `press` on a coin measured as `coin`.
    ///
    /// Vertical offset is measured upward so a press above the center tips
    /// the top edge away.
    pub fn pressed_at(coin: &PxRect, press: PxPoint) -> Self {
        let center = coin.center();
        let offset_x = press.x - center.x;
        let offset_y = center.y - press.y;
        Self {
            scale: 1.0,
            depth_offset: PRESSED_DEPTH,
            rotate_x: offset_y * TILT_PER_PX,
            rotate_y: offset_x * TILT_PER_PX,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
