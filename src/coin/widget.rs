//! The coin widget: transient visual state plus the tap handlers.
//!
//! Props are never stored here. Every call takes the caller's current
//! [`CoinProps`], so the widget is a function of props plus its own tilt and
//! floating numbers.

use std::time::Instant;

use rand::RngExt;

use super::floating::{EntryId, FloatingNumber, FloatingNumbers};
use super::geometry::{PxPoint, PxRect};
use super::motion::Visual;
use super::presence::Presence;
use super::props::{CoinProps, Mode};
use super::tilt::Tilt;

/// Horizontal jitter applied to each new floating number, in pixels.
const NUMBER_JITTER_PX: i64 = 10;

/// Outcome of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// Not on the coin, or no coin is shown.
    Missed,
    /// The coin was tapped; the click handler must run. `entry` is `None`
    /// when the coin has not been measured yet.
    Tapped { entry: Option<EntryId> },
}

/// One drawable layer of the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum CoinView<'a> {
    Clickable {
        fun: bool,
        dimmed: bool,
        caption: Option<&'a str>,
        tilt: Tilt,
        numbers: Vec<&'a FloatingNumber>,
        visual: Visual,
    },
    Cooldown {
        label: String,
        visual: Visual,
    },
}

#[derive(Debug)]
pub struct CoinWidget {
    tilt: Tilt,
    numbers: FloatingNumbers,
    coin_rect: Option<PxRect>,
    presence: Presence,
}

impl CoinWidget {
    pub fn mount(props: &CoinProps, now: Instant) -> Self {
        tracing::info!(mode = ?props.mode(), "coin mounted");
        Self {
            tilt: Tilt::NEUTRAL,
            numbers: FloatingNumbers::new(),
            coin_rect: None,
            presence: Presence::new(props.mode(), now),
        }
    }

    /// Follow a change of `can_click`. Leaving the clickable view drops its
    /// tilt, floating numbers and pending removals.
    pub fn sync(&mut self, props: &CoinProps, now: Instant) {
        let mode = props.mode();
        if !self.presence.update(mode, now) {
            return;
        }
        tracing::debug!(?mode, "coin view switched");
        if mode == Mode::Cooldown {
            self.tilt = Tilt::NEUTRAL;
            self.numbers.cancel_all();
            self.coin_rect = None;
        }
    }

    /// Record where the coin element was laid out, or that it is not laid
    /// out at all.
    pub fn measure(&mut self, rect: Option<PxRect>) {
        self.coin_rect = rect;
    }

    pub fn coin_rect(&self) -> Option<PxRect> {
        self.coin_rect
    }

    pub fn press(&mut self, props: &CoinProps, at: PxPoint, now: Instant) -> Press {
        self.sync(props, now);
        if props.mode() != Mode::Clickable {
            return Press::Missed;
        }

        let Some(rect) = self.coin_rect else {
            tracing::debug!("coin pressed before it was measured");
            return Press::Tapped { entry: None };
        };
        let scale = self.presence.visual(now).scale;
        if !rect.disc_contains(at, scale) {
            return Press::Missed;
        }

        self.tilt = Tilt::pressed_at(&rect, at);

        let mut rng = rand::rng();
        let jitter = rng.random_range(-NUMBER_JITTER_PX..=NUMBER_JITTER_PX);
        let value = props.tap_value();
        let id = self.numbers.push(value, at.x + jitter as f64, at.y, now);
        tracing::debug!(
            id = id.0,
            value,
            rotate_x = self.tilt.rotate_x,
            rotate_y = self.tilt.rotate_y,
            "coin tapped"
        );

        Press::Tapped { entry: Some(id) }
    }

    /// Pointer released or cancelled.
    pub fn release(&mut self) {
        self.tilt = Tilt::NEUTRAL;
    }

    /// Run due removals and settle finished transitions. Returns `true` when
    /// the widget needs to be redrawn.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.numbers.expire(now);
        let animating = self.presence.is_animating(now);
        self.presence.settle(now);
        expired > 0 || animating || !self.numbers.is_empty()
    }

    /// Layers to draw, back to front.
    pub fn view<'a>(&'a self, props: &'a CoinProps, now: Instant) -> Vec<CoinView<'a>> {
        self.presence
            .layers(now)
            .into_iter()
            .map(|layer| {
                let live = layer.mode == self.presence.current();
                match layer.mode {
                    Mode::Clickable => CoinView::Clickable {
                        fun: props.fun_mode,
                        dimmed: props.sleeping,
                        caption: props.caption.as_deref(),
                        tilt: if live { self.tilt } else { Tilt::NEUTRAL },
                        numbers: if live {
                            self.numbers.iter().collect()
                        } else {
                            Vec::new()
                        },
                        visual: layer.visual,
                    },
                    Mode::Cooldown => CoinView::Cooldown {
                        label: props.cooldown_label(),
                        visual: layer.visual,
                    },
                }
            })
            .collect()
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    #[cfg(test)]
    pub fn numbers(&self) -> &FloatingNumbers {
        &self.numbers
    }

    /// Teardown: cancel every pending removal.
    pub fn unmount(&mut self) {
        let pending = self.numbers.pending_removals();
        let live = self.numbers.len();
        self.numbers.cancel_all();
        self.tilt = Tilt::NEUTRAL;
        tracing::info!(pending, live, "coin unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::floating::NUMBER_LIFETIME;
    use std::time::Duration;

    /// Past the coin's entrance spring.
    const SETTLED: Duration = Duration::from_secs(3);

    fn measured(props: &CoinProps, now: Instant) -> CoinWidget {
        let mut w = CoinWidget::mount(props, now);
        w.measure(Some(PxRect::new(50.0, 50.0, 100.0, 100.0)));
        w
    }

    fn settled(props: &CoinProps) -> (CoinWidget, Instant) {
        let mounted = Instant::now();
        (measured(props, mounted), mounted + SETTLED)
    }

    #[test]
    fn test_tap_creates_one_entry() {
        let props = CoinProps {
            click_value: 3.0,
            ..CoinProps::default()
        };
        let (mut w, now) = settled(&props);

        let at = PxPoint::new(120.0, 70.0);
        let press = w.press(&props, at, now);
        assert!(matches!(press, Press::Tapped { entry: Some(_) }));
        assert_eq!(w.numbers().len(), 1);

        let entry = w.numbers().iter().next().unwrap();
        assert_eq!(entry.value, 15.0);
        assert!(entry.x >= at.x - 10.0 && entry.x <= at.x + 10.0);
        assert_eq!(entry.y, at.y);

        let tilt = w.tilt();
        assert!((tilt.rotate_x - 3.0).abs() < 1e-9);
        assert!((tilt.rotate_y - 2.0).abs() < 1e-9);
        assert_eq!(tilt.depth_offset, -5.0);
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let props = CoinProps::default();
        let (mut w, now) = settled(&props);
        let at = PxPoint::new(100.0, 100.0);
        for _ in 0..200 {
            w.press(&props, at, now);
        }
        assert_eq!(w.numbers().len(), 200);
        for e in w.numbers().iter() {
            assert!((90.0..=110.0).contains(&e.x));
            assert_eq!(e.x.fract(), 0.0);
            assert_eq!(e.value, 5.0);
        }
    }

    #[test]
    fn test_unmeasured_press_still_clicks() {
        let props = CoinProps::default();
        let now = Instant::now();
        let mut w = CoinWidget::mount(&props, now);
        let press = w.press(&props, PxPoint::new(10.0, 10.0), now);
        assert_eq!(press, Press::Tapped { entry: None });
        assert!(w.numbers().is_empty());
        assert!(w.tilt().is_neutral());
    }

    #[test]
    fn test_press_outside_coin_is_missed() {
        let props = CoinProps::default();
        let (mut w, now) = settled(&props);
        assert_eq!(w.press(&props, PxPoint::new(5.0, 5.0), now), Press::Missed);
        assert!(w.numbers().is_empty());
    }

    #[test]
    fn test_press_on_rect_corner_is_missed() {
        let props = CoinProps::default();
        let (mut w, now) = settled(&props);
        // inside the bounding box, outside the disc
        assert_eq!(w.press(&props, PxPoint::new(55.0, 55.0), now), Press::Missed);
        assert_eq!(w.press(&props, PxPoint::new(145.0, 140.0), now), Press::Missed);
        assert!(w.numbers().is_empty());
        assert!(w.tilt().is_neutral());
        assert!(matches!(
            w.press(&props, PxPoint::new(100.0, 52.0), now),
            Press::Tapped { entry: Some(_) }
        ));
    }

    #[test]
    fn test_press_follows_entrance_scale() {
        let props = CoinProps::default();
        let t0 = Instant::now();
        let mut w = measured(&props, t0);
        // scale is still 0 on the first frame
        assert_eq!(w.press(&props, PxPoint::new(100.0, 100.0), t0), Press::Missed);
        assert!(w.numbers().is_empty());
        assert!(matches!(
            w.press(&props, PxPoint::new(100.0, 100.0), t0 + SETTLED),
            Press::Tapped { entry: Some(_) }
        ));
    }

    #[test]
    fn test_press_during_cooldown_is_missed() {
        let props = CoinProps {
            can_click: false,
            ..CoinProps::default()
        };
        let (mut w, now) = settled(&props);
        assert_eq!(w.press(&props, PxPoint::new(100.0, 100.0), now), Press::Missed);
    }

    #[test]
    fn test_release_resets_tilt() {
        let props = CoinProps::default();
        let (mut w, now) = settled(&props);
        w.press(&props, PxPoint::new(130.0, 75.0), now);
        assert!(!w.tilt().is_neutral());
        w.release();
        assert_eq!(w.tilt(), Tilt::NEUTRAL);
        w.release();
        assert_eq!(w.tilt(), Tilt::NEUTRAL);
    }

    #[test]
    fn test_entries_expire_on_tick() {
        let props = CoinProps::default();
        let (mut w, t0) = settled(&props);
        w.press(&props, PxPoint::new(100.0, 100.0), t0);
        w.press(&props, PxPoint::new(100.0, 100.0), t0 + Duration::from_millis(300));

        w.tick(t0 + Duration::from_millis(950));
        assert_eq!(w.numbers().len(), 2);
        w.tick(t0 + NUMBER_LIFETIME + Duration::from_millis(50));
        assert_eq!(w.numbers().len(), 1);
        w.tick(t0 + Duration::from_millis(1350));
        assert!(w.numbers().is_empty());
    }

    #[test]
    fn test_switch_to_cooldown_leaves_nothing_behind() {
        let mut props = CoinProps::default();
        let (mut w, t0) = settled(&props);
        w.press(&props, PxPoint::new(120.0, 70.0), t0);

        props.can_click = false;
        props.cooldown_remaining = 7.0;
        w.sync(&props, t0 + Duration::from_millis(10));
        assert!(w.numbers().is_empty());
        assert_eq!(w.numbers().pending_removals(), 0);
        assert!(w.tilt().is_neutral());
        assert_eq!(w.coin_rect(), None);

        let views = w.view(&props, t0 + Duration::from_secs(5));
        assert_eq!(views.len(), 1);
        match &views[0] {
            CoinView::Cooldown { label, .. } => assert_eq!(label, "7"),
            other => panic!("expected cooldown view, got {:?}", other),
        }
    }

    #[test]
    fn test_exiting_coin_layer_is_neutral() {
        let mut props = CoinProps::default();
        let (mut w, t0) = settled(&props);
        w.press(&props, PxPoint::new(120.0, 70.0), t0);
        props.can_click = false;
        w.sync(&props, t0);

        let views = w.view(&props, t0 + Duration::from_millis(50));
        assert_eq!(views.len(), 2);
        match &views[0] {
            CoinView::Clickable { tilt, numbers, .. } => {
                assert!(tilt.is_neutral());
                assert!(numbers.is_empty());
            }
            other => panic!("expected exiting coin, got {:?}", other),
        }
        match &views[1] {
            CoinView::Cooldown { label, .. } => assert_eq!(label, "nothing"),
            other => panic!("expected cooldown view, got {:?}", other),
        }
    }

    #[test]
    fn test_clickable_view_carries_modifiers() {
        let props = CoinProps {
            fun_mode: true,
            sleeping: true,
            caption: Some("tap me".into()),
            ..CoinProps::default()
        };
        let now = Instant::now();
        let w = measured(&props, now);
        let views = w.view(&props, now);
        match &views[0] {
            CoinView::Clickable {
                fun,
                dimmed,
                caption,
                ..
            } => {
                assert!(*fun);
                assert!(*dimmed);
                assert_eq!(*caption, Some("tap me"));
            }
            other => panic!("expected clickable view, got {:?}", other),
        }
    }

    #[test]
    fn test_unmount_cancels_removals() {
        let props = CoinProps::default();
        let (mut w, now) = settled(&props);
        w.press(&props, PxPoint::new(100.0, 100.0), now);
        w.unmount();
        assert_eq!(w.numbers().pending_removals(), 0);
        assert!(w.numbers().is_empty());
    }
}
