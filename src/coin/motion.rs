//! Easing curves and the enter/exit motion profiles of the two views.

use std::time::Duration;

/// CSS-style cubic bezier timing curve through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    /// Snappy curve with a hint of overshoot used by the coin fade.
    pub const COIN: CubicBezier = CubicBezier::new(0.0, 0.71, 0.2, 1.01);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Eased value for linear progress `x` in `[0, 1]`.
    pub fn solve(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }

        // Newton first, bisection if the slope flattens out.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return Self::sample(self.y1, self.y2, t);
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

pub fn ease_out(t: f64) -> f64 {
    CubicBezier::EASE_OUT.solve(t)
}

/// Damped spring moving from 0 to 1 with unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub damping: f64,
    pub stiffness: f64,
    pub rest_delta: f64,
}

impl Spring {
    pub const COIN: Spring = Spring {
        damping: 10.0,
        stiffness: 100.0,
        rest_delta: 0.001,
    };

    fn omega(&self) -> f64 {
        self.stiffness.sqrt()
    }

    fn zeta(&self) -> f64 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Position at `t` seconds. May overshoot past 1 when underdamped.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.omega();
        let zeta = self.zeta();
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta == 1.0 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the spring stays within `rest_delta` of 1.
    pub fn settle_time(&self) -> Duration {
        let w0 = self.omega();
        let zeta = self.zeta();
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let amplitude = (1.0 + (zeta * w0 / wd).powi(2)).sqrt();
            let secs = (amplitude / self.rest_delta).ln() / (zeta * w0);
            return Duration::from_secs_f64(secs.max(0.0));
        }
        // Non-oscillating: the first time inside the band is final.
        let mut ms = 0u64;
        while ms < 10_000 && (1.0 - self.position(ms as f64 / 1000.0)).abs() >= self.rest_delta {
            ms += 1;
        }
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Bezier(CubicBezier),
    Spring(Spring),
}

/// One animated property moving from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    /// Springs run for their own settle time and ignore `duration`.
    pub fn length(&self) -> Duration {
        match self.easing {
            Easing::Bezier(_) => self.duration,
            Easing::Spring(spring) => spring.settle_time(),
        }
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let progress = match self.easing {
            Easing::Bezier(curve) => {
                let len = self.duration.as_secs_f64();
                if len <= 0.0 {
                    1.0
                } else {
                    curve.solve(elapsed.as_secs_f64() / len)
                }
            }
            Easing::Spring(spring) => {
                if elapsed >= spring.settle_time() {
                    1.0
                } else {
                    spring.position(elapsed.as_secs_f64())
                }
            }
        };
        if progress == 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * progress
    }
}

/// Opacity and scale of a view at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub opacity: f64,
    pub scale: f64,
}

/// How a view appears and disappears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub enter_opacity: Tween,
    pub enter_scale: Tween,
    pub exit_opacity: Tween,
    pub exit_scale: Tween,
}

impl Appearance {
    pub fn coin() -> Self {
        let fade = Duration::from_millis(300);
        let curve = Easing::Bezier(CubicBezier::COIN);
        let spring = Easing::Spring(Spring::COIN);
        Self {
            enter_opacity: Tween { from: 0.0, to: 1.0, duration: fade, easing: curve },
            enter_scale: Tween { from: 0.0, to: 1.0, duration: fade, easing: spring },
            exit_opacity: Tween { from: 1.0, to: 0.0, duration: fade, easing: curve },
            exit_scale: Tween { from: 1.0, to: 0.0, duration: fade, easing: spring },
        }
    }

    pub fn cooldown() -> Self {
        let fade = Duration::from_millis(700);
        let curve = Easing::Bezier(CubicBezier::EASE_OUT);
        Self {
            enter_opacity: Tween { from: 0.0, to: 1.0, duration: fade, easing: curve },
            enter_scale: Tween { from: 0.7, to: 1.0, duration: fade, easing: curve },
            exit_opacity: Tween { from: 1.0, to: 0.0, duration: fade, easing: curve },
            exit_scale: Tween { from: 1.0, to: 0.5, duration: fade, easing: curve },
        }
    }

    pub fn enter_length(&self) -> Duration {
        self.enter_opacity.length().max(self.enter_scale.length())
    }

    pub fn exit_length(&self) -> Duration {
        self.exit_opacity.length().max(self.exit_scale.length())
    }

    pub fn entering(&self, elapsed: Duration) -> Visual {
        Visual {
            opacity: self.enter_opacity.value_at(elapsed).clamp(0.0, 1.0),
            scale: self.enter_scale.value_at(elapsed).max(0.0),
        }
    }

    pub fn exiting(&self, elapsed: Duration) -> Visual {
        Visual {
            opacity: self.exit_opacity.value_at(elapsed).clamp(0.0, 1.0),
            scale: self.exit_scale.value_at(elapsed).max(0.0),
        }
    }
}
