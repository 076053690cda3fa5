//! Casting terminal cells onto the tilted coin face.

use crate::coin::tilt::Tilt;

/// Distance from the viewer to the screen plane, in pixels.
const PERSPECTIVE_PX: f64 = 800.0;
/// Direction towards the light: up, left and in front (y grows downward).
const LIGHT_DIR: [f64; 3] = [-0.35, -0.55, 1.0];

type Vec3 = [f64; 3];
type Mat3 = [Vec3; 3];

fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// `m * v`.
fn apply(m: &Mat3, v: &Vec3) -> Vec3 {
    m.map(|row| dot(&row, v))
}

fn transpose(m: &Mat3) -> Mat3 {
    std::array::from_fn(|i| std::array::from_fn(|j| m[j][i]))
}

/// `a * b`, so `b` acts first.
fn compose(a: &Mat3, b: &Mat3) -> Mat3 {
    let cols = transpose(b);
    a.map(|row| cols.map(|col| dot(&row, &col)))
}

fn rotation_x(degrees: f64) -> Mat3 {
    let (s, c) = degrees.to_radians().sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]
}

fn rotation_y(degrees: f64) -> Mat3 {
    let (s, c) = degrees.to_radians().sin_cos();
    [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]]
}

/// Lambert term with a small ambient floor.
fn light_intensity(normal: &Vec3) -> f64 {
    (dot(normal, &LIGHT_DIR) / dot(&LIGHT_DIR, &LIGHT_DIR).sqrt()).max(0.1)
}

/// Where a screen ray landed on the coin face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Distance from the face center, 1.0 at the rim.
    pub radius: f64,
    /// Position on the face along the light's screen direction, -1..1.
    pub toward_light: f64,
    pub intensity: f64,
}

/// The coin face transformed by a tilt and an extra presence scale.
#[derive(Debug, Clone)]
pub struct CoinFace {
    radius_px: f64,
    scale: f64,
    inverse: Mat3,
    normal: Vec3,
}

impl CoinFace {
    pub fn new(radius_px: f64, tilt: &Tilt, extra_scale: f64) -> Self {
        // CSS applies `rotateX(..) rotateY(..)` right to left.
        let rotation = compose(&rotation_x(tilt.rotate_x), &rotation_y(tilt.rotate_y));
        let normal = apply(&rotation, &[0.0, 0.0, 1.0]);
        let perspective = PERSPECTIVE_PX / (PERSPECTIVE_PX - tilt.depth_offset);
        Self {
            radius_px,
            scale: tilt.scale * extra_scale * perspective,
            inverse: transpose(&rotation),
            normal,
        }
    }

    /// Cast the screen point `(dx, dy)`, relative to the coin center, onto
    /// the face.
    pub fn hit(&self, dx: f64, dy: f64) -> Option<SurfaceHit> {
        if self.scale <= f64::EPSILON || self.radius_px <= 0.0 {
            return None;
        }
        let n = self.normal;
        if n[2].abs() < 1e-6 {
            return None;
        }
        let u = dx / self.scale;
        let v = dy / self.scale;
        let z = -(n[0] * u + n[1] * v) / n[2];
        let local = apply(&self.inverse, &[u, v, z]);
        let radius = (local[0] * local[0] + local[1] * local[1]).sqrt() / self.radius_px;
        if radius > 1.0 {
            return None;
        }
        let light_len = (LIGHT_DIR[0] * LIGHT_DIR[0] + LIGHT_DIR[1] * LIGHT_DIR[1]).sqrt();
        let toward_light =
            (local[0] * LIGHT_DIR[0] + local[1] * LIGHT_DIR[1]) / (light_len * self.radius_px);
        Some(SurfaceHit {
            radius,
            toward_light,
            intensity: light_intensity(&n),
        })
    }
}
