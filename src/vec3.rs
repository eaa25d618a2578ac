//! Three-component vector math.
//!
//! `Vec3` is used for points, directions and colors alike. None of the
//! operations validate their input: NaN and infinities propagate through
//! the arithmetic untouched.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use crate::random;

/// Point in 3D space.
pub type Point3 = Vec3;

/// Linear RGB color.
pub type Color = Vec3;

/// Three-component `f64` vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// First component (also red)
    pub x: f64,
    /// Second component (also green)
    pub y: f64,
    /// Third component (also blue)
    pub z: f64,
}

impl Vec3 {
    /// All components zero.
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    /// All components one.
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Red channel when used as a color.
    #[inline]
    pub fn r(&self) -> f64 {
        self.x
    }

    /// Green channel when used as a color.
    #[inline]
    pub fn g(&self) -> f64 {
        self.y
    }

    /// Blue channel when used as a color.
    #[inline]
    pub fn b(&self) -> f64 {
        self.z
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length, avoids the square root when only comparing.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// True if every component is within 1e-8 of zero.
    ///
    /// Used to catch degenerate scatter directions.
    pub fn near_zero(&self) -> bool {
        const S: f64 = 1e-8;
        self.x.abs() < S && self.y.abs() < S && self.z.abs() < S
    }

    /// Random vector with each component in [0, 1).
    pub fn random() -> Self {
        Self::new(random::random_f64(), random::random_f64(), random::random_f64())
    }

    /// Random vector with each component in [min, max).
    pub fn random_range(min: f64, max: f64) -> Self {
        Self::new(
            random::random_f64_range(min, max),
            random::random_f64_range(min, max),
            random::random_f64_range(min, max),
        )
    }
}

/// Dot product.
#[inline]
pub fn dot(u: Vec3, v: Vec3) -> f64 {
    u.x * v.x + u.y * v.y + u.z * v.z
}

/// Cross product.
#[inline]
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    Vec3::new(
        u.y * v.z - u.z * v.y,
        u.z * v.x - u.x * v.z,
        u.x * v.y - u.y * v.x,
    )
}

/// Scale `v` to unit length. A zero vector yields NaN components.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

#[inline]
fn is_unit(v: Vec3) -> bool {
    (v.length_squared() - 1.0).abs() < 1e-6
}

/// Mirror `v` about the unit normal `n`.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    debug_assert!(is_unit(n), "reflect normal is not unit length: {n:?}");
    v - 2.0 * dot(v, n) * n
}

/// Refract the unit direction `uv` through a surface with unit normal `n`
/// using Snell's law.
///
/// `etai_over_etat` is the ratio of refractive indices across the surface.
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    debug_assert!(is_unit(uv), "refract direction is not unit length: {uv:?}");
    debug_assert!(is_unit(n), "refract normal is not unit length: {n:?}");

    // Rounding can push the cosine past 1.0 and the radicand below zero
    let cos_theta = dot(-uv, n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index {i} out of range"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index {i} out of range"),
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, v: Vec3) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, t: f64) {
        self.x *= t;
        self.y *= t;
        self.z *= t;
    }
}

impl DivAssign<f64> for Vec3 {
    #[inline]
    fn div_assign(&mut self, t: f64) {
        *self *= 1.0 / t;
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, v: Vec3) -> Vec3 {
        Vec3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, v: Vec3) -> Vec3 {
        Vec3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

// Component-wise, used for attenuating colors
impl Mul for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(self.x * v.x, self.y * v.y, self.z * v.z)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(self * v.x, self * v.y, self * v.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, t: f64) -> Vec3 {
        t * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, t: f64) -> Vec3 {
        (1.0 / t) * self
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
