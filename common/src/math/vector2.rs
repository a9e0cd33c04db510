// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::fast_trig::absolute_value;
use super::range::{lerp, smoothstep};
use super::trig::{Approximate, RotationTrig, Trig};
use super::{Degrees, MathError, Radians};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A position, direction or displacement in 2D. Every operation returns a new value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Divides each component by `scalar`, failing instead of producing infinities if it is zero.
    #[inline]
    pub fn divide(self, scalar: f32) -> Result<Self, MathError> {
        if scalar == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    /// Exact length, not approximated.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction, or [`Vector2::ZERO`] for the zero vector.
    pub fn normalize(self) -> Self {
        self.divide(self.magnitude()).unwrap_or_else(|_| {
            log::trace!("normalizing zero vector, returning zero");
            Self::ZERO
        })
    }

    /// Unclamped, so `t` outside `[0, 1]` extrapolates. Exact at `t = 0` and `t = 1`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        Self::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
    }

    /// Like [`Vector2::lerp`] but eased with [`smoothstep`], for zero velocity at both ends.
    #[inline]
    pub fn smooth_lerp(start: Self, end: Self, t: f32) -> Self {
        Self::lerp(start, end, smoothstep(t))
    }

    /// Rotates counter-clockwise with the [`RotationTrig`] backend, exact unless the
    /// `approximate_rotation` feature is enabled.
    #[inline]
    pub fn rotate(self, angle: Degrees) -> Self {
        self.rotate_with::<RotationTrig>(angle)
    }

    /// Rotates counter-clockwise with the given [`Trig`] backend.
    pub fn rotate_with<T: Trig>(self, angle: Degrees) -> Self {
        let (sin, cos) = T::sin_cos(angle.to_radians().0);
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn distance(self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        absolute_value(dx * dx + dy * dy).sqrt()
    }

    /// Unit vector for `heading`, using the approximate trig functions.
    #[inline]
    pub fn direction_from_angle(heading: Radians) -> Self {
        Self::direction_from_angle_with::<Approximate>(heading)
    }

    #[inline]
    pub fn direction_from_angle_with<T: Trig>(heading: Radians) -> Self {
        let (sin, cos) = T::sin_cos(heading.0);
        Self::new(cos, sin)
    }

    /// A force of `magnitude` pointing along `angle`.
    #[inline]
    pub fn apply_force(angle: Radians, magnitude: f32) -> Self {
        Self::direction_from_angle(angle) * magnitude
    }

    /// Heading from `from` towards `to`. Coincident points have heading zero.
    #[inline]
    pub fn angle_between_points(from: Self, to: Self) -> Radians {
        Radians::from_vector(to - from)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, vector: Vector2) -> Vector2 {
        vector * self
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Samples a unit direction.
impl Distribution<Vector2> for rand::distributions::Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2 {
        rng.gen::<Radians>().to_vector()
    }
}
