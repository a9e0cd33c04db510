// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::fast_trig::{
    absolute_value, arctangent2, cosine, degrees_to_radians, modulo, radians_to_degrees,
    reduce_angle, sine, FRAC_PI_2, PI,
};
use super::Vector2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// An angle in radians, increasing counter-clockwise from +x. Convert to [`Degrees`] explicitly
/// with [`Radians::to_degrees`] or [`From`].
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f32);

/// An angle in degrees, increasing counter-clockwise from +x. Convert to [`Radians`] explicitly
/// with [`Degrees::to_radians`] or [`From`].
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Radians {
    pub const ZERO: Self = Self(0.0);
    pub const FRAC_PI_2: Self = Self(FRAC_PI_2);
    pub const PI: Self = Self(PI);

    pub fn new(radians: f32) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(radians_to_degrees(self.0))
    }

    /// Equivalent angle in `[-PI, PI)`.
    #[inline]
    pub fn wrapped(self) -> Self {
        Self(reduce_angle(self.0))
    }

    /// Approximate, see [`sine`].
    #[inline]
    pub fn sin(self) -> f32 {
        sine(self.0)
    }

    /// Approximate, see [`cosine`].
    #[inline]
    pub fn cos(self) -> f32 {
        cosine(self.0)
    }

    /// Unit vector pointing along this heading. Same as [`Vector2::direction_from_angle`].
    #[inline]
    pub fn to_vector(self) -> Vector2 {
        Vector2::direction_from_angle(self)
    }

    /// Heading of `vector`, using the approximate [`arctangent2`]. The zero vector has heading
    /// zero.
    #[inline]
    pub fn from_vector(vector: Vector2) -> Self {
        Self(arctangent2(vector.y, vector.x))
    }

    pub fn abs(self) -> Self {
        Self(absolute_value(self.0))
    }

    /// Clamps to `[-max, max]`. A negative `max` leaves the angle unchanged.
    pub fn clamp_magnitude(self, max: Self) -> Self {
        if max.0 >= 0.0 {
            Self(self.0.clamp(-max.0, max.0))
        } else {
            self
        }
    }

    /// Interpolates along the shorter arc. The result is not wrapped.
    pub fn lerp(self, other: Self, value: f32) -> Self {
        self + (other - self).wrapped() * value
    }
}

impl Degrees {
    pub const ZERO: Self = Self(0.0);
    pub const HALF_TURN: Self = Self(180.0);
    pub const FULL_TURN: Self = Self(360.0);

    pub fn new(degrees: f32) -> Self {
        Self(degrees)
    }

    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(degrees_to_radians(self.0))
    }

    /// Equivalent angle in `[-180, 180)`.
    #[inline]
    pub fn wrapped(self) -> Self {
        Self(modulo(self.0 + 180.0, 360.0) - 180.0)
    }
}

impl From<Degrees> for Radians {
    fn from(degrees: Degrees) -> Self {
        degrees.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(radians: Radians) -> Self {
        radians.to_degrees()
    }
}

impl From<Radians> for Vector2 {
    fn from(radians: Radians) -> Self {
        radians.to_vector()
    }
}

impl From<Vector2> for Radians {
    fn from(vector: Vector2) -> Self {
        Self::from_vector(vector)
    }
}

macro_rules! impl_angle_ops {
    ($name:ident, $unit:literal) => {
        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self::Output {
                Self(self.0 + other.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: Self) {
                self.0 += other.0;
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, other: Self) -> Self::Output {
                Self(self.0 - other.0)
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, other: Self) {
                self.0 -= other.0;
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, other: f32) -> Self::Output {
                Self(self.0 * other)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("{} ", $unit), self.0)
            }
        }
    };
}

impl_angle_ops!(Radians, "radians");
impl_angle_ops!(Degrees, "degrees");

impl Distribution<Radians> for rand::distributions::Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Radians {
        Radians(rng.gen_range(-PI..PI))
    }
}
