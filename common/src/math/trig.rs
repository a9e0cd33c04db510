// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::fast_trig::{arctangent2, cosine, sine};

/// Source of sin/cos/atan2, so each call site can pick speed or precision.
pub trait Trig {
    fn sin(radians: f32) -> f32;
    fn cos(radians: f32) -> f32;
    fn atan2(y: f32, x: f32) -> f32;

    /// Returns `(sin, cos)`.
    #[inline]
    fn sin_cos(radians: f32) -> (f32, f32) {
        (Self::sin(radians), Self::cos(radians))
    }
}

/// Polynomial approximations from [`super::fast_trig`].
#[derive(Copy, Clone, Debug)]
pub enum Approximate {}

/// [`f32::sin`], [`f32::cos`] and [`f32::atan2`]. Use wherever results feed the renderer directly.
#[derive(Copy, Clone, Debug)]
pub enum Exact {}

impl Trig for Approximate {
    #[inline]
    fn sin(radians: f32) -> f32 {
        sine(radians)
    }

    #[inline]
    fn cos(radians: f32) -> f32 {
        cosine(radians)
    }

    #[inline]
    fn atan2(y: f32, x: f32) -> f32 {
        arctangent2(y, x)
    }
}

impl Trig for Exact {
    #[inline]
    fn sin(radians: f32) -> f32 {
        radians.sin()
    }

    #[inline]
    fn cos(radians: f32) -> f32 {
        radians.cos()
    }

    #[inline]
    fn atan2(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }

    #[inline]
    fn sin_cos(radians: f32) -> (f32, f32) {
        radians.sin_cos()
    }
}

/// Backend of [`super::Vector2::rotate`].
#[cfg(not(feature = "approximate_rotation"))]
pub type RotationTrig = Exact;

/// Backend of [`super::Vector2::rotate`].
#[cfg(feature = "approximate_rotation")]
pub type RotationTrig = Approximate;
