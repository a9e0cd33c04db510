// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Cheap scalar trigonometry for code that runs thousands of times per frame.
//!
//! Nothing here is bit-exact with [`f32::sin`], [`f32::cos`] or [`f32::atan2`]. Peak absolute
//! error of [`sine`]/[`cosine`] is about 0.001 and of [`arctangent2`] about 0.00001 radians.

/// Fixed so results don't depend on the platform's constant.
#[allow(clippy::excessive_precision)]
pub const PI: f32 = 3.14159265358979323846;
pub const TAU: f32 = 2.0 * PI;
pub const FRAC_PI_2: f32 = 0.5 * PI;

/// Converts degrees to radians. Opposite of [`radians_to_degrees`].
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees. Opposite of [`degrees_to_radians`].
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Remainder with the sign of `modulus`, unlike `%` which takes the sign of `value`.
#[inline]
pub(crate) fn modulo(value: f32, modulus: f32) -> f32 {
    ((value % modulus) + modulus) % modulus
}

/// Maps any finite angle into `[-PI, PI)`.
#[inline]
pub fn reduce_angle(radians: f32) -> f32 {
    modulo(radians + PI, TAU) - PI
}

/// Parabolic approximation of [`f32::sin`].
#[allow(clippy::excessive_precision)]
#[inline]
pub fn sine(radians: f32) -> f32 {
    // 4 / PI and 4 / PI^2.
    const B: f32 = 1.27323954;
    const C: f32 = 0.405284735;
    const P: f32 = 0.225;

    let r = reduce_angle(radians);
    let s = if r < 0.0 {
        B * r + C * r * r
    } else {
        B * r - C * r * r
    };
    P * (s * absolute_value(s) - s) + s
}

/// Approximation of [`f32::cos`], defined as `sine(radians + PI / 2)`.
#[inline]
pub fn cosine(radians: f32) -> f32 {
    sine(radians + FRAC_PI_2)
}

/// Polynomial approximation of [`f32::atan`].
#[allow(clippy::excessive_precision)]
pub fn arctangent(z: f32) -> f32 {
    let a = absolute_value(z);
    // The polynomial is only accurate on [0, 1].
    let inverted = a > 1.0;
    let w = if inverted { 1.0 / a } else { a };
    let w2 = w * w;
    let p = ((((0.0208351 * w2 - 0.0851330) * w2 + 0.1801410) * w2 - 0.3302995) * w2 + 0.9998660)
        * w;
    let r = if inverted { FRAC_PI_2 - p } else { p };
    if z < 0.0 {
        -r
    } else {
        r
    }
}

/// Four quadrant replacement for [`f32::atan2`], in `[-PI, PI]`. Like [`f32::atan2`], a tiny
/// negative `y` with negative `x` rounds to exactly `-PI`.
///
/// `arctangent2(0.0, 0.0)` is `0.0` rather than undefined, and `NaN` in either argument
/// yields `NaN`.
pub fn arctangent2(y: f32, x: f32) -> f32 {
    if x.is_nan() || y.is_nan() {
        return f32::NAN;
    }
    if x > 0.0 {
        arctangent(y / x)
    } else if x < 0.0 {
        if y >= 0.0 {
            arctangent(y / x) + PI
        } else {
            arctangent(y / x) - PI
        }
    } else if y > 0.0 {
        FRAC_PI_2
    } else if y < 0.0 {
        -FRAC_PI_2
    } else {
        log::trace!("arctangent2 of origin, returning 0");
        0.0
    }
}

#[inline]
pub fn absolute_value(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

/// Returns `b` if the arguments compare equal.
#[inline]
pub fn minimum<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns `b` if the arguments compare equal.
#[inline]
pub fn maximum<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// `base` multiplied by itself `exponent` times. Any base to the power of zero is one.
pub fn integer_power(base: f32, exponent: u32) -> f32 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// `1 * 2 * ... * n`. Zero and negative `n` give `1`, and anything past `20!` saturates at
/// [`u64::MAX`].
pub fn factorial(n: i32) -> u64 {
    let mut result = 1u64;
    for i in 1..=n {
        result = result.saturating_mul(i as u64);
    }
    result
}
