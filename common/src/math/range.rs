// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Linearly interpolates (and possibly extrapolates) from start to end, based on amount.
/// Returns exactly `start` for an amount of 0 and exactly `end` for an amount of 1.
/// It uses FMA instruction if available.
#[inline]
pub fn lerp(start: f32, end: f32, amount: f32) -> f32 {
    let mul_add = if cfg!(target_feature = "fma") {
        f32::mul_add
    } else {
        |a, b, c| a * b + c
    };
    mul_add(amount, end, mul_add(-amount, start, start))
}

/// Eases `t` so that it has zero slope at 0 and 1. Not clamped.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
