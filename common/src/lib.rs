// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Approximate trigonometry and a 2D vector type for per-frame simulation code.
//!
//! All functions are pure and allocation free, so they can be called from any thread.

mod math;

pub use math::*;

// Re-export commonly-used third party crates.
pub use {glam, rand, serde};
