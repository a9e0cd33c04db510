// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod angle;
mod error;
mod fast_trig;
mod range;
mod trig;
mod vector2;

pub use self::angle::{Degrees, Radians};
pub use self::error::MathError;
pub use self::fast_trig::{
    absolute_value, arctangent, arctangent2, cosine, degrees_to_radians, factorial,
    integer_power, maximum, minimum, radians_to_degrees, reduce_angle, sine, FRAC_PI_2, PI, TAU,
};
pub use self::range::{lerp, smoothstep};
pub use self::trig::{Approximate, Exact, RotationTrig, Trig};
pub use self::vector2::Vector2;
