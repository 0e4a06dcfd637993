//! Angle and time normalization helpers plus float shims.
//!
//! Every wrapper uses floor-based modulo so negative inputs land in the same
//! canonical range as positive ones. Trigonometric functions dispatch to the
//! inherent `f64` methods with `std` and to `libm` otherwise.

#![allow(clippy::many_single_char_names)]

/// Degrees to radians.
#[inline]
#[must_use]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Radians to degrees.
#[inline]
#[must_use]
pub fn rad2deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps an angle into [0, 360).
#[must_use]
pub fn limit_degrees(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let limited = 360.0 * (turns - floor(turns));
    // tiny negative inputs round up to exactly 360
    if limited < 0.0 {
        limited + 360.0
    } else if limited >= 360.0 {
        limited - 360.0
    } else {
        limited
    }
}

/// Wraps an angle into (-180, 180].
#[must_use]
pub fn limit_degrees_180pm(degrees: f64) -> f64 {
    let limited = limit_degrees(degrees);
    if limited > 180.0 {
        limited - 360.0
    } else {
        limited
    }
}

/// Wraps an angle into [0, 180).
#[must_use]
pub fn limit_degrees_180(degrees: f64) -> f64 {
    let half_turns = degrees / 180.0;
    let limited = 180.0 * (half_turns - floor(half_turns));
    if limited < 0.0 {
        limited + 180.0
    } else if limited >= 180.0 {
        limited - 180.0
    } else {
        limited
    }
}

/// Wraps a value into [0, 1).
#[must_use]
pub fn limit_zero_to_one(value: f64) -> f64 {
    let limited = value - floor(value);
    if limited < 0.0 {
        limited + 1.0
    } else if limited >= 1.0 {
        limited - 1.0
    } else {
        limited
    }
}

/// Folds an equation-of-time value (minutes) back into [-20, 20] by one day.
#[must_use]
pub fn limit_minutes(minutes: f64) -> f64 {
    if minutes < -20.0 {
        minutes + 1440.0
    } else if minutes > 20.0 {
        minutes - 1440.0
    } else {
        minutes
    }
}

/// Converts a UT day fraction into a local clock hour in [0, 24).
///
/// `timezone` is the local offset from UTC in hours (negative west).
#[must_use]
pub fn dayfrac_to_local_hour(dayfrac: f64, timezone: f64) -> f64 {
    24.0 * limit_zero_to_one(dayfrac + timezone / 24.0)
}

/// Evaluates `((a·x + b)·x + c)·x + d`.
#[must_use]
pub fn third_order_polynomial(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
    ((a * x + b) * x + c) * x + d
}

/// Evaluates a polynomial with Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
#[must_use]
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &coeff| acc * x + coeff)
}

#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

#[inline]
pub(crate) fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

#[inline]
pub(crate) fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

#[inline]
pub(crate) fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

#[inline]
pub(crate) fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

#[inline]
pub(crate) fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

#[inline]
pub(crate) fn exp(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.exp();

    #[cfg(not(feature = "std"))]
    return libm::exp(x);
}

#[inline]
pub(crate) fn powf(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.powf(y);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, y);
}

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

#[inline]
pub(crate) fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[inline]
pub(crate) fn trunc(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.trunc();

    #[cfg(not(feature = "std"))]
    return libm::trunc(x);
}
