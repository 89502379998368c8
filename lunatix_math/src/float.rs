//! Tolerance-based scalar comparison.
//!
//! Coordinates are plain `f32`. Equality between two of them is never a bit
//! comparison: every equality test in the physics stack goes through
//! [`float_eq`], a relative-difference check against machine epsilon.

/// The zero scalar.
pub const FNIL: f32 = 0.0;

/// Relative comparison of `a` and `b`.
///
/// Values near zero (or whose difference is subnormal) are compared with an
/// absolute bound of `epsilon * f32::MIN_POSITIVE`, everything else with the
/// difference relative to `|a| + |b|`.
pub fn approximately_equal(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }

    let abs_a = a.abs();
    let abs_b = b.abs();
    let diff = (a - b).abs();

    if a == 0.0 || b == 0.0 || diff < f32::MIN_POSITIVE {
        diff < epsilon * f32::MIN_POSITIVE
    } else {
        diff / (abs_a + abs_b).min(f32::MAX) < epsilon
    }
}

/// [`approximately_equal`] with `f32::EPSILON`.
#[inline]
pub fn float_eq(a: f32, b: f32) -> bool {
    approximately_equal(a, b, f32::EPSILON)
}

#[inline]
pub fn is_zero(a: f32) -> bool {
    float_eq(a, FNIL)
}
