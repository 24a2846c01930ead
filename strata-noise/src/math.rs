//! Interpolation kernels and small math helpers shared by the noise
//! primitives and the module graph.
//!
//! The interpolation functions reproduce a specific evaluation order so that
//! results are bit-identical across platforms; do not rearrange the
//! arithmetic.

/// The square root of 3.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Conversion factor from degrees to radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Conversion factor from radians to degrees.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Linear interpolation between two values.
///
/// An alpha of 0.0 returns `n0`, an alpha of 1.0 returns `n1`; values outside
/// `[0, 1]` extrapolate.
#[inline]
#[must_use]
pub fn linear_interp(n0: f64, n1: f64, a: f64) -> f64 {
    (1.0 - a) * n0 + a * n1
}

/// Cubic interpolation between `n1` and `n2`, shaped by the neighbouring
/// values `n0` and `n3`.
///
/// Evaluates `p·a³ + q·a² + r·a + s` with
/// `p = (n3 − n2) − (n0 − n1)`, `q = (n0 − n1) − p`, `r = n2 − n0`, `s = n1`.
#[inline]
#[must_use]
pub fn cubic_interp(n0: f64, n1: f64, n2: f64, n3: f64, a: f64) -> f64 {
    let a2 = a * a;
    let a3 = a2 * a;
    let p = (n3 - n2) - (n0 - n1);
    let q = (n0 - n1) - p;
    let r = n2 - n0;
    let s = n1;
    p * a3 + q * a2 + r * a + s
}

/// Cubic S-curve `a²(3 − 2a)`.
///
/// First derivative is zero at `a = 0` and `a = 1`.
#[inline]
#[must_use]
pub fn s_curve3(a: f64) -> f64 {
    a * a * (3.0 - 2.0 * a)
}

/// Quintic S-curve `6a⁵ − 15a⁴ + 10a³`.
///
/// First and second derivatives are zero at `a = 0` and `a = 1`.
#[inline]
#[must_use]
pub fn s_curve5(a: f64) -> f64 {
    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    6.0 * a5 - 15.0 * a4 + 10.0 * a3
}

/// Clamps `value` onto `[lower_bound, upper_bound]`.
///
/// `lower_bound` must not exceed `upper_bound`.
#[inline]
#[must_use]
pub fn clamp(value: f64, lower_bound: f64, upper_bound: f64) -> f64 {
    debug_assert!(lower_bound <= upper_bound);
    if value < lower_bound {
        lower_bound
    } else if value > upper_bound {
        upper_bound
    } else {
        value
    }
}

/// Floor function returning `i32`.
///
/// Truncates toward negative infinity, unlike an `as i32` cast which
/// truncates toward zero.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let i = value as i32;
    if value < f64::from(i) { i - 1 } else { i }
}

/// Converts a latitude/longitude pair, in degrees, to a position on the unit
/// sphere.
///
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
#[inline]
#[must_use]
pub fn lat_lon_to_xyz(lat: f64, lon: f64) -> (f64, f64, f64) {
    debug_assert!((-90.0..=90.0).contains(&lat));
    debug_assert!((-180.0..=180.0).contains(&lon));

    let lat_rad = lat * DEG_TO_RAD;
    let lon_rad = lon * DEG_TO_RAD;
    let r = lat_rad.cos();
    (r * lon_rad.cos(), lat_rad.sin(), r * lon_rad.sin())
}
