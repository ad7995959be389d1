//! Spherical linear interpolation (slerp) between geo points.
//!
//! Intermediate points follow the shorter great-circle arc between the endpoints. For points closer than
//! [`LINEAR_FALLBACK_ANGLE`] the unit vectors are interpolated linearly and projected back onto the sphere.

use nalgebra::Vector3;

use crate::error::GeoError;
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::impls::projection::{forward, inverse};
use crate::geo::traits::point::GeoPoint;

/// Angular separation (radians) under which interpolation falls back to the normalized linear one.
pub const LINEAR_FALLBACK_ANGLE: f64 = 0.001;

/// Length of the component of `b` orthogonal to `a` under which the points are treated as exactly antipodal.
const ANTIPODAL_EPSILON: f64 = 1e-10;

/// Returns the point at fraction `t` of the great-circle arc from `a` to `b`.
///
/// `interpolate(a, b, 0.0)` is `a` and `interpolate(a, b, 1.0)` is `b` up to the floating point precision.
/// For antipodal points every great circle through them is the shortest, the one passing through the north
/// pole side of `a` is used (or through `0°E` if `a` is a pole).
pub fn interpolate(
    a: &impl GeoPoint<Num = f64>,
    b: &impl GeoPoint<Num = f64>,
    t: f64,
) -> Result<GeoPoint2d, GeoError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(GeoError::InvalidInterpolation(t));
    }

    let a_vec = forward(a, 1.0)?.coords;
    let b_vec = forward(b, 1.0)?.coords;

    let dot = a_vec.dot(&b_vec);
    // `acos` of the dot product loses precision near both ends of the range, `atan2` does not.
    let theta = a_vec.cross(&b_vec).norm().atan2(dot);

    let v = if theta < LINEAR_FALLBACK_ANGLE {
        let linear = a_vec * (1.0 - t) + b_vec * t;
        // Both endpoints are unit vectors less than 0.001 rad apart, so the chord never collapses to zero.
        linear.normalize()
    } else {
        let ortho = b_vec - a_vec * dot;
        let axis = if ortho.norm() > ANTIPODAL_EPSILON {
            ortho.normalize()
        } else {
            antipodal_axis(&a_vec)
        };

        let angle = t * theta;
        a_vec * angle.cos() + axis * angle.sin()
    };

    Ok(to_geo(&v))
}

/// Unit vector orthogonal to `a`, pointing north along the meridian of `a`.
fn antipodal_axis(a: &Vector3<f64>) -> Vector3<f64> {
    let north = Vector3::z();
    let axis = north - a * a.dot(&north);
    if axis.norm() > ANTIPODAL_EPSILON {
        return axis.normalize();
    }

    let x = Vector3::x();
    (x - a * a.dot(&x)).normalize()
}

fn to_geo(v: &Vector3<f64>) -> GeoPoint2d {
    // `v` is on the unit sphere in every branch, so this is the same as asin(z) and atan2(y, x).
    inverse(&nalgebra::Point3::from(*v))
}

/// Same as [`interpolate`] but for a sequence of `count` evenly spaced parameters `t = i / (count - 1)`.
///
/// `count` must be at least 2, otherwise an empty vector is returned.
pub fn sample_arc(
    a: &impl GeoPoint<Num = f64>,
    b: &impl GeoPoint<Num = f64>,
    count: usize,
) -> Result<Vec<GeoPoint2d>, GeoError> {
    if count < 2 {
        return Ok(vec![]);
    }

    let last = (count - 1) as f64;
    (0..count)
        .map(|i| interpolate(a, b, i as f64 / last))
        .collect()
}
