//! Distance kernels for the flat vector index.
//!
//! With the `simd` feature (default) the hot loops run on `wide::f32x8` lanes; the
//! scalar versions are used otherwise and for the tail of every vector. Both paths
//! are deterministic for a given build, which the index relies on for stable ranks.

#[cfg(feature = "simd")]
use wide::f32x8;

#[cfg(feature = "simd")]
const LANES: usize = 8;

/// Squared Euclidean distance `sum((a[i] - b[i])^2)`.
///
/// Both slices must have the same length; the index checks dimensions before
/// calling in, so a mismatch here is a bug and only the common prefix is compared.
#[must_use]
pub fn l2_distance_squared(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    #[cfg(feature = "simd")]
    {
        l2_distance_squared_simd(a, b)
    }
    #[cfg(not(feature = "simd"))]
    {
        l2_distance_squared_scalar(a, b)
    }
}

/// Dot product of two equal-length vectors.
#[must_use]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Scales `v` to unit length in place. Zero vectors are left untouched.
///
/// The index never normalizes; callers that want cosine ordering normalize before
/// ingestion so squared L2 becomes `2 - 2 * cos`.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = dot(v, v).sqrt();
    if norm > 0.0 && norm.is_finite() {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

pub(crate) fn l2_distance_squared_scalar(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(feature = "simd")]
#[allow(clippy::assign_op_pattern)]
fn l2_distance_squared_simd(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    let body = len - len % LANES;
    let mut acc = f32x8::ZERO;
    let mut lane_a = [0.0_f32; LANES];
    let mut lane_b = [0.0_f32; LANES];
    for offset in (0..body).step_by(LANES) {
        lane_a.copy_from_slice(&a[offset..offset + LANES]);
        lane_b.copy_from_slice(&b[offset..offset + LANES]);
        let diff = f32x8::from(lane_a) - f32x8::from(lane_b);
        acc = acc + diff * diff;
    }
    let head: f32 = acc.to_array().iter().sum();
    head + l2_distance_squared_scalar(&a[body..len], &b[body..len])
}
