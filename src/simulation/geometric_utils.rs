//! Numeric and geometric helpers for range clamping and planar distances.

/// Clamps `value` into `[min, max]`.
pub fn clip(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Wraps `value` cyclically into `[min, max)`.
///
/// # Examples
///
/// ```
/// use plankton::simulation::geometric_utils::cycle;
///
/// assert!((cycle(1.25, 0.0, 1.0) - 0.25).abs() < 1e-6);
/// assert!((cycle(-0.25, 0.0, 1.0) - 0.75).abs() < 1e-6);
/// ```
pub fn cycle(value: f32, min: f32, max: f32) -> f32 {
    let wrapped = (value - min).rem_euclid(max - min) + min;
    // rem_euclid may round up to the modulus for tiny negative inputs
    if wrapped >= max { min } else { wrapped }
}

/// Squared Euclidean distance between two points.
pub fn distance_sq(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)
}

/// Angle of the vector pointing from `from` to `to`.
pub fn heading_to(from: (f32, f32), to: (f32, f32)) -> f32 {
    (to.1 - from.1).atan2(to.0 - from.0)
}
