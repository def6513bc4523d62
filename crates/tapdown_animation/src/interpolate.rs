//! Interpolation helpers
//!
//! [`Interpolate`] covers the value types the widget animates or blends;
//! [`map_range`] is the domain→range mapping used for derived presentation
//! values (a [0, 1] progress driving a [0, 180] degree rotation).

use tapdown_core::{Color, Vec2};

/// Values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Approximate equality, for settling checks
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Vec2 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

/// Map `t` from the `domain` interval onto the `range` interval
///
/// Linear and unclamped: values outside the domain extrapolate, so a spring
/// overshooting 1.0 briefly rotates a disclosure icon past its end angle,
/// matching the physical motion.
pub fn map_range(t: f32, domain: (f32, f32), range: (f32, f32)) -> f32 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    r0 + (t - d0) / (d1 - d0) * (r1 - r0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_lerp() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_vec2_lerp() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 20.0);
        let mid = a.lerp(&b, 0.5);

        assert!(mid.approx_eq(&Vec2::new(5.0, 10.0), 1e-6));
    }

    #[test]
    fn test_color_lerp() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!(mid.approx_eq(&Color::rgb(0.5, 0.5, 0.5), 1e-6));
    }

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(0.0, (0.0, 1.0), (0.0, 180.0)), 0.0);
        assert_eq!(map_range(1.0, (0.0, 1.0), (0.0, 180.0)), 180.0);
        assert_eq!(map_range(0.5, (0.0, 1.0), (0.0, 180.0)), 90.0);
    }

    #[test]
    fn test_map_range_extrapolates() {
        // Overshoot keeps moving past the end of the range
        assert!((map_range(1.1, (0.0, 1.0), (0.0, 180.0)) - 198.0).abs() < 1e-4);
    }
}
