/*
 * Vector Math Module
 *
 * This module extends nannou's Vec2 with the operations the steering math
 * needs: a zero-guarded normalize, magnitude clamping, and heading
 * manipulation. Angles are measured in degrees everywhere in this crate;
 * conversion to radians happens only inside this module.
 */

use nannou::prelude::*;

pub trait Vec2Ext {
    fn normalized_or_zero(self) -> Vec2;
    fn truncated(self, max: f32) -> Vec2;
    fn with_heading(self, degrees: f32) -> Vec2;
    fn heading_degrees(self) -> f32;
}

impl Vec2Ext for Vec2 {
    // Unit vector, or the zero vector when the magnitude is zero
    fn normalized_or_zero(self) -> Vec2 {
        let length = self.length();

        if length > 0.0 {
            self / length
        } else {
            Vec2::ZERO
        }
    }

    // Unchanged when |v| <= max, otherwise scaled to exactly max magnitude
    fn truncated(self, max: f32) -> Vec2 {
        if self.length() > max {
            self.normalized_or_zero() * max
        } else {
            self
        }
    }

    // Replace the direction while preserving the magnitude
    fn with_heading(self, degrees: f32) -> Vec2 {
        let theta = degrees.to_radians();
        vec2(theta.cos(), theta.sin()) * self.length()
    }

    fn heading_degrees(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn truncated_caps_magnitude() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let v = vec2(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            assert!(v.truncated(3.0).length() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn truncated_keeps_short_vectors() {
        let v = vec2(1.0, 2.0);
        assert_eq!(v.truncated(10.0), v);
    }

    #[test]
    fn truncated_scales_to_exactly_max() {
        let v = vec2(30.0, 40.0).truncated(5.0);
        assert!((v.length() - 5.0).abs() < 1e-4);
        // direction is preserved
        assert!((v.x / v.y - 30.0 / 40.0).abs() < 1e-5);
    }

    #[test]
    fn normalized_or_zero_has_unit_length() {
        let v = vec2(3.0, 4.0).normalized_or_zero();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_or_zero_handles_the_zero_vector() {
        assert_eq!(Vec2::ZERO.normalized_or_zero(), Vec2::ZERO);
    }

    #[test]
    fn with_heading_preserves_magnitude() {
        let v = vec2(30.0, 0.0).with_heading(90.0);
        assert!((v.length() - 30.0).abs() < 1e-3);
        assert!(v.x.abs() < 1e-3);
        assert!((v.y - 30.0).abs() < 1e-3);
    }

    #[test]
    fn heading_round_trips_through_with_heading() {
        let v = vec2(5.0, 0.0).with_heading(45.0);
        assert!((v.heading_degrees() - 45.0).abs() < 1e-3);
    }
}
