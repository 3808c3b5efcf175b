//! Noise-driven animation queries
//!
//! Pure functions of a pre-scaled time scalar. Each wheel and field dot
//! carries private noise seeds, so every channel is independent, bounded by
//! its creation-time range, and idempotent: evaluating at the same `t`
//! always gives the same answer, in any order, with no state to reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::FieldPoint;
use super::noise::NoiseField;
use super::wheel::Wheel;
use crate::consts::DRIFT_FREQ;
use crate::lerp;

/// Instantaneous visual transform for one wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelTransform {
    /// Uniform scale factor about the wheel center
    pub scale: f32,
    /// Rotation about the wheel center, degrees
    pub rotation_deg: f32,
}

/// Evaluate a wheel's scale and rotation at animation time `t`.
pub fn wheel_transform(noise: &NoiseField, wheel: &Wheel, t: f32) -> WheelTransform {
    let s = noise.sample(wheel.scale_noise_seed, t * wheel.scale_freq);
    let r = noise.sample(wheel.rot_noise_seed, t * wheel.rot_freq);
    WheelTransform {
        scale: lerp(wheel.min_scale, wheel.max_scale, s),
        rotation_deg: lerp(-wheel.rot_range_deg, wheel.rot_range_deg, r),
    }
}

/// Evaluate a field dot's drift offset at animation time `t`.
pub fn dot_offset(noise: &NoiseField, dot: &FieldPoint, t: f32) -> Vec2 {
    let nx = noise.sample(dot.noise_x, t * DRIFT_FREQ);
    let ny = noise.sample(dot.noise_y, t * DRIFT_FREQ);
    Vec2::new(
        lerp(-dot.drift_amp, dot.drift_amp, nx),
        lerp(-dot.drift_amp, dot.drift_amp, ny),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::palette::Hsb;
    use crate::scene::wheel::BeadRing;
    use proptest::prelude::*;

    fn test_wheel(min_scale: f32, max_scale: f32) -> Wheel {
        Wheel {
            pos: Vec2::ZERO,
            base_radius: 50.0,
            core_color: Hsb::new(0.0, 0.0, 100.0),
            bead_color: Hsb::new(0.0, 0.0, 15.0),
            layers: Vec::new(),
            bead_ring: BeadRing {
                radius: 44.0,
                bead_size: 4.5,
                count: 10,
            },
            scale_noise_seed: 123.4,
            scale_freq: 0.01,
            min_scale,
            max_scale,
            rot_noise_seed: 2345.6,
            rot_freq: 0.012,
            rot_range_deg: 45.0,
        }
    }

    #[test]
    fn test_scale_bounded_over_long_times() {
        let noise = NoiseField::new(42);
        let wheel = test_wheel(0.4, 1.3);

        for i in 0..1000 {
            let t = i as f32;
            let tf = wheel_transform(&noise, &wheel, t);
            assert!(
                (0.4..=1.3).contains(&tf.scale),
                "scale {} out of range at t={t}",
                tf.scale
            );
            assert!(tf.rotation_deg >= -45.0 && tf.rotation_deg <= 45.0);
        }

        // Extreme times stay bounded too
        for t in [0.0, 1.0e9] {
            let tf = wheel_transform(&noise, &wheel, t);
            assert!((0.4..=1.3).contains(&tf.scale));
        }
    }

    #[test]
    fn test_transform_idempotent() {
        let noise = NoiseField::new(42);
        let a = test_wheel(0.3, 1.5);
        let b = test_wheel(0.5, 1.0);

        let first = wheel_transform(&noise, &a, 17.5);
        // Interleave other evaluations; result must not change
        let _ = wheel_transform(&noise, &b, 3.0);
        let _ = wheel_transform(&noise, &b, 17.5);
        let second = wheel_transform(&noise, &a, 17.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_transform_continuous() {
        let noise = NoiseField::new(7);
        let wheel = test_wheel(0.4, 1.3);
        let mut prev = wheel_transform(&noise, &wheel, 0.0);
        for i in 1..2000 {
            let t = i as f32 * 0.1;
            let cur = wheel_transform(&noise, &wheel, t);
            assert!((cur.scale - prev.scale).abs() < 0.05);
            assert!((cur.rotation_deg - prev.rotation_deg).abs() < 2.0);
            prev = cur;
        }
    }

    #[test]
    fn test_dot_offset_bounded() {
        let noise = NoiseField::new(42);
        let dot = FieldPoint {
            pos: Vec2::new(10.0, 20.0),
            radius: 2.0,
            color: Hsb::new(0.0, 0.0, 100.0),
            noise_x: 333.3,
            noise_y: 666.6,
            drift_amp: 4.0,
        };
        for i in 0..500 {
            let off = dot_offset(&noise, &dot, i as f32 * 2.5);
            assert!(off.x.abs() <= 4.0 && off.y.abs() <= 4.0);
        }
    }

    proptest! {
        #[test]
        fn transform_always_in_creation_range(
            t in 0.0f32..1.0e6,
            min in 0.3f32..0.7,
            extra in 0.8f32..1.2,
        ) {
            let noise = NoiseField::new(11);
            let wheel = test_wheel(min, min + extra);
            let tf = wheel_transform(&noise, &wheel, t);
            prop_assert!(tf.scale >= min && tf.scale <= min + extra);
            prop_assert!(tf.rotation_deg.abs() <= wheel.rot_range_deg);
        }
    }
}
