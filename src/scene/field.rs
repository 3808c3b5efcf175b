//! Background field dots
//!
//! Small decorative points scattered over unoccupied canvas area. Sampling
//! runs over a jittered grid, thinned randomly, and any candidate landing
//! inside a wheel's exclusion radius is discarded. Each survivor carries its
//! own noise coordinates and drift amplitude for later animated jitter.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::context::GenerationContext;
use super::palette::{self, Hsb};
use super::wheel::Wheel;
use crate::consts::*;

/// A background dot with independent drift animation identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPoint {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Hsb,
    /// Private noise coordinate for x-axis drift
    pub noise_x: f32,
    /// Private noise coordinate for y-axis drift
    pub noise_y: f32,
    /// Maximum drift distance (canvas units)
    pub drift_amp: f32,
}

/// Scatter background dots over the canvas, excluding wheel interiors.
///
/// Grid spacing is min(width, height) / 28; candidates are kept with
/// probability [`FIELD_KEEP_CHANCE`], jittered within their cell, then
/// rejected if they fall within 0.9 x radius of any wheel center.
/// Degenerate canvas dimensions yield an empty set.
pub fn generate_field_dots(
    ctx: &mut GenerationContext,
    wheels: &[Wheel],
    width: f32,
    height: f32,
) -> Vec<FieldPoint> {
    let mut dots = Vec::new();
    if width <= 0.0 || height <= 0.0 {
        return dots;
    }

    let spacing = width.min(height) / FIELD_GRID_DIVISIONS;

    let mut y = spacing * 0.5;
    while y < height {
        let mut x = spacing * 0.5;
        while x < width {
            let roll: f32 = ctx.rng.random();
            if roll >= FIELD_KEEP_CHANCE {
                x += spacing;
                continue;
            }

            let px = x + ctx.rng.random_range(-spacing * FIELD_JITTER..spacing * FIELD_JITTER);
            let py = y + ctx.rng.random_range(-spacing * FIELD_JITTER..spacing * FIELD_JITTER);
            let pos = Vec2::new(px, py);

            let inside_wheel = wheels
                .iter()
                .any(|w| pos.distance(w.pos) < w.base_radius * FIELD_EXCLUSION);
            if inside_wheel {
                x += spacing;
                continue;
            }

            dots.push(FieldPoint {
                pos,
                radius: ctx
                    .rng
                    .random_range(spacing * DOT_RADIUS_MIN..spacing * DOT_RADIUS_MAX),
                color: palette::pick_accent(ctx),
                noise_x: ctx.rng.random_range(0.0..FIELD_SEED_RANGE),
                noise_y: ctx.rng.random_range(0.0..FIELD_SEED_RANGE),
                drift_amp: ctx.rng.random_range(DRIFT_AMP_MIN..DRIFT_AMP_MAX),
            });

            x += spacing;
        }
        y += spacing;
    }

    dots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_respect_wheel_exclusion() {
        let mut ctx = GenerationContext::new(42);
        let wheels = vec![
            Wheel::new(&mut ctx, Vec2::new(200.0, 200.0), 80.0),
            Wheel::new(&mut ctx, Vec2::new(600.0, 400.0), 120.0),
        ];
        let dots = generate_field_dots(&mut ctx, &wheels, 900.0, 600.0);
        assert!(!dots.is_empty());
        for d in &dots {
            for w in &wheels {
                assert!(
                    d.pos.distance(w.pos) >= w.base_radius * FIELD_EXCLUSION,
                    "dot at {:?} inside wheel at {:?}",
                    d.pos,
                    w.pos
                );
            }
        }
    }

    #[test]
    fn test_dot_parameters_in_range() {
        let mut ctx = GenerationContext::new(7);
        let dots = generate_field_dots(&mut ctx, &[], 900.0, 600.0);
        let spacing = 600.0 / FIELD_GRID_DIVISIONS;
        for d in &dots {
            assert!(d.radius >= spacing * DOT_RADIUS_MIN && d.radius < spacing * DOT_RADIUS_MAX);
            assert!((0.0..FIELD_SEED_RANGE).contains(&d.noise_x));
            assert!((0.0..FIELD_SEED_RANGE).contains(&d.noise_y));
            assert!((DRIFT_AMP_MIN..DRIFT_AMP_MAX).contains(&d.drift_amp));
            assert!(palette::ACCENT_PALETTE.contains(&d.color));
        }
    }

    #[test]
    fn test_dots_stay_near_canvas() {
        let mut ctx = GenerationContext::new(3);
        let dots = generate_field_dots(&mut ctx, &[], 900.0, 600.0);
        let spacing = 600.0 / FIELD_GRID_DIVISIONS;
        for d in &dots {
            // Jitter can push at most 0.3 spacing past the last grid line
            assert!(d.pos.x > -spacing && d.pos.x < 900.0 + spacing);
            assert!(d.pos.y > -spacing && d.pos.y < 600.0 + spacing);
        }
    }

    #[test]
    fn test_degenerate_canvas_yields_empty() {
        let mut ctx = GenerationContext::new(1);
        assert!(generate_field_dots(&mut ctx, &[], 0.0, 600.0).is_empty());
        assert!(generate_field_dots(&mut ctx, &[], 900.0, -5.0).is_empty());
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut a = GenerationContext::new(1234);
        let mut b = GenerationContext::new(1234);
        let da = generate_field_dots(&mut a, &[], 400.0, 300.0);
        let db = generate_field_dots(&mut b, &[], 400.0, 300.0);
        assert_eq!(da, db);
    }
}
