//! Wheel entities
//!
//! A wheel is a placed circular motif: position, base radius, decorative
//! structure (concentric layers, outer bead ring) and the private animation
//! parameters that drive its scale and rotation. Everything is fixed at
//! creation; animation reads these parameters but never writes back.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::context::GenerationContext;
use super::palette::{self, Hsb};
use crate::consts::*;
use crate::remap;

/// Visual style of one concentric layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerStyle {
    Solid,
    Dots,
    Sunburst,
    Stripes,
}

/// One dot on a `Dots` layer ring, positioned relative to the wheel center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingDot {
    pub offset: Vec2,
    pub radius: f32,
}

/// One concentric decorative layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelLayer {
    /// Layer radius as a fraction of the base radius
    pub ratio: f32,
    pub style: LayerStyle,
    pub color: Hsb,
    /// Populated only for `Dots` layers
    pub ring_dots: Vec<RingDot>,
}

/// Outer ring of beads at the wheel rim
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeadRing {
    pub radius: f32,
    pub bead_size: f32,
    pub count: usize,
}

/// A placed wheel with creation-time animation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    pub pos: Vec2,
    pub base_radius: f32,

    pub core_color: Hsb,
    pub bead_color: Hsb,
    pub layers: Vec<WheelLayer>,
    pub bead_ring: BeadRing,

    /// Scale channel: private noise seed, frequency and output range
    pub scale_noise_seed: f32,
    pub scale_freq: f32,
    pub min_scale: f32,
    pub max_scale: f32,

    /// Rotation channel: private noise seed, frequency and swing (degrees)
    pub rot_noise_seed: f32,
    pub rot_freq: f32,
    pub rot_range_deg: f32,
}

impl Wheel {
    /// Create a wheel at `pos` with the given base radius, drawing all
    /// decorative and animation parameters from the context.
    pub fn new(ctx: &mut GenerationContext, pos: Vec2, base_radius: f32) -> Self {
        let core_color = palette::pick(ctx);
        let bead_color = palette::pick(ctx);

        let n_layers = ctx.rng.random_range(LAYER_COUNT_MIN..LAYER_COUNT_MAX);
        let mut layers = Vec::with_capacity(n_layers);
        for i in 0..n_layers {
            // Inner layers small, outermost at full radius
            let ratio = remap(i as f32, 0.0, (n_layers - 1) as f32, 0.25, 1.0);
            let style = match ctx.rng.random_range(0..4) {
                0 => LayerStyle::Solid,
                1 => LayerStyle::Dots,
                2 => LayerStyle::Sunburst,
                _ => LayerStyle::Stripes,
            };
            let color = palette::pick(ctx);

            let ring_dots = if style == LayerStyle::Dots {
                make_ring_dots(ctx, base_radius * ratio * 0.9)
            } else {
                Vec::new()
            };

            layers.push(WheelLayer {
                ratio,
                style,
                color,
                ring_dots,
            });
        }

        let ring_radius = base_radius * BEAD_RING_RADIUS;
        let bead_size = base_radius * BEAD_RING_SIZE;
        let circumference = TAU * ring_radius;
        let count = ((circumference / (bead_size * 1.2)) as usize).max(BEAD_RING_MIN_COUNT);
        let bead_ring = BeadRing {
            radius: ring_radius,
            bead_size,
            count,
        };

        let scale_noise_seed = ctx.rng.random_range(0.0..SCALE_SEED_RANGE);
        let scale_freq = ctx.rng.random_range(ANIM_FREQ_MIN..ANIM_FREQ_MAX);
        let min_scale = ctx.rng.random_range(MIN_SCALE_LO..MIN_SCALE_HI);
        let max_scale = min_scale + ctx.rng.random_range(SCALE_EXTRA_LO..SCALE_EXTRA_HI);

        let rot_noise_seed = ctx.rng.random_range(ROT_SEED_LO..ROT_SEED_HI);
        let rot_freq = ctx.rng.random_range(ANIM_FREQ_MIN..ANIM_FREQ_MAX);
        let rot_range_deg = ctx.rng.random_range(ROT_RANGE_MIN_DEG..ROT_RANGE_MAX_DEG);

        Self {
            pos,
            base_radius,
            core_color,
            bead_color,
            layers,
            bead_ring,
            scale_noise_seed,
            scale_freq,
            min_scale,
            max_scale,
            rot_noise_seed,
            rot_freq,
            rot_range_deg,
        }
    }
}

/// Ring of dots for a `Dots` layer, spread evenly in angle with a jittered
/// radius just inside the layer edge. Dot count scales with layer radius.
fn make_ring_dots(ctx: &mut GenerationContext, radius: f32) -> Vec<RingDot> {
    let count = remap(radius, 20.0, 220.0, 16.0, 32.0) as usize;
    let dot_radius = radius * 0.10;
    let mut dots = Vec::with_capacity(count);
    for k in 0..count {
        let angle = TAU * k as f32 / count as f32;
        let rr = radius * ctx.rng.random_range(0.8..0.95);
        dots.push(RingDot {
            offset: Vec2::new(angle.cos() * rr, angle.sin() * rr),
            radius: dot_radius,
        });
    }
    dots
}
