//! Color selection
//!
//! A small curated base palette with bounded random perturbation per pick,
//! plus a fixed accent palette for background dots. Colors stay in HSB; any
//! conversion to RGB is the renderer's problem.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::context::GenerationContext;

/// HSB color: hue in [0, 360), saturation and brightness in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

impl Hsb {
    pub const fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }
}

/// Curated base colors for wheel cores, beads and layers
pub const BASE_PALETTE: [Hsb; 7] = [
    Hsb::new(340.0, 90.0, 100.0), // Magenta
    Hsb::new(25.0, 95.0, 100.0),  // Orange
    Hsb::new(55.0, 90.0, 100.0),  // Yellow
    Hsb::new(200.0, 60.0, 90.0),  // Cyan-blue
    Hsb::new(120.0, 70.0, 90.0),  // Green
    Hsb::new(0.0, 0.0, 100.0),    // White
    Hsb::new(0.0, 0.0, 15.0),     // Black
];

/// Fixed accent colors for background field dots (no perturbation)
pub const ACCENT_PALETTE: [Hsb; 4] = [
    Hsb::new(0.0, 0.0, 100.0),    // White
    Hsb::new(0.0, 0.0, 15.0),     // Black
    Hsb::new(25.0, 95.0, 100.0),  // Orange
    Hsb::new(340.0, 90.0, 100.0), // Magenta
];

/// Pick a base color and apply a small random variation.
///
/// Hue wraps mod 360; saturation is clamped to [50, 100], brightness
/// to [40, 100] so perturbed colors never wash out or go muddy.
pub fn pick(ctx: &mut GenerationContext) -> Hsb {
    let base = BASE_PALETTE[ctx.rng.random_range(0..BASE_PALETTE.len())];
    let h = (base.h + ctx.rng.random_range(-8.0..8.0) + 360.0) % 360.0;
    let s = (base.s + ctx.rng.random_range(-6.0..6.0)).clamp(50.0, 100.0);
    let b = (base.b + ctx.rng.random_range(-6.0..6.0)).clamp(40.0, 100.0);
    Hsb { h, s, b }
}

/// Pick an accent color for a background dot.
pub fn pick_accent(ctx: &mut GenerationContext) -> Hsb {
    ACCENT_PALETTE[ctx.rng.random_range(0..ACCENT_PALETTE.len())]
}
