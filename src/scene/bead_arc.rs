//! Bead arc geometry for curved wheel-to-wheel links
//!
//! A bead arc is a quadratic Bézier between the rims of two wheels, bulged
//! sideways from the chord and discretized into a bead count for rendering.
//! The curve is fixed at creation; wheels animate visually but the arc
//! geometry is layout data and never moves.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::context::GenerationContext;
use super::palette::Hsb;
use super::wheel::Wheel;
use crate::consts::*;

/// A curved bead connector between two wheels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeadArc {
    /// Indices of the linked wheels in the owning layout
    pub wheel_a: usize,
    pub wheel_b: usize,
    /// Endpoint near wheel A's rim
    pub a: Vec2,
    /// Endpoint near wheel B's rim
    pub b: Vec2,
    /// Quadratic Bézier control point, offset normal to the chord
    pub control: Vec2,
    pub color: Hsb,
    pub bead_size: f32,
    /// Number of bead intervals along the curve (beads = count + 1)
    pub bead_count: usize,
}

impl BeadArc {
    /// Build the connector between wheels `wa` (index `ia`) and `wb`
    /// (index `ib`), drawing the curvature jitter from the context.
    pub fn new(
        ctx: &mut GenerationContext,
        ia: usize,
        wa: &Wheel,
        ib: usize,
        wb: &Wheel,
    ) -> Self {
        let dir = (wb.pos - wa.pos).normalize_or_zero();
        let a = wa.pos + dir * (wa.base_radius * ARC_ENDPOINT_INSET);
        let b = wb.pos - dir * (wb.base_radius * ARC_ENDPOINT_INSET);

        let chord = b - a;
        let mid = a + chord * 0.5;
        let normal = Vec2::new(-chord.y, chord.x).normalize_or_zero();
        let curvature = chord.length()
            * (ARC_CURVATURE_BASE
                + ctx
                    .rng
                    .random_range(-ARC_CURVATURE_JITTER..ARC_CURVATURE_JITTER));
        let control = mid + normal * curvature;

        let bead_size = wa.base_radius.min(wb.base_radius) * BEAD_SIZE_RATIO;
        let spacing = bead_size * BEAD_SPACING_RATIO;
        let approx_len = chord.length() * ARC_LENGTH_FUDGE;
        let bead_count = ((approx_len / spacing) as usize).max(MIN_BEADS);

        Self {
            wheel_a: ia,
            wheel_b: ib,
            a,
            b,
            control,
            color: wa.bead_color,
            bead_size,
            bead_count,
        }
    }

    /// Evaluate the quadratic Bézier at parameter `t` in [0, 1]
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.a * (u * u) + self.control * (2.0 * u * t) + self.b * (t * t)
    }

    /// Curve midpoint (t = 0.5), used for third-wheel occlusion tests
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        self.point_at(0.5)
    }

    /// Bead positions along the curve, endpoints included
    pub fn bead_positions(&self) -> Vec<Vec2> {
        (0..=self.bead_count)
            .map(|i| self.point_at(i as f32 / self.bead_count as f32))
            .collect()
    }
}
