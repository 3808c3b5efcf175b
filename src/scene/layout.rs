//! Layout passes: wheel placement, neighbor linking, full regeneration
//!
//! One regenerate pass is atomic and deterministic for a (seed, width,
//! height) triple. Placement walks a jittered grid with collision
//! rejection; linking builds a bounded-degree proximity graph with
//! third-wheel occlusion tests; the background field fills what's left.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bead_arc::BeadArc;
use super::context::GenerationContext;
use super::field::{FieldPoint, generate_field_dots};
use super::noise::NoiseField;
use super::wheel::Wheel;
use crate::consts::*;

/// The complete product of one regenerate pass.
///
/// Replaced wholesale on regeneration; consumers treat it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub seed: u64,
    pub width: f32,
    pub height: f32,
    pub wheels: Vec<Wheel>,
    pub arcs: Vec<BeadArc>,
    pub dots: Vec<FieldPoint>,
}

impl Layout {
    /// Run one full regenerate pass.
    ///
    /// Generator order (wheels, then arcs, then dots) is part of the
    /// determinism contract: all three share one RNG stream.
    pub fn generate(seed: u64, width: f32, height: f32) -> Self {
        let mut ctx = GenerationContext::new(seed);

        let wheels = generate_wheels(&mut ctx, width, height);
        log::debug!("placed {} wheels", wheels.len());

        let arcs = generate_bead_arcs(&mut ctx, &wheels, DEFAULT_NEIGHBORS, width, height);
        log::debug!("linked {} bead arcs", arcs.len());

        let dots = generate_field_dots(&mut ctx, &wheels, width, height);
        log::debug!("scattered {} field dots", dots.len());

        log::info!(
            "layout seed={seed} {width}x{height}: {} wheels, {} arcs, {} dots",
            wheels.len(),
            arcs.len(),
            dots.len()
        );

        Self {
            seed,
            width,
            height,
            wheels,
            arcs,
            dots,
        }
    }

    /// Noise field matching this layout's seed, for animation queries.
    pub fn noise(&self) -> NoiseField {
        NoiseField::new(self.seed as u32)
    }
}

/// Place wheels on a jittered grid, avoiding overlaps.
///
/// Grid unit is min(width, height) / 9. Cells are visited top-to-bottom,
/// left-to-right; each attempts a wheel with probability
/// [`WHEEL_CELL_CHANCE`]. A candidate is accepted only if its center is at
/// least 0.85 x (radius sum) from every wheel already placed; rejected
/// candidates are discarded, not retried, so some cells stay empty.
pub fn generate_wheels(ctx: &mut GenerationContext, width: f32, height: f32) -> Vec<Wheel> {
    let mut wheels: Vec<Wheel> = Vec::new();
    if width <= 0.0 || height <= 0.0 {
        return wheels;
    }

    let unit = width.min(height) / WHEEL_GRID_DIVISIONS;
    let cols = (width / unit) as usize + 1;
    let rows = (height / unit) as usize + 1;

    for j in 0..rows {
        for i in 0..cols {
            let roll: f32 = ctx.rng.random();
            if roll >= WHEEL_CELL_CHANCE {
                continue;
            }

            let jitter = unit * WHEEL_CELL_JITTER;
            let cx = (i as f32 + 0.5) * unit + ctx.rng.random_range(-jitter..jitter);
            let cy = (j as f32 + 0.5) * unit + ctx.rng.random_range(-jitter..jitter);
            let radius = unit * ctx.rng.random_range(WHEEL_RADIUS_MIN..WHEEL_RADIUS_MAX);
            let pos = Vec2::new(cx, cy);

            let clear = wheels
                .iter()
                .all(|w| pos.distance(w.pos) >= (radius + w.base_radius) * WHEEL_SEPARATION);
            if clear {
                wheels.push(Wheel::new(ctx, pos, radius));
            }
        }
    }

    wheels
}

/// Link each wheel to up to `k` of its nearest neighbors with bead arcs.
///
/// Symmetric pairs are considered only from the lower-indexed wheel's
/// turn; a candidate that fails validation still counts against nothing,
/// but a wheel whose nearer candidates were consumed from the other side
/// may end up with fewer than `k` links. That under-connection is
/// deliberate layout texture, not corrected.
///
/// Candidate filters, in order: minimum rim separation
/// (0.95 x radius sum), locality cap (half the shorter canvas dimension),
/// then a third-wheel occlusion test against the curve midpoint. The arc
/// is constructed before the occlusion test, so rejected candidates still
/// advance the RNG stream.
pub fn generate_bead_arcs(
    ctx: &mut GenerationContext,
    wheels: &[Wheel],
    k: usize,
    width: f32,
    height: f32,
) -> Vec<BeadArc> {
    let mut arcs = Vec::new();
    if k == 0 || wheels.len() < 2 {
        return arcs;
    }

    let locality_cap = width.min(height) / 2.0;

    for i in 0..wheels.len() {
        let w1 = &wheels[i];

        let mut candidates: Vec<(usize, f32)> = wheels
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, w)| (j, w1.pos.distance(w.pos)))
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut added = 0;
        for (j, d) in candidates {
            if added >= k {
                break;
            }
            // Pair already owned by the lower index
            if j < i {
                continue;
            }

            let w2 = &wheels[j];
            if d < (w1.base_radius + w2.base_radius) * ARC_MIN_SEPARATION {
                continue;
            }
            if d > locality_cap {
                continue;
            }

            let arc = BeadArc::new(ctx, i, w1, j, w2);
            let mid = arc.midpoint();
            let blocked = wheels.iter().enumerate().any(|(t, w)| {
                t != i && t != j && mid.distance(w.pos) < w.base_radius * ARC_BLOCK_RADIUS
            });

            if !blocked {
                arcs.push(arc);
                added += 1;
            }
        }
    }

    arcs
}
