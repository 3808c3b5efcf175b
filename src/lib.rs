//! Wheelfield - procedural wheel-motif compositions
//!
//! Core modules:
//! - `scene`: Deterministic layout generation and animation (wheels, bead
//!   arcs, background field, noise-driven transforms)
//!
//! Rendering, windowing and input are external collaborators: they consume
//! the layouts and per-frame transforms this crate produces but never feed
//! back into generation.

pub mod scene;

pub use scene::{
    BeadArc, FieldPoint, GenerationContext, Hsb, Layout, NoiseField, Wheel, WheelTransform,
    dot_offset, wheel_transform,
};

/// Layout and animation tuning constants
pub mod consts {
    /// Wheel placement grid: divisions of the shorter canvas side
    pub const WHEEL_GRID_DIVISIONS: f32 = 9.0;
    /// Chance that a grid cell attempts to place a wheel
    pub const WHEEL_CELL_CHANCE: f32 = 0.8;
    /// Cell-center jitter as a fraction of the grid unit (each axis)
    pub const WHEEL_CELL_JITTER: f32 = 0.25;
    /// Wheel radius range as fractions of the grid unit
    pub const WHEEL_RADIUS_MIN: f32 = 0.55;
    pub const WHEEL_RADIUS_MAX: f32 = 1.05;
    /// Minimum center separation between wheels, as a fraction of the radius sum
    pub const WHEEL_SEPARATION: f32 = 0.85;

    /// Nearest neighbors each wheel seeks when linking
    pub const DEFAULT_NEIGHBORS: usize = 2;
    /// Minimum center distance for a link, as a fraction of the radius sum
    pub const ARC_MIN_SEPARATION: f32 = 0.95;
    /// Arc endpoints sit this fraction of each radius out from its center
    pub const ARC_ENDPOINT_INSET: f32 = 0.95;
    /// Bézier control offset: base fraction of chord length, plus jitter
    pub const ARC_CURVATURE_BASE: f32 = 0.25;
    pub const ARC_CURVATURE_JITTER: f32 = 0.08;
    /// A curve midpoint closer than this fraction of a third wheel's radius is blocked
    pub const ARC_BLOCK_RADIUS: f32 = 0.9;
    /// Bead size as a fraction of the smaller endpoint radius
    pub const BEAD_SIZE_RATIO: f32 = 0.06;
    /// Bead spacing along the curve, in bead sizes
    pub const BEAD_SPACING_RATIO: f32 = 1.4;
    /// Arc length estimate: chord length times this fudge factor
    pub const ARC_LENGTH_FUDGE: f32 = 1.1;
    pub const MIN_BEADS: usize = 4;

    /// Background field grid: divisions of the shorter canvas side
    pub const FIELD_GRID_DIVISIONS: f32 = 28.0;
    /// Chance that a field grid sample survives thinning
    pub const FIELD_KEEP_CHANCE: f32 = 0.4;
    /// Field sample jitter as a fraction of the grid spacing
    pub const FIELD_JITTER: f32 = 0.3;
    /// Dots closer than this fraction of a wheel's radius are excluded
    pub const FIELD_EXCLUSION: f32 = 0.9;
    /// Field dot radius range, as fractions of the grid spacing
    pub const DOT_RADIUS_MIN: f32 = 0.06;
    pub const DOT_RADIUS_MAX: f32 = 0.12;
    /// Field dot drift amplitude range (canvas units)
    pub const DRIFT_AMP_MIN: f32 = 2.0;
    pub const DRIFT_AMP_MAX: f32 = 5.0;
    /// Field dot drift frequency (cycles per animation second)
    pub const DRIFT_FREQ: f32 = 0.2;

    /// Per-wheel scale/rotation noise frequency range
    pub const ANIM_FREQ_MIN: f32 = 0.005;
    pub const ANIM_FREQ_MAX: f32 = 0.015;
    /// Scale floor range; the ceiling is the floor plus the extra range
    pub const MIN_SCALE_LO: f32 = 0.3;
    pub const MIN_SCALE_HI: f32 = 0.7;
    pub const SCALE_EXTRA_LO: f32 = 0.8;
    pub const SCALE_EXTRA_HI: f32 = 1.2;
    /// Rotation swing range (max +/- degrees from rest)
    pub const ROT_RANGE_MIN_DEG: f32 = 20.0;
    pub const ROT_RANGE_MAX_DEG: f32 = 60.0;
    /// Noise seed coordinate ranges; scale and rotation channels live in
    /// disjoint bands so they never sample the same noise region
    pub const SCALE_SEED_RANGE: f32 = 1000.0;
    pub const ROT_SEED_LO: f32 = 2000.0;
    pub const ROT_SEED_HI: f32 = 3000.0;
    pub const FIELD_SEED_RANGE: f32 = 1000.0;

    /// Wheel decoration: concentric layer count range (exclusive upper)
    pub const LAYER_COUNT_MIN: usize = 3;
    pub const LAYER_COUNT_MAX: usize = 5;
    /// Outer bead ring radius and bead size, as fractions of the base radius
    pub const BEAD_RING_RADIUS: f32 = 0.88;
    pub const BEAD_RING_SIZE: f32 = 0.09;
    pub const BEAD_RING_MIN_COUNT: usize = 10;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `v` from the range [in_min, in_max] to [out_min, out_max] (unclamped)
#[inline]
pub fn remap(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (out_max - out_min) * ((v - in_min) / (in_max - in_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_lerp_reversed_range() {
        // Used for noise -> [-amp, +amp] mapping
        assert_eq!(lerp(5.0, -5.0, 0.5), 0.0);
        assert_eq!(lerp(-3.0, 3.0, 0.0), -3.0);
    }

    #[test]
    fn test_remap() {
        assert_eq!(remap(0.5, 0.0, 1.0, 10.0, 20.0), 15.0);
        assert_eq!(remap(20.0, 20.0, 220.0, 16.0, 32.0), 16.0);
        assert_eq!(remap(220.0, 20.0, 220.0, 16.0, 32.0), 32.0);
        // Unclamped, like the classic map() helper
        assert_eq!(remap(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
    }
}
