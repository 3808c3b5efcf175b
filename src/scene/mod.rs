//! Deterministic layout generation and animation
//!
//! Everything that decides a composition lives here. This module must be
//! pure and deterministic:
//! - Seeded RNG only, threaded explicitly through a [`GenerationContext`]
//! - Stable iteration order (grid order for placement, wheel index for linking)
//! - No rendering or platform dependencies
//!
//! A regenerate pass is atomic: [`Layout::generate`] builds a complete new
//! set of wheels, bead arcs and field dots from one seed, and the result is
//! immutable until it is replaced wholesale by the next pass.

pub mod anim;
pub mod bead_arc;
pub mod context;
pub mod field;
pub mod layout;
pub mod noise;
pub mod palette;
pub mod wheel;

pub use anim::{WheelTransform, dot_offset, wheel_transform};
pub use bead_arc::BeadArc;
pub use context::GenerationContext;
pub use field::{FieldPoint, generate_field_dots};
pub use layout::{Layout, generate_bead_arcs, generate_wheels};
pub use palette::{ACCENT_PALETTE, BASE_PALETTE, Hsb};
pub use wheel::{BeadRing, LayerStyle, RingDot, Wheel, WheelLayer};

pub use self::noise::NoiseField;
