//! Centralized constants for breeding parameters.
//!
//! All configurable parameters are defined here with the `KOI_` prefix.

use crate::random::percent;

// ============================================================================
// Blend Samplers
// ============================================================================

/// Steepness of the sigmoid blending palette samples. Steep enough that most offspring take
/// after one parent's colors
pub const KOI_SAMPLER_PALETTE_POWER: f64 = 20.0;

/// Steepness of the sigmoid blending pattern geometry ( scale, threshold, distortion )
pub const KOI_SAMPLER_PATTERN_POWER: f64 = 6.0;

/// Flatness of the plateau blending body shape
pub const KOI_SAMPLER_SHAPE_POWER: f64 = 3.0;

// ============================================================================
// Mutation Parameters
// ============================================================================

/// Probability of mutating any single field of an offspring layer
pub const KOI_MUTATION_CHANCE: u64 = percent(5);

/// Standard deviation of the gaussian perturbation applied to a mutated field,
/// relative to the field's range
pub const KOI_MUTATION_DEVIATION: f64 = 0.05;

// ============================================================================
// Pattern Ranges
// ============================================================================

/// Smallest pattern scale; larger scale means larger spots or wider stripes
pub const KOI_PATTERN_SCALE_MIN: f64 = 0.5;

/// Largest pattern scale
pub const KOI_PATTERN_SCALE_MAX: f64 = 8.0;

// ============================================================================
// Shape Ranges
// ============================================================================

/// Shortest body length, relative to the default fish
pub const KOI_SHAPE_LENGTH_MIN: f64 = 0.6;

/// Longest body length, relative to the default fish
pub const KOI_SHAPE_LENGTH_MAX: f64 = 1.4;

/// Thinnest body radius, relative to the default fish
pub const KOI_SHAPE_RADIUS_MIN: f64 = 0.6;

/// Thickest body radius, relative to the default fish
pub const KOI_SHAPE_RADIUS_MAX: f64 = 1.4;

// ============================================================================
// Breeding
// ============================================================================

/// Number of offspring in one clutch of eggs
pub const KOI_CLUTCH_SIZE: usize = 4;
