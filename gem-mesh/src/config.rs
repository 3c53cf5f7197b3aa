//! Generator configuration
//!
//! The only tunable is the facet count; girdle point count and angular
//! steps derive from it.

use std::f32::consts::TAU;

use tracing::warn;

/// Default number of crown/pavilion facets per ring.
pub const DEFAULT_FACET_COUNT: u32 = 16;

/// Facet-count bounds. Four facets is the smallest count that keeps
/// every layer a real polygon; 256 keeps the non-indexed vertex count
/// inside u16 index range.
pub const MIN_FACET_COUNT: u32 = 4;
pub const MAX_FACET_COUNT: u32 = 256;

/// Configuration for gem mesh generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GemConfig {
    /// Number of facets per ring (table edge, star tips, pavilion tips).
    /// The girdle carries twice this many points.
    pub facet_count: u32,
}

impl Default for GemConfig {
    fn default() -> Self {
        Self {
            facet_count: DEFAULT_FACET_COUNT,
        }
    }
}

impl GemConfig {
    /// Create a configuration with an explicit facet count, clamped to
    /// the supported range.
    pub fn with_facet_count(facet_count: u32) -> Self {
        let clamped = facet_count.clamp(MIN_FACET_COUNT, MAX_FACET_COUNT);
        if clamped != facet_count {
            warn!(
                "GemConfig: facet_count {} out of range, clamping to {}",
                facet_count, clamped
            );
        }
        Self {
            facet_count: clamped,
        }
    }

    /// Number of points in each girdle ring.
    pub fn girdle_points(&self) -> u32 {
        self.facet_count * 2
    }

    /// Angular step between facets, in radians.
    pub fn step(&self) -> f32 {
        TAU / self.facet_count as f32
    }

    /// Half the facet step: offset of star/pavilion tips, and the girdle
    /// ring step.
    pub fn half_step(&self) -> f32 {
        self.step() * 0.5
    }
}
