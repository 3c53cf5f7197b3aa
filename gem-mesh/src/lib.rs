//! Parametric brilliant-cut gem mesh generation
//!
//! Turns the measurements on a grading report (caliper length/width,
//! table, crown, pavilion, and total-depth percentages, shape label)
//! into a closed, flat-shaded triangle mesh of the faceted stone.
//!
//! The pipeline is a chain of pure steps: classify the shape label,
//! derive absolute dimensions from the percentages, build the named
//! vertex layers from the girdle outline function, and stitch them into
//! outward-oriented triangles. Everything is total — missing report
//! fields default, inconsistent percentages clamp — and deterministic:
//! the same report produces a bit-identical mesh.

pub mod config;
pub mod dimensions;
pub mod facets;
pub mod mesh;
pub mod outline;
pub mod packing;
pub mod shape;
pub mod vertices;


pub use config::{DEFAULT_FACET_COUNT, GemConfig};
pub use dimensions::Dimensions;
pub use mesh::{GemMesh, MeshBuilder, PACKED_VERTEX_STRIDE, PackedMesh};
pub use shape::ShapeCategory;
pub use vertices::VertexLayers;

use gem_report::GemReport;

/// Generate the faceted mesh for a grading report.
///
/// # Arguments
/// * `report` - Report snapshot; missing fields fall back to
///   industry-average defaults
/// * `config` - Facet-count configuration ([`GemConfig::default`] gives
///   the 16-facet reference stone)
///
/// # Returns
/// A mesh built through any [`MeshBuilder`]: [`GemMesh`] for f32
/// buffers, [`PackedMesh`] for the 12-byte GPU vertex layout.
///
/// Callers must supply positive finite caliper measurements; that
/// precondition is not validated here.
pub fn generate_gem<M: MeshBuilder + Default>(report: &GemReport, config: &GemConfig) -> M {
    let shape = ShapeCategory::classify(&report.shape);
    let dims = Dimensions::resolve(report);
    let layers = VertexLayers::build(&dims, shape, config);

    let mut mesh = M::default();
    facets::assemble(&mut mesh, &layers, config, dims.center_y());
    mesh
}
