//! Facet assembly
//!
//! Stitches the vertex layers into a closed triangle mesh. Seven facet
//! groups are emitted in a fixed order, each wrapping around the stone
//! with modular indexing, so every boundary edge is shared by exactly
//! two triangles.
//!
//! Winding is not derived from the group topology. Every facet group is
//! a star-shaped fan around the vertical axis, so each triangle is
//! oriented independently: if its face normal points toward the axis
//! point at `center_y`, the winding is flipped and the normal negated.
//! Extending the topology beyond star-shaped groups would require
//! adjacency-based orientation propagation instead.

use glam::Vec3;

use crate::config::GemConfig;
use crate::mesh::MeshBuilder;
use crate::vertices::VertexLayers;

/// Emit the full facet list for one gem into `mesh`.
///
/// `center_y` is the vertical midpoint between the table plane and the
/// culet; it anchors the outward-orientation test.
pub fn assemble<M: MeshBuilder>(
    mesh: &mut M,
    layers: &VertexLayers,
    config: &GemConfig,
    center_y: f32,
) {
    let n = config.facet_count as usize;
    let g = config.girdle_points() as usize;
    let center = Vec3::new(0.0, center_y, 0.0);

    let edge = &layers.table_edge;
    let star = &layers.star_tips;
    let upper = &layers.upper_girdle;
    let lower = &layers.lower_girdle;
    let tips = &layers.pavilion_tips;

    // 1. Table fan.
    for i in 0..n {
        let next = (i + 1) % n;
        emit_facet(mesh, layers.table_center, edge[i], edge[next], center);
    }

    // 2. Star facets between table edge and star tips.
    for i in 0..n {
        let next = (i + 1) % n;
        emit_facet(mesh, edge[i], star[i], edge[next], center);
    }

    // 3. Bezel/kite quads: table edge corner flanked by two star tips,
    // reaching down to the girdle point directly below the corner.
    for i in 0..n {
        let prev = (i + n - 1) % n;
        emit_facet(mesh, edge[i], star[prev], upper[2 * i], center);
        emit_facet(mesh, edge[i], upper[2 * i], star[i], center);
    }

    // 4. Upper-girdle facets: each star tip against the girdle pair
    // beneath it.
    for i in 0..n {
        emit_facet(mesh, star[i], upper[2 * i], upper[(2 * i + 1) % g], center);
        emit_facet(
            mesh,
            star[i],
            upper[(2 * i + 1) % g],
            upper[(2 * i + 2) % g],
            center,
        );
    }

    // 5. Girdle band quad strip.
    for j in 0..g {
        let next = (j + 1) % g;
        emit_facet(mesh, upper[j], lower[j], upper[next], center);
        emit_facet(mesh, upper[next], lower[j], lower[next], center);
    }

    // 6. Lower-girdle facets, mirror of group 4.
    for i in 0..n {
        emit_facet(mesh, tips[i], lower[2 * i], lower[(2 * i + 1) % g], center);
        emit_facet(
            mesh,
            tips[i],
            lower[(2 * i + 1) % g],
            lower[(2 * i + 2) % g],
            center,
        );
    }

    // 7. Pavilion main quads, mirror of group 3 with the culet as apex.
    for i in 0..n {
        let prev = (i + n - 1) % n;
        emit_facet(mesh, lower[2 * i], tips[prev], layers.culet, center);
        emit_facet(mesh, lower[2 * i], layers.culet, tips[i], center);
    }
}

/// Emit one flat-shaded triangle, oriented away from the centre axis.
///
/// The face normal comes from the edge cross product. Near-zero-area
/// triangles keep their (zero) normal and are emitted anyway rather
/// than dropped, so edge adjacency stays intact. All three vertices
/// carry the same normal.
fn emit_facet<M: MeshBuilder>(mesh: &mut M, a: Vec3, b: Vec3, c: Vec3, center: Vec3) {
    let normal = (b - a).cross(c - a).normalize_or_zero();
    let centroid = (a + b + c) / 3.0;

    let (b, c, normal) = if normal.dot(centroid - center) < 0.0 {
        (c, b, -normal)
    } else {
        (b, c, normal)
    };

    let i0 = mesh.add_vertex(a, normal);
    let i1 = mesh.add_vertex(b, normal);
    let i2 = mesh.add_vertex(c, normal);
    mesh.add_triangle(i0, i1, i2);
}

/// Triangles emitted per gem: N + N + 2N + 2N + 2G + 2N + 2N with
/// G = 2N, i.e. 14N.
pub fn triangle_count(config: &GemConfig) -> usize {
    14 * config.facet_count as usize
}
