//! Vertex layer construction
//!
//! Builds the named rings of points that the facet assembler stitches
//! together. Every radial value evaluates the outline function at that
//! vertex's own angle; only the blend fractions between rings are fixed.

use glam::Vec3;

use crate::config::GemConfig;
use crate::dimensions::Dimensions;
use crate::outline::outline_radius;
use crate::shape::ShapeCategory;

/// Star tips sit halfway between the table-edge radius and the girdle
/// radius at their angle.
const STAR_RADIUS_BLEND: f32 = 0.5;

/// Star tips drop this fraction of the crown height below the table.
const STAR_DROP_FRACTION: f32 = 0.42;

/// Pavilion tips sit at this fraction of the girdle radius.
const TIP_RADIUS_FRACTION: f32 = 0.22;

/// Pavilion tips drop this fraction of the pavilion depth below the
/// girdle bottom.
const TIP_DROP_FRACTION: f32 = 0.72;

/// The vertex layers of one gem, built once per generation and consumed
/// by the facet assembler.
///
/// With facet count N: `table_edge`, `star_tips`, and `pavilion_tips`
/// hold N points, the girdle rings 2N each.
#[derive(Clone, Debug)]
pub struct VertexLayers {
    pub table_center: Vec3,
    pub table_edge: Vec<Vec3>,
    pub star_tips: Vec<Vec3>,
    pub upper_girdle: Vec<Vec3>,
    pub lower_girdle: Vec<Vec3>,
    pub pavilion_tips: Vec<Vec3>,
    pub culet: Vec3,
}

impl VertexLayers {
    /// Build all vertex layers for the given dimensions and shape.
    ///
    /// Pure: allocates only the returned layers, cannot fail for
    /// positive dimensions.
    pub fn build(dims: &Dimensions, shape: ShapeCategory, config: &GemConfig) -> Self {
        let n = config.facet_count;
        let step = config.step();
        let half_step = config.half_step();
        let aspect = dims.aspect_ratio;

        let mut table_edge = Vec::with_capacity(n as usize);
        let mut star_tips = Vec::with_capacity(n as usize);
        let mut pavilion_tips = Vec::with_capacity(n as usize);

        for i in 0..n {
            let theta = i as f32 * step;
            let r = dims.table_radius * outline_radius(theta, shape, aspect);
            table_edge.push(ring_point(r, theta, dims.y_table));
        }

        for i in 0..n {
            let theta = i as f32 * step + half_step;
            let scale = outline_radius(theta, shape, aspect);
            let table_r = dims.table_radius * scale;
            let girdle_r = dims.radius * scale;
            let r = table_r + STAR_RADIUS_BLEND * (girdle_r - table_r);
            let y = dims.y_table - STAR_DROP_FRACTION * dims.crown_height;
            star_tips.push(ring_point(r, theta, y));
        }

        let girdle_points = config.girdle_points();
        let mut upper_girdle = Vec::with_capacity(girdle_points as usize);
        let mut lower_girdle = Vec::with_capacity(girdle_points as usize);
        for j in 0..girdle_points {
            let theta = j as f32 * half_step;
            let r = dims.radius * outline_radius(theta, shape, aspect);
            upper_girdle.push(ring_point(r, theta, dims.y_girdle_top));
            lower_girdle.push(ring_point(r, theta, dims.y_girdle_bottom));
        }

        for i in 0..n {
            let theta = i as f32 * step + half_step;
            let r = TIP_RADIUS_FRACTION * dims.radius * outline_radius(theta, shape, aspect);
            let y = dims.y_girdle_bottom - TIP_DROP_FRACTION * dims.pavilion_depth;
            pavilion_tips.push(ring_point(r, theta, y));
        }

        Self {
            table_center: Vec3::new(0.0, dims.y_table, 0.0),
            table_edge,
            star_tips,
            upper_girdle,
            lower_girdle,
            pavilion_tips,
            culet: Vec3::new(0.0, dims.y_culet, 0.0),
        }
    }
}

fn ring_point(radius: f32, theta: f32, y: f32) -> Vec3 {
    Vec3::new(radius * theta.cos(), y, radius * theta.sin())
}
