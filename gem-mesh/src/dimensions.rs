//! Dimension derivation
//!
//! Converts the percentage-based report proportions and the caliper
//! measurements into absolute millimetre dimensions and the stacked
//! Y-levels of the stone. Total: missing fields default, inconsistent
//! percentages clamp, nothing fails.

use gem_report::GemReport;
use tracing::warn;

/// Industry-average proportion defaults, percent of girdle diameter.
pub const DEFAULT_TABLE_PCT: f32 = 57.0;
pub const DEFAULT_CROWN_HEIGHT_PCT: f32 = 15.0;
pub const DEFAULT_PAVILION_DEPTH_PCT: f32 = 43.0;
pub const DEFAULT_TOTAL_DEPTH_PCT: f32 = 62.0;

/// Minimum girdle thickness, as a fraction of the girdle diameter. The
/// floor keeps the girdle band from collapsing when the report's crown,
/// pavilion, and total-depth percentages are mutually inconsistent.
const GIRDLE_FLOOR_FRACTION: f32 = 0.01;

/// Absolute dimensions of the stone, millimetres.
///
/// The origin sits at the girdle centre; the table plane is above it by
/// the crown height, the culet below it by the pavilion depth. Holds
/// `y_table > y_girdle_top >= y_girdle_bottom > y_culet` for any input
/// with positive percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Mean girdle radius.
    pub radius: f32,
    pub table_radius: f32,
    pub crown_height: f32,
    pub pavilion_depth: f32,
    pub girdle_thickness: f32,
    pub y_table: f32,
    pub y_girdle_top: f32,
    pub y_girdle_bottom: f32,
    pub y_culet: f32,
    /// Caliper length / width.
    pub aspect_ratio: f32,
}

impl Dimensions {
    /// Derive dimensions from a report.
    ///
    /// Percentages are read from the proportions section with the
    /// industry-average defaults filling any gaps; caliper length and
    /// width resolve through [`GemReport::caliper_mm`]. Callers must
    /// supply positive finite measurements; percentages may be
    /// inconsistent and are reconciled by the girdle floor.
    pub fn resolve(report: &GemReport) -> Self {
        let (length, width) = report.caliper_mm();
        let proportions = &report.proportions;

        let table_pct = proportions.table_pct.unwrap_or(DEFAULT_TABLE_PCT);
        let crown_pct = proportions
            .crown_height_pct
            .unwrap_or(DEFAULT_CROWN_HEIGHT_PCT);
        let pavilion_pct = proportions
            .pavilion_depth_pct
            .unwrap_or(DEFAULT_PAVILION_DEPTH_PCT);
        let total_pct = proportions
            .total_depth_pct
            .unwrap_or(DEFAULT_TOTAL_DEPTH_PCT);

        let diameter = (length + width) * 0.5;
        let radius = diameter * 0.5;

        let crown_height = crown_pct / 100.0 * diameter;
        let pavilion_depth = pavilion_pct / 100.0 * diameter;
        let table_radius = table_pct / 100.0 * radius;
        let total_depth = total_pct / 100.0 * diameter;

        let girdle_floor = GIRDLE_FLOOR_FRACTION * diameter;
        let girdle_raw = total_depth - crown_height - pavilion_depth;
        let girdle_thickness = if girdle_raw < girdle_floor {
            warn!(
                "Dimensions: girdle thickness {:.3}mm below floor, clamping to {:.3}mm",
                girdle_raw, girdle_floor
            );
            girdle_floor
        } else {
            girdle_raw
        };

        let half_girdle = girdle_thickness * 0.5;

        Self {
            radius,
            table_radius,
            crown_height,
            pavilion_depth,
            girdle_thickness,
            y_table: half_girdle + crown_height,
            y_girdle_top: half_girdle,
            y_girdle_bottom: -half_girdle,
            y_culet: -half_girdle - pavilion_depth,
            aspect_ratio: length / width,
        }
    }

    /// Vertical midpoint between the table plane and the culet, used as
    /// the orientation hint for facet winding.
    pub fn center_y(&self) -> f32 {
        (self.y_table + self.y_culet) * 0.5
    }
}
