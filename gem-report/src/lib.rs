//! Gem lab-report data model
//!
//! Typed view of the grading-report JSON produced by the report scraper
//! (IGI-style records). All fields are optional on the wire; the mesh
//! generator applies industry-average defaults for anything missing, so
//! a partially filled report is always usable.

use serde::{Deserialize, Serialize};

/// Proportion section of a grading report.
///
/// Percentages are relative to the girdle diameter, angles in degrees.
/// `girdle` and `culet` are the free-text grades printed on the report
/// ("Medium to Slightly Thick", "Pointed", ...), not measurements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Proportions {
    #[serde(default)]
    pub table_pct: Option<f32>,
    #[serde(default)]
    pub total_depth_pct: Option<f32>,
    #[serde(default)]
    pub crown_height_pct: Option<f32>,
    #[serde(default)]
    pub crown_angle_deg: Option<f32>,
    #[serde(default)]
    pub pavilion_depth_pct: Option<f32>,
    #[serde(default)]
    pub pavilion_angle_deg: Option<f32>,
    #[serde(default)]
    pub girdle: Option<String>,
    #[serde(default)]
    pub culet: Option<String>,
}

/// A grading report snapshot.
///
/// Mirrors the scraped report record. Only `shape`, the caliper
/// measurements, and `proportions` drive mesh generation; the 4C and
/// finish fields are carried for display by the surrounding application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GemReport {
    #[serde(default)]
    pub report_number: Option<String>,
    /// Free-text shape and cut label, e.g. "ROUND BRILLIANT CUT".
    #[serde(default)]
    pub shape: String,
    /// Raw measurement string, e.g. "6.50 x 6.52 x 4.02 mm".
    #[serde(default)]
    pub measurements_mm: Option<String>,
    #[serde(default)]
    pub length_mm: Option<f32>,
    #[serde(default)]
    pub width_mm: Option<f32>,
    #[serde(default)]
    pub depth_mm: Option<f32>,
    #[serde(default)]
    pub carat: Option<f32>,
    #[serde(default)]
    pub color_grade: Option<String>,
    #[serde(default)]
    pub clarity_grade: Option<String>,
    #[serde(default)]
    pub cut_grade: Option<String>,
    #[serde(default)]
    pub polish: Option<String>,
    #[serde(default)]
    pub symmetry: Option<String>,
    #[serde(default)]
    pub fluorescence: Option<String>,
    #[serde(default)]
    pub proportions: Proportions,
}

/// Caliper length/width fallback when a report carries no measurements.
pub const DEFAULT_CALIPER_MM: f32 = 6.5;

impl GemReport {
    /// Deserialize a report from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the report back to JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Resolve the caliper length/width in millimetres.
    ///
    /// Explicit `length_mm`/`width_mm` win; otherwise the values are
    /// parsed out of the `measurements_mm` string; otherwise both fall
    /// back to [`DEFAULT_CALIPER_MM`].
    pub fn caliper_mm(&self) -> (f32, f32) {
        let parsed = self
            .measurements_mm
            .as_deref()
            .and_then(parse_measurements);

        let length = self
            .length_mm
            .or(parsed.map(|(l, _, _)| l))
            .unwrap_or(DEFAULT_CALIPER_MM);
        let width = self
            .width_mm
            .or(parsed.map(|(_, w, _)| w))
            .unwrap_or(DEFAULT_CALIPER_MM);

        (length, width)
    }
}

/// Parse a report measurement string into (length, width, depth) mm.
///
/// Accepts the formats printed on reports: `"6.50 x 6.52 x 4.02 mm"`,
/// with `x`, `X`, or `×` separators and an optional `mm` suffix.
/// Returns `None` unless all three components parse as positive numbers.
pub fn parse_measurements(raw: &str) -> Option<(f32, f32, f32)> {
    let cleaned = raw.trim().trim_end_matches("mm").trim();
    let mut parts = cleaned
        .split(['x', 'X', '×'])
        .map(|p| p.trim().parse::<f32>().ok());

    let length = parts.next()??;
    let width = parts.next()??;
    let depth = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    if length <= 0.0 || width <= 0.0 || depth <= 0.0 {
        return None;
    }
    Some((length, width, depth))
}

/// Error type for report ingestion.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to parse report JSON: {0}")]
    Json(#[from] serde_json::Error),
}
