//! Girdle outline functions
//!
//! Radius-vs-angle profile of the girdle for each shape family, as a
//! dimensionless multiplier on the mean girdle radius. The semi-axes are
//! normalized so that the outline reproduces the measured caliper
//! extremes exactly: `outline(0) * R == length/2` and
//! `outline(pi/2) * R == width/2` for any aspect ratio.

use crate::shape::ShapeCategory;

/// Threshold below which fractional powers and divisions are treated as
/// singular and replaced by the axis value.
const SINGULARITY_EPSILON: f32 = 1e-10;

/// Superellipse exponent for cushion outlines (soft corners).
const CUSHION_EXPONENT: f32 = 2.5;

/// Superellipse exponent for emerald/princess outlines (sharp corners).
const EMERALD_EXPONENT: f32 = 4.0;

/// Pear taper: the minor semi-axis shrinks to this fraction near the
/// point (theta = pi) and stays full near the head (theta = 0).
const PEAR_TAPER_MIN: f32 = 0.55;

/// Normalized semi-axes for an aspect ratio `r = length/width`.
///
/// `a = 2r/(r+1)` along theta = 0, `b = 2/(r+1)` along theta = pi/2;
/// their mean is 1, so they scale the mean girdle radius back to the
/// exact caliper extremes.
pub fn semi_axes(aspect_ratio: f32) -> (f32, f32) {
    let a = 2.0 * aspect_ratio / (aspect_ratio + 1.0);
    let b = 2.0 / (aspect_ratio + 1.0);
    (a, b)
}

/// Outline radius multiplier at `theta` radians for the given shape.
///
/// Pure and deterministic: identical inputs yield bit-identical output.
/// The aspect ratio is ignored for round stones.
pub fn outline_radius(theta: f32, shape: ShapeCategory, aspect_ratio: f32) -> f32 {
    let (a, b) = semi_axes(aspect_ratio);
    match shape {
        ShapeCategory::Round => 1.0,
        ShapeCategory::Cushion => superellipse(theta, a, b, CUSHION_EXPONENT),
        ShapeCategory::Emerald => superellipse(theta, a, b, EMERALD_EXPONENT),
        // Marquise reuses the plain ellipse; a pointed-oval outline is a
        // known simplification kept deliberately.
        ShapeCategory::Oval | ShapeCategory::Marquise => ellipse(theta, a, b),
        ShapeCategory::Pear => pear(theta, a, b),
    }
}

/// Superellipse radius `((|cos|/a)^n + (|sin|/b)^n)^(-1/n)`.
///
/// When both terms vanish the fractional negative power would blow up,
/// so the major semi-axis is returned instead.
fn superellipse(theta: f32, a: f32, b: f32, exponent: f32) -> f32 {
    let cos_term = (theta.cos().abs() / a).powf(exponent);
    let sin_term = (theta.sin().abs() / b).powf(exponent);
    let sum = cos_term + sin_term;
    if sum < SINGULARITY_EPSILON {
        return a;
    }
    sum.powf(-1.0 / exponent)
}

/// True ellipse radius `ab / sqrt((b cos)^2 + (a sin)^2)`.
fn ellipse(theta: f32, a: f32, b: f32) -> f32 {
    let denominator = ((b * theta.cos()).powi(2) + (a * theta.sin()).powi(2)).sqrt();
    a * b / denominator
}

/// Pear outline: ellipse with the minor semi-axis tapered per angle,
/// full width at theta = 0 narrowing toward the point at theta = pi.
fn pear(theta: f32, a: f32, b: f32) -> f32 {
    let taper = b * (PEAR_TAPER_MIN + (1.0 - PEAR_TAPER_MIN) * (0.5 + 0.5 * theta.cos()));
    let denominator = ((taper * theta.cos()).powi(2) + (a * theta.sin()).powi(2)).sqrt();
    if denominator < SINGULARITY_EPSILON {
        return a;
    }
    a * taper / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const SHAPES: [ShapeCategory; 6] = [
        ShapeCategory::Round,
        ShapeCategory::Cushion,
        ShapeCategory::Oval,
        ShapeCategory::Pear,
        ShapeCategory::Marquise,
        ShapeCategory::Emerald,
    ];

    #[test]
    fn test_round_is_unit_everywhere() {
        for aspect in [0.8, 1.0, 1.2, 2.0] {
            for i in 0..64 {
                let theta = TAU * i as f32 / 64.0;
                assert_eq!(outline_radius(theta, ShapeCategory::Round, aspect), 1.0);
            }
        }
    }

    #[test]
    fn test_axis_exactness() {
        // outline(0) must equal the normalized major semi-axis and
        // outline(pi/2) the minor one, so scaling by the mean radius
        // reproduces length/2 and width/2 exactly.
        for aspect in [1.0, 1.2, 1.5, 2.0] {
            let (a, b) = semi_axes(aspect);
            for shape in [
                ShapeCategory::Cushion,
                ShapeCategory::Oval,
                ShapeCategory::Marquise,
                ShapeCategory::Emerald,
            ] {
                assert!(
                    (outline_radius(0.0, shape, aspect) - a).abs() < 1e-5,
                    "{:?} aspect {} at 0",
                    shape,
                    aspect
                );
                assert!(
                    (outline_radius(FRAC_PI_2, shape, aspect) - b).abs() < 1e-5,
                    "{:?} aspect {} at pi/2",
                    shape,
                    aspect
                );
            }
            // Pear keeps its full width only at the head.
            assert!((outline_radius(0.0, ShapeCategory::Pear, aspect) - a).abs() < 1e-5);
        }
    }

    #[test]
    fn test_semi_axes_reproduce_calipers() {
        // For a 7.8 x 6.5 stone the mean radius times the semi-axes must
        // give back the half-length and half-width.
        let (length, width) = (7.8_f32, 6.5_f32);
        let radius = (length + width) / 4.0;
        let (a, b) = semi_axes(length / width);
        assert!((a * radius - length / 2.0).abs() < 1e-4);
        assert!((b * radius - width / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_cushion_diagonal_between_axis_extremes() {
        let aspect = 1.2;
        let (a, b) = semi_axes(aspect);
        let diagonal = outline_radius(PI / 4.0, ShapeCategory::Cushion, aspect);
        assert!(diagonal > b && diagonal < a, "diagonal {} not in ({}, {})", diagonal, b, a);
    }

    #[test]
    fn test_emerald_corners_sharper_than_cushion() {
        // A higher superellipse exponent keeps more radius at the
        // diagonal, approaching the rectangular corner.
        let aspect = 1.0;
        let cushion = outline_radius(PI / 4.0, ShapeCategory::Cushion, aspect);
        let emerald = outline_radius(PI / 4.0, ShapeCategory::Emerald, aspect);
        assert!(emerald > cushion);
    }

    #[test]
    fn test_pear_narrows_toward_point() {
        // The taper pulls the outline inside the plain ellipse near the
        // point and leaves it near full width by the head.
        let aspect = 1.5;
        let theta = PI - PI / 8.0;
        let pear_point = outline_radius(theta, ShapeCategory::Pear, aspect);
        let oval_point = outline_radius(theta, ShapeCategory::Oval, aspect);
        assert!(pear_point < oval_point);

        let pear_head = outline_radius(PI / 8.0, ShapeCategory::Pear, aspect);
        let oval_head = outline_radius(PI / 8.0, ShapeCategory::Oval, aspect);
        assert!((pear_head - oval_head).abs() / oval_head < 0.05);
    }

    #[test]
    fn test_marquise_matches_oval() {
        for i in 0..32 {
            let theta = TAU * i as f32 / 32.0;
            assert_eq!(
                outline_radius(theta, ShapeCategory::Marquise, 1.8),
                outline_radius(theta, ShapeCategory::Oval, 1.8)
            );
        }
    }

    #[test]
    fn test_outline_is_finite_everywhere() {
        for shape in SHAPES {
            for aspect in [0.5, 1.0, 1.33, 3.0] {
                for i in 0..720 {
                    let theta = TAU * i as f32 / 720.0;
                    let r = outline_radius(theta, shape, aspect);
                    assert!(r.is_finite() && r > 0.0, "{:?} at {}: {}", shape, theta, r);
                }
            }
        }
    }

    #[test]
    fn test_outline_is_deterministic() {
        for shape in SHAPES {
            let x = outline_radius(1.2345, shape, 1.37);
            let y = outline_radius(1.2345, shape, 1.37);
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}
