//! Shape classification
//!
//! Maps the free-text "SHAPE AND CUT" label from a grading report onto
//! one of the six outline families the generator can model. Variants
//! without their own outline borrow the closest family: princess cuts
//! share the emerald superellipse, radiants the cushion one, and hearts
//! approximate as pears.

/// Outline family of a faceted gem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    Round,
    Cushion,
    Oval,
    Pear,
    Marquise,
    Emerald,
}

/// Keyword table in priority order. A label containing several keywords
/// resolves to the first entry here, not the first occurrence in the
/// label.
const KEYWORDS: [(&str, ShapeCategory); 8] = [
    ("CUSHION", ShapeCategory::Cushion),
    ("OVAL", ShapeCategory::Oval),
    ("PEAR", ShapeCategory::Pear),
    ("MARQUISE", ShapeCategory::Marquise),
    ("EMERALD", ShapeCategory::Emerald),
    ("PRINCESS", ShapeCategory::Emerald),
    ("RADIANT", ShapeCategory::Cushion),
    ("HEART", ShapeCategory::Pear),
];

impl ShapeCategory {
    /// Classify a shape label.
    ///
    /// Case-insensitive substring match against the keyword table; a
    /// label matching nothing is treated as a round brilliant. Total:
    /// every string yields exactly one category.
    pub fn classify(label: &str) -> Self {
        let label = label.to_ascii_uppercase();
        for (keyword, category) in KEYWORDS {
            if label.contains(keyword) {
                return category;
            }
        }
        ShapeCategory::Round
    }
}
