use serde::{Deserialize, Serialize};

use crate::traits::BoundingBox;

/// Aspect ratio at which a box counts as a horizontal text line
const WIDE_ASPECT_RATIO: f32 = 1.5;

/// Reading direction of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right, top to bottom. Columns are cut first.
    Horizontal,
    /// Top to bottom, right to left, as in vertical CJK. Rows are cut first.
    Vertical,
    /// Resolved once per sort from box aspect ratios
    #[default]
    Auto,
}

impl Direction {
    /// Resolve `Auto` against `elements`; explicit directions pass through
    pub fn resolve<T: BoundingBox>(self, elements: &[T]) -> Direction {
        match self {
            Direction::Auto => detect_direction(elements),
            explicit => explicit,
        }
    }
}

/// Majority vote on aspect ratio.
///
/// Boxes with zero (or negative) width or height do not vote. When most of
/// the voting boxes are at least 1.5 times wider than tall the page reads
/// horizontally, otherwise vertically. Never returns `Auto`.
pub fn detect_direction<T: BoundingBox>(elements: &[T]) -> Direction {
    let mut wide = 0usize;
    let mut considered = 0usize;

    for element in elements {
        let width = element.width();
        let height = element.height();
        if width > 0.0 && height > 0.0 {
            if width >= height * WIDE_ASPECT_RATIO {
                wide += 1;
            }
            considered += 1;
        }
    }

    if considered == 0 {
        return Direction::Horizontal;
    }

    let ratio = wide as f32 / considered as f32;
    if ratio >= 0.5 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    }
}
