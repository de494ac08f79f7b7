use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::direction::Direction;
use crate::error::{Result, XYCutError};
use crate::histogram::{project, split_profile, Axis, Segment};
use crate::layout::PageExtent;
use crate::order::ReadingOrder;
use crate::traits::BoundingBox;

/// Configuration for XY-Cut algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XYCutConfig {
    /// Reading direction; `Auto` is resolved once from the whole page
    pub direction: Direction,

    /// Minimum gap, as a fraction of the page dimension, that separates two
    /// segments. Narrower valleys do not split.
    pub min_gap_ratio: f32,

    /// Projection count at or below which a pixel counts as empty.
    /// Truncated to an integer.
    pub min_value_ratio: f32,
}

impl Default for XYCutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Auto,
            min_gap_ratio: 0.05,
            min_value_ratio: 0.0,
        }
    }
}

impl XYCutConfig {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_min_gap_ratio(mut self, ratio: f32) -> Self {
        self.min_gap_ratio = ratio;
        self
    }

    pub fn with_min_value_ratio(mut self, ratio: f32) -> Self {
        self.min_value_ratio = ratio;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("min_gap_ratio", self.min_gap_ratio),
            ("min_value_ratio", self.min_value_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(XYCutError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }

    /// Minimum gap in pixels for a page dimension, never below 1
    fn min_gap(&self, length: usize) -> usize {
        ((length as f32 * self.min_gap_ratio) as usize).max(1)
    }

    fn min_value(&self) -> u32 {
        self.min_value_ratio as u32
    }
}

/// Tie-break applied to a leaf cluster that no projection could split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeafOrder {
    /// Rows top to bottom, left to right within a row. A row is boxes whose
    /// vertical centers differ by less than half the smaller height.
    RowsLeftToRight,
    /// Columns right to left, top to bottom within a column. A column is
    /// boxes whose horizontal centers differ by less than half the smaller
    /// width.
    ColumnsRightToLeft,
}

/// Axis order and leaf tie-break for one reading direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CutPlan {
    primary: Axis,
    secondary: Axis,
    leaf: LeafOrder,
}

impl CutPlan {
    fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Vertical => Self {
                primary: Axis::Y,
                secondary: Axis::X,
                leaf: LeafOrder::ColumnsRightToLeft,
            },
            // Auto is resolved before a plan is built
            Direction::Horizontal | Direction::Auto => Self {
                primary: Axis::X,
                secondary: Axis::Y,
                leaf: LeafOrder::RowsLeftToRight,
            },
        }
    }
}

/// Reading order sorter
#[derive(Debug, Clone, Default)]
pub struct XYCut {
    config: XYCutConfig,
}

impl XYCut {
    pub fn new(config: XYCutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &XYCutConfig {
        &self.config
    }

    /// Main entry point: compute reading order for elements on a page of
    /// `page_width` x `page_height` pixels.
    ///
    /// Returns positions into `elements`, each exactly once.
    pub fn sort<T: BoundingBox>(
        &self,
        elements: &[T],
        page_width: u32,
        page_height: u32,
    ) -> ReadingOrder {
        if elements.is_empty() {
            return ReadingOrder::default();
        }

        let direction = self.config.direction.resolve(elements);
        debug!(
            boxes = elements.len(),
            page_width,
            page_height,
            ?direction,
            "xy-cut sort"
        );

        let cutter = Cutter {
            elements,
            plan: CutPlan::for_direction(direction),
            page_width: page_width as usize,
            page_height: page_height as usize,
            min_gap_x: self.config.min_gap(page_width as usize),
            min_gap_y: self.config.min_gap(page_height as usize),
            min_value: self.config.min_value(),
        };

        let mut order = Vec::with_capacity(elements.len());
        cutter.cut((0..elements.len()).collect(), &mut order);
        ReadingOrder::new_unchecked(order)
    }

    pub fn sort_page<T: BoundingBox>(&self, elements: &[T], page: PageExtent) -> ReadingOrder {
        self.sort(elements, page.width, page.height)
    }
}

/// Validate `config` and sort `elements` in one call
pub fn sort_reading_order<T: BoundingBox>(
    elements: &[T],
    page: PageExtent,
    config: &XYCutConfig,
) -> Result<ReadingOrder> {
    let sorter = XYCut::new(config.clone())?;
    Ok(sorter.sort_page(elements, page))
}

/// State for one sort call. Each branch owns its index list.
struct Cutter<'a, T> {
    elements: &'a [T],
    plan: CutPlan,
    page_width: usize,
    page_height: usize,
    min_gap_x: usize,
    min_gap_y: usize,
    min_value: u32,
}

impl<T: BoundingBox> Cutter<'_, T> {
    fn cut(&self, indices: Vec<usize>, order: &mut Vec<usize>) {
        match indices.len() {
            0 => return,
            1 => {
                order.push(indices[0]);
                return;
            }
            _ => {}
        }

        for axis in [self.plan.primary, self.plan.secondary] {
            if let Some(groups) = self.split(&indices, axis) {
                trace!(?axis, boxes = indices.len(), groups = groups.len(), "cut");
                for group in groups {
                    self.cut(group, order);
                }
                return;
            }
        }

        trace!(boxes = indices.len(), "leaf cluster");
        self.order_leaf(indices, order);
    }

    /// Partition `indices` by the projection segments along `axis`.
    ///
    /// Returns `None` unless at least two non-empty groups result.
    fn split(&self, indices: &[usize], axis: Axis) -> Option<Vec<Vec<usize>>> {
        let (length, min_gap) = match axis {
            Axis::X => (self.page_width, self.min_gap_x),
            Axis::Y => (self.page_height, self.min_gap_y),
        };

        let subset: Vec<&T> = indices.iter().map(|&i| &self.elements[i]).collect();
        let histogram = project(&subset, axis, length);
        let segments = split_profile(&histogram, self.min_value, min_gap);
        if segments.len() < 2 {
            return None;
        }

        let mut groups = vec![Vec::new(); segments.len()];
        for &index in indices {
            let center = axis.center(&self.elements[index]);
            groups[segment_for(&segments, center)].push(index);
        }
        groups.retain(|group| !group.is_empty());

        (groups.len() >= 2).then_some(groups)
    }

    /// Linearize a cluster no projection could split.
    ///
    /// The same-line relation is not transitive, so this inserts one box at
    /// a time instead of relying on a total-order sort.
    fn order_leaf(&self, mut indices: Vec<usize>, order: &mut Vec<usize>) {
        indices.sort_unstable();

        let mut leaf: Vec<usize> = Vec::with_capacity(indices.len());
        for index in indices {
            let mut pos = leaf.len();
            while pos > 0 && self.compare(index, leaf[pos - 1]) == Ordering::Less {
                pos -= 1;
            }
            leaf.insert(pos, index);
        }

        order.extend(leaf);
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        let (ea, eb) = (&self.elements[a], &self.elements[b]);
        let (ax, ay) = ea.center();
        let (bx, by) = eb.center();

        let positional = match self.plan.leaf {
            LeafOrder::RowsLeftToRight => {
                let threshold = ea.height().min(eb.height()) * 0.5;
                if (ay - by).abs() < threshold {
                    ax.total_cmp(&bx).then_with(|| ay.total_cmp(&by))
                } else {
                    ay.total_cmp(&by).then_with(|| ax.total_cmp(&bx))
                }
            }
            LeafOrder::ColumnsRightToLeft => {
                let threshold = ea.width().min(eb.width()) * 0.5;
                if (ax - bx).abs() < threshold {
                    ay.total_cmp(&by).then_with(|| bx.total_cmp(&ax))
                } else {
                    bx.total_cmp(&ax).then_with(|| ay.total_cmp(&by))
                }
            }
        };

        positional.then(a.cmp(&b))
    }
}

/// Segment holding `coord`, or the nearest one (earliest on ties) when
/// truncation or a degenerate box leaves the center outside every segment
fn segment_for(segments: &[Segment], coord: f32) -> usize {
    if let Some(pos) = segments.iter().position(|s| s.contains(coord)) {
        return pos;
    }

    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (pos, segment) in segments.iter().enumerate() {
        let distance = segment.distance_to(coord);
        if distance < best_distance {
            best = pos;
            best_distance = distance;
        }
    }
    best
}
