use crate::traits::BoundingBox;

/// Projection axis. `X` counts coverage per pixel column, `Y` per pixel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Box span along this axis as (start, end)
    pub fn span<T: BoundingBox + ?Sized>(self, element: &T) -> (f32, f32) {
        let (x0, y0, x1, y1) = element.bounds();
        match self {
            Axis::X => (x0, x1),
            Axis::Y => (y0, y1),
        }
    }

    /// Box center coordinate along this axis
    pub fn center<T: BoundingBox + ?Sized>(self, element: &T) -> f32 {
        let (cx, cy) = element.center();
        match self {
            Axis::X => cx,
            Axis::Y => cy,
        }
    }
}

/// Half-open run `[start, end)` of occupied histogram bins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, coord: f32) -> bool {
        coord >= self.start as f32 && coord < self.end as f32
    }

    /// Distance from `coord` to the nearest point of the segment, 0 inside it
    pub fn distance_to(&self, coord: f32) -> f32 {
        if coord < self.start as f32 {
            self.start as f32 - coord
        } else if coord >= self.end as f32 {
            coord - self.end as f32
        } else {
            0.0
        }
    }
}

/// Build a coverage histogram of `length` bins along `axis`.
///
/// Each bin counts how many elements cover that pixel. Element edges are
/// truncated toward zero and clipped to `[0, length)`; anything outside the
/// page is dropped.
pub fn project<T: BoundingBox>(elements: &[T], axis: Axis, length: usize) -> Vec<u32> {
    let mut histogram = vec![0u32; length];

    for element in elements {
        let (lo, hi) = axis.span(element);
        let start = (lo as i64).max(0) as usize;
        let end = (hi as i64).clamp(0, length as i64) as usize;

        for bin in histogram.iter_mut().take(end).skip(start) {
            *bin += 1;
        }
    }

    histogram
}

/// Split a projection profile at gaps of at least `min_gap` empty bins.
///
/// A bin is occupied when its count is strictly greater than `min_value`.
/// Shorter gaps stay inside the current segment. Segment ends sit where the
/// occupied run stopped, so separating whitespace is never included.
pub fn split_profile(histogram: &[u32], min_value: u32, min_gap: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current_start = None;
    let mut gap = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        if count > min_value {
            if current_start.is_none() {
                current_start = Some(i);
            }
            gap = 0;
        } else if let Some(start) = current_start {
            gap += 1;
            if gap >= min_gap {
                segments.push(Segment::new(start, i + 1 - gap));
                current_start = None;
                gap = 0;
            }
        }
    }

    // Flush the trailing segment
    if let Some(start) = current_start {
        segments.push(Segment::new(start, histogram.len()));
    }

    segments
}
