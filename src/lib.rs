//! # XY-Cut reading order
//!
//! Recovers the order in which a human reads the regions of a page, given
//! only their axis-aligned bounding boxes.
//!
//! Boxes are projected onto the X and Y axes; whitespace valleys at least
//! `min_gap_ratio` of the page wide split the page into columns or rows, and
//! each part is cut again until nothing splits. Clusters that cannot be
//! separated fall back to a line-aware positional order.
//!
//! ```
//! use xycut_reading_order::{LayoutBox, XYCut};
//!
//! let boxes = [
//!     LayoutBox::new(600.0, 0.0, 700.0, 500.0),
//!     LayoutBox::new(0.0, 0.0, 100.0, 500.0),
//! ];
//! let order = XYCut::default().sort(&boxes, 1000, 1000);
//! assert_eq!(order.as_slice(), &[1, 0]);
//! ```

pub mod core;
pub mod direction;
pub mod error;
pub mod histogram;
pub mod layout;
pub mod order;
pub mod traits;

pub use self::core::{sort_reading_order, XYCut, XYCutConfig};
pub use direction::{detect_direction, Direction};
pub use error::{Result, XYCutError};
pub use histogram::{project, split_profile, Axis, Segment};
pub use layout::{LayoutBox, LayoutCategory, PageExtent};
pub use order::ReadingOrder;
pub use traits::BoundingBox;
