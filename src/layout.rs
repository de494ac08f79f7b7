//! Layout data model consumed by the sorter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::traits::BoundingBox;

/// Region classes produced by the upstream layout detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutCategory {
    #[default]
    Text,
    Title,
    Figure,
    FigureCaption,
    Table,
    TableCaption,
    TableFootnote,
    Header,
    Footer,
    Reference,
    Equation,
    InterlineEquation,
    Stamp,
    Code,
    Toc,
    Abstract,
    Content,
    List,
    Index,
    Separator,
    #[serde(other)]
    Unknown,
}

impl LayoutCategory {
    pub const ALL: [LayoutCategory; 21] = [
        LayoutCategory::Text,
        LayoutCategory::Title,
        LayoutCategory::Figure,
        LayoutCategory::FigureCaption,
        LayoutCategory::Table,
        LayoutCategory::TableCaption,
        LayoutCategory::TableFootnote,
        LayoutCategory::Header,
        LayoutCategory::Footer,
        LayoutCategory::Reference,
        LayoutCategory::Equation,
        LayoutCategory::InterlineEquation,
        LayoutCategory::Stamp,
        LayoutCategory::Code,
        LayoutCategory::Toc,
        LayoutCategory::Abstract,
        LayoutCategory::Content,
        LayoutCategory::List,
        LayoutCategory::Index,
        LayoutCategory::Separator,
        LayoutCategory::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutCategory::Text => "text",
            LayoutCategory::Title => "title",
            LayoutCategory::Figure => "figure",
            LayoutCategory::FigureCaption => "figure_caption",
            LayoutCategory::Table => "table",
            LayoutCategory::TableCaption => "table_caption",
            LayoutCategory::TableFootnote => "table_footnote",
            LayoutCategory::Header => "header",
            LayoutCategory::Footer => "footer",
            LayoutCategory::Reference => "reference",
            LayoutCategory::Equation => "equation",
            LayoutCategory::InterlineEquation => "interline_equation",
            LayoutCategory::Stamp => "stamp",
            LayoutCategory::Code => "code",
            LayoutCategory::Toc => "toc",
            LayoutCategory::Abstract => "abstract",
            LayoutCategory::Content => "content",
            LayoutCategory::List => "list",
            LayoutCategory::Index => "index",
            LayoutCategory::Separator => "separator",
            LayoutCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LayoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutCategory {
    type Err = std::convert::Infallible;

    /// Unrecognised names map to `Unknown`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LayoutCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or(LayoutCategory::Unknown))
    }
}

/// A detected region on a page, in page pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    #[serde(default)]
    pub category: LayoutCategory,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
    /// Position in the detector's output. Carried for the caller; the sorter
    /// identifies boxes by their position in the slice it is given.
    #[serde(default)]
    pub index: usize,
}

fn default_confidence() -> f32 {
    1.0
}

impl LayoutBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            category: LayoutCategory::Text,
            confidence: default_confidence(),
            index: 0,
        }
    }

    pub fn with_category(mut self, category: LayoutCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

impl BoundingBox for LayoutBox {
    fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x0, self.y0, self.x1, self.y1)
    }
}

/// Page dimensions in the same units as the boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageExtent {
    pub width: u32,
    pub height: u32,
}

impl PageExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_round_trip() {
        for category in LayoutCategory::ALL {
            assert_eq!(category.as_str().parse::<LayoutCategory>(), Ok(category));
        }
        assert_eq!("bogus".parse::<LayoutCategory>(), Ok(LayoutCategory::Unknown));
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&LayoutCategory::InterlineEquation).unwrap();
        assert_eq!(json, "\"interline_equation\"");

        let parsed: LayoutCategory = serde_json::from_str("\"sidebar\"").unwrap();
        assert_eq!(parsed, LayoutCategory::Unknown);
    }

    #[test]
    fn test_box_defaults_from_json() {
        let b: LayoutBox = serde_json::from_str(r#"{"x0":1,"y0":2,"x1":11,"y1":7}"#).unwrap();
        assert_eq!(b.category, LayoutCategory::Text);
        assert_eq!(b.confidence, 1.0);
        assert_eq!(b.index, 0);
        assert_eq!(b.area(), 50.0);
    }

    #[test]
    fn test_builders() {
        let b = LayoutBox::new(0.0, 0.0, 10.0, 10.0)
            .with_category(LayoutCategory::Table)
            .with_index(7);
        assert_eq!(b.category, LayoutCategory::Table);
        assert_eq!(b.index, 7);
        assert_eq!(b.center(), (5.0, 5.0));
    }
}
