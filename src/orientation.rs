//! Grid orientation and the canonical-frame transform.
//!
//! Every formula in the layout engine is written once, for rows that run
//! along the x axis. A vertical grid is computed in that same canonical
//! frame and transposed on the way in and on the way out. Transposition is
//! its own inverse, so the same mapping serves both directions.

use crate::geometry::{Point, Rect, Size};

/// Direction along which hexagon rows stack.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Rows run along x; hexagon width is measured horizontally.
    #[default]
    Horizontal,
    /// Rows run along y; hexagon width is measured vertically.
    Vertical,
}

impl Orientation {
    /// Both orientations.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Whether the caller frame is the transpose of the canonical frame.
    pub fn swaps_axes(self) -> bool {
        self == Self::Vertical
    }

    /// Exchange a pair when this orientation swaps axes.
    pub fn transform_pair<T>(self, a: T, b: T) -> (T, T) {
        if self.swaps_axes() { (b, a) } else { (a, b) }
    }

    /// Map dimensions between the caller frame and the canonical frame.
    pub fn transform_dimensions(self, w: u32, h: u32) -> Size {
        let (w, h) = self.transform_pair(w, h);
        Size::new(w, h)
    }

    /// Map a point between the caller frame and the canonical frame.
    pub fn transform_point(self, p: Point) -> Point {
        if self.swaps_axes() { p.transposed() } else { p }
    }

    /// Map a rectangle between the caller frame and the canonical frame.
    pub fn transform_rect(self, r: Rect) -> Rect {
        if self.swaps_axes() {
            Rect::new(r.y, r.x, r.height, r.width)
        } else {
            r
        }
    }
}
