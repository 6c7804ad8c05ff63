//! Hexagon field layout: row and column counts, center placement, and the
//! bounding geometry of the field.
//!
//! All arithmetic happens in the canonical frame (rows along x). The
//! requested orientation is applied to the inputs once when the plan is
//! computed and to every output once when it is read back.
//!
//! ```text
//!     canonical frame, 3 rows × 4 columns
//!
//!     origin
//!       ┆ a ┆
//!       ·───⬡───⬡───⬡───⬡          row 0: x = origin + a + 2a·j
//!       ┆     ⬡───⬡───⬡───⬡        row 1: x = origin + 2a + 2a·j
//!       ·───⬡───⬡───⬡───⬡          row i: y = origin + i · separation
//! ```
//!
//! # Example
//!
//! ```
//! use hexfit::{best_fit, HexGrid, Orientation};
//!
//! let candidate = best_fit(30, 90).unwrap();
//! let plan = HexGrid::new(candidate)
//!     .orientation(Orientation::Vertical)
//!     .margins(10, 10)
//!     .half_pixel(true)
//!     .compute(1000, 800)
//!     .unwrap();
//!
//! assert_eq!(plan.centers().count(), plan.len());
//! ```

use crate::error::GridError;
use crate::geometry::{Point, Rect, Size};
use crate::label::Label;
use crate::math;
use crate::orientation::Orientation;
use crate::sample::Candidate;
use crate::vertex;

/// Layout request for one candidate.
///
/// Margins and offset are given in the caller's frame. Margins may be
/// negative to extend the field past the canvas edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexGrid {
    pub candidate: Candidate,
    pub orientation: Orientation,
    /// Minimal clearance left and right of the field.
    pub margin_x: i32,
    /// Minimal clearance above and below the field.
    pub margin_y: i32,
    /// Shift everything by half a pixel (odd stroke widths).
    pub half_pixel: bool,
    /// Translation added to every output coordinate.
    pub offset: (i32, i32),
}

impl HexGrid {
    /// Horizontal grid without margins, shift or offset.
    pub fn new(candidate: Candidate) -> Self {
        Self {
            candidate,
            orientation: Orientation::Horizontal,
            margin_x: 0,
            margin_y: 0,
            half_pixel: false,
            offset: (0, 0),
        }
    }

    /// Set the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the margins along x and y.
    pub fn margins(mut self, x: i32, y: i32) -> Self {
        self.margin_x = x;
        self.margin_y = y;
        self
    }

    /// Enable or disable the half-pixel shift.
    pub fn half_pixel(mut self, on: bool) -> Self {
        self.half_pixel = on;
        self
    }

    /// Translate the field, e.g. by a layer offset or a sample-sheet cell origin.
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.offset = (x, y);
        self
    }

    /// Lay the field out on a `canvas_w × canvas_h` canvas.
    ///
    /// Fails with [`GridError::InsufficientSpace`] when not even one row or
    /// one column fits.
    pub fn compute(&self, canvas_w: u32, canvas_h: u32) -> Result<LayoutPlan, GridError> {
        let o = self.orientation;
        let canvas = o.transform_dimensions(canvas_w, canvas_h);
        let (margin_x, margin_y) = o.transform_pair(self.margin_x, self.margin_y);
        let (offset_x, offset_y) = o.transform_pair(self.offset.0, self.offset.1);

        let w = canvas.width as f64;
        let h = canvas.height as f64;
        let a = self.candidate.apothem as f64;
        let sep = self.candidate.separation as f64;
        let mx = margin_x as f64;
        let my = margin_y as f64;

        // A row needs 2/3 of a pitch above its center and 2/3 below; one
        // third of a pitch on top of the full pitches covers both ends.
        let rows = whole_count((h - 2.0 * my - sep / 3.0) / sep);
        // Staggered rows need one more apothem of width.
        let cols = if rows > 1 {
            whole_count((w - 2.0 * mx - a) / (2.0 * a))
        } else {
            whole_count((w - 2.0 * mx) / (2.0 * a))
        };

        if rows == 0 || cols == 0 {
            log::warn!(
                "no room for a {}px hexagon on {canvas_w}x{canvas_h} (margins {}, {})",
                self.candidate.width(),
                self.margin_x,
                self.margin_y
            );
            return Err(GridError::InsufficientSpace {
                hexagon_width: self.candidate.width(),
                canvas: Size::new(canvas_w, canvas_h),
            });
        }

        let half = if self.half_pixel { 0.5 } else { 0.0 };
        let stagger = if rows > 1 { 1.0 } else { 0.0 };
        let origin = Point::new(
            math::floor((w - a * (2.0 * cols as f64 + stagger)) / 2.0) + half + offset_x as f64,
            math::floor((h - sep * (rows as f64 - 1.0)) / 2.0) + half + offset_y as f64,
        );

        log::trace!(
            "{}px hexagons: {rows} rows x {cols} cols, origin ({}, {}) {o:?}",
            self.candidate.width(),
            origin.x,
            origin.y
        );

        Ok(LayoutPlan {
            candidate: self.candidate,
            orientation: o,
            canvas: Size::new(canvas_w, canvas_h),
            rows,
            cols,
            origin,
            margins: (margin_x, margin_y),
            offset: (offset_x, offset_y),
            half_pixel: self.half_pixel,
        })
    }
}

/// Lay out `candidate` on a canvas; see [`HexGrid`].
pub fn layout(
    canvas_w: u32,
    canvas_h: u32,
    candidate: Candidate,
    margin_x: i32,
    margin_y: i32,
    orientation: Orientation,
    half_pixel: bool,
) -> Result<LayoutPlan, GridError> {
    HexGrid::new(candidate)
        .orientation(orientation)
        .margins(margin_x, margin_y)
        .half_pixel(half_pixel)
        .compute(canvas_w, canvas_h)
}

/// Floor a count, mapping anything below one to zero.
fn whole_count(v: f64) -> u32 {
    if v >= 1.0 { math::floor(v) as u32 } else { 0 }
}

/// A computed hexagon field.
///
/// Stored in the canonical frame; every accessor returns caller-frame
/// values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    candidate: Candidate,
    orientation: Orientation,
    canvas: Size,
    rows: u32,
    cols: u32,
    origin: Point,
    margins: (i32, i32),
    offset: (i32, i32),
    half_pixel: bool,
}

impl LayoutPlan {
    /// The candidate this field was laid out with.
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Orientation of the field.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Canvas dimensions the field was computed for.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Number of hexagon rows (along the stacking axis).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of hexagons per row.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total hexagon count, `rows × cols`.
    pub fn len(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Always false: a plan holds at least one hexagon.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-left corner of the occupied span, which centers the field on the
    /// canvas. Also the image-grid offset that aligns with hexagon centers.
    pub fn first_center_offset(&self) -> Point {
        self.orientation.transform_point(self.origin)
    }

    /// Center of hexagon `(row, col)`. Odd rows are shifted by one apothem.
    pub fn center(&self, row: u32, col: u32) -> Point {
        self.orientation
            .transform_point(canonical_center(&self.candidate, self.origin, row, col))
    }

    /// Centers row by row. Restart by calling again.
    pub fn centers(&self) -> Centers {
        Centers {
            candidate: self.candidate,
            orientation: self.orientation,
            origin: self.origin,
            cols: self.cols,
            index: 0,
            end: self.len(),
        }
    }

    /// Vertex sets of every hexagon, in the same order as [`centers`](Self::centers).
    pub fn hexagons(&self) -> Hexagons {
        Hexagons {
            centers: self.centers(),
        }
    }

    /// Minimal rectangle spanning the field plus margins, for a cropped layer.
    ///
    /// Height covers `rows − 1` pitches plus a rounded vertex radius above
    /// the first and below the last row.
    pub fn bounding_size(&self) -> Size {
        let (w, h) = self.canonical_bounds();
        self.orientation.transform_dimensions(w, h)
    }

    /// The cropped layer: [`bounding_size`](Self::bounding_size) centered on
    /// the canvas, translated by the offset.
    pub fn crop_rect(&self) -> Rect {
        let (bw, bh) = self.canonical_bounds();
        let canvas = self
            .orientation
            .transform_dimensions(self.canvas.width, self.canvas.height);
        let half = self.half_shift();
        let x = math::floor((canvas.width as f64 - bw as f64) / 2.0 + half) as i32;
        let y = math::floor((canvas.height as f64 - bh as f64) / 2.0 + half) as i32;
        self.orientation.transform_rect(Rect::new(
            x + self.offset.0,
            y + self.offset.1,
            bw,
            bh,
        ))
    }

    /// Image grid matching the hexagon centers.
    pub fn image_grid(&self) -> ImageGrid {
        let (sx, sy) = self
            .orientation
            .transform_pair(self.candidate.apothem, self.candidate.separation);
        ImageGrid {
            spacing: (sx, sy),
            offset: self.first_center_offset(),
        }
    }

    /// Label values for this field.
    pub fn label(&self) -> Label {
        Label::new(&self.candidate, self.orientation)
    }

    fn half_shift(&self) -> f64 {
        if self.half_pixel { 0.5 } else { 0.0 }
    }

    fn canonical_bounds(&self) -> (u32, u32) {
        let a = self.candidate.apothem as i64;
        let sep = self.candidate.separation as i64;
        let cols = self.cols as i64;
        let rows = self.rows as i64;
        let (mx, my) = (self.margins.0 as i64, self.margins.1 as i64);
        let shift = if self.half_pixel { 1 } else { 0 };

        let span_w = if rows > 1 { (2 * cols + 1) * a } else { 2 * cols * a };
        let vertex = math::round(2.0 / 3.0 * sep as f64) as i64;
        let span_h = (rows - 1) * sep + 2 * vertex;

        let w = span_w + 2 * mx + shift;
        let h = span_h + 2 * my + shift;
        (clamp_u32(w), clamp_u32(h))
    }
}

fn clamp_u32(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}

fn canonical_center(candidate: &Candidate, origin: Point, row: u32, col: u32) -> Point {
    let a = candidate.apothem as f64;
    let start = a * (1 + row % 2) as f64;
    Point::new(
        origin.x + 2.0 * a * col as f64 + start,
        origin.y + row as f64 * candidate.separation as f64,
    )
}

/// Spacing and offset for the host's image grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageGrid {
    /// Horizontal and vertical spacing in pixels.
    pub spacing: (u32, u32),
    /// Grid offset in pixels.
    pub offset: Point,
}

/// Iterator over hexagon centers, see [`LayoutPlan::centers`].
#[derive(Clone, Debug)]
pub struct Centers {
    candidate: Candidate,
    orientation: Orientation,
    origin: Point,
    cols: u32,
    index: usize,
    end: usize,
}

impl Iterator for Centers {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.end {
            return None;
        }
        let cols = self.cols as usize;
        let row = (self.index / cols) as u32;
        let col = (self.index % cols) as u32;
        self.index += 1;
        Some(
            self.orientation
                .transform_point(canonical_center(&self.candidate, self.origin, row, col)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Centers {}

impl core::iter::FusedIterator for Centers {}

/// Iterator over hexagon vertex sets, see [`LayoutPlan::hexagons`].
#[derive(Clone, Debug)]
pub struct Hexagons {
    centers: Centers,
}

impl Iterator for Hexagons {
    type Item = [Point; 6];

    fn next(&mut self) -> Option<[Point; 6]> {
        let center = self.centers.next()?;
        let c = &self.centers.candidate;
        Some(vertex::hexagon_vertices(
            center,
            c.apothem as f64,
            c.radius,
            self.centers.orientation,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.centers.size_hint()
    }
}

impl ExactSizeIterator for Hexagons {}
