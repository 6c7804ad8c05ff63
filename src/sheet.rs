//! Sample sheets: several candidate sizes side by side for comparison.
//!
//! The best `n` candidates are re-ordered by apothem and each one is laid
//! out in its own square cell. Cells come from [`pack`], so they are as
//! large as the canvas allows. Inside a cell the margins are pulled in by
//! one and a half apothems, letting the field bleed past the cell edges so
//! every sample reads as a window onto an endless grid.

use alloc::vec::Vec;

use crate::error::GridError;
use crate::geometry::Size;
use crate::label::Label;
use crate::layout::{HexGrid, LayoutPlan};
use crate::math;
use crate::orientation::Orientation;
use crate::pack::{Packing, pack};
use crate::sample::{Candidate, Candidates};

/// Sample sheet request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SampleSheet {
    /// Number of samples wanted; capped at the number of candidates.
    pub samples: u32,
    /// Stroke width the host will draw with.
    pub stroke_width: u32,
    pub orientation: Orientation,
}

impl SampleSheet {
    /// Sheet of `samples` cells, 2px stroke, horizontal grids.
    pub fn new(samples: u32) -> Self {
        Self {
            samples,
            stroke_width: 2,
            orientation: Orientation::Horizontal,
        }
    }

    /// Set the stroke width.
    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the orientation of every sample.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Lay out the sheet on a `canvas_w × canvas_h` canvas.
    ///
    /// Fails when `candidates` is empty or when either canvas side is zero.
    /// A cell too small for its hexagon keeps the error in
    /// [`SheetCell::layout`].
    pub fn compute(
        &self,
        candidates: &Candidates,
        canvas_w: u32,
        canvas_h: u32,
    ) -> Result<SheetPlan, GridError> {
        let best = candidates.best()?;
        let canvas = Size::new(canvas_w, canvas_h);
        if canvas.is_empty() {
            log::warn!("no room for a sample sheet on a {canvas} canvas");
            return Err(GridError::InsufficientSpace {
                hexagon_width: best.width(),
                canvas,
            });
        }
        let count = (self.samples.max(1) as usize).min(candidates.len());
        let picked = candidates.curated(count);
        let packing = pack(canvas_w as f64, canvas_h as f64, count as u32);

        let cells = picked
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| self.cell(i as u32, candidate, &packing))
            .collect();

        Ok(SheetPlan {
            packing,
            stroke_width: self.stroke_width,
            cells,
        })
    }

    fn cell(&self, index: u32, candidate: Candidate, packing: &Packing) -> SheetCell {
        let (x, y) = packing.cell_origin(index);
        let size = packing.cell_size;
        let margin = (self.stroke_width / 2) as i32 - (candidate.apothem * 3 / 2) as i32;
        let layout = HexGrid::new(candidate)
            .orientation(self.orientation)
            .margins(margin, margin)
            .half_pixel(self.stroke_width % 2 == 1)
            .offset(x as i32, y as i32)
            .compute(size, size);

        let inset = math::floor(0.5 * math::sqrt(size as f64)) as u32 + self.stroke_width;
        SheetCell {
            index,
            candidate,
            origin: (x, y),
            size,
            layout,
            label: Label::new(&candidate, self.orientation),
            caption: Caption {
                position: (x + inset, y + inset),
                font_size: 24.0 * size as f64 / 500.0 + 6.0,
            },
        }
    }
}

/// A computed sample sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetPlan {
    /// Cell grid chosen by the packer.
    pub packing: Packing,
    /// Stroke width the sheet was planned for.
    pub stroke_width: u32,
    /// One cell per sample, by ascending apothem.
    pub cells: Vec<SheetCell>,
}

impl SheetPlan {
    /// Area covered by the cell grid, `cell · cols × cell · rows`.
    pub fn area(&self) -> Size {
        let p = &self.packing;
        Size::new(p.cell_size * p.cols, p.cell_size * p.rows)
    }

    /// Cells whose layout succeeded.
    pub fn layouts(&self) -> impl Iterator<Item = &LayoutPlan> {
        self.cells.iter().filter_map(|c| c.layout.as_ref().ok())
    }
}

/// One sample on the sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetCell {
    /// Position on the sheet, row-major.
    pub index: u32,
    pub candidate: Candidate,
    /// Top-left corner of the cell.
    pub origin: (u32, u32),
    /// Side of the square cell.
    pub size: u32,
    /// The field, already translated to the cell origin.
    pub layout: Result<LayoutPlan, GridError>,
    pub label: Label,
    /// Where the host puts the label text block.
    pub caption: Caption,
}

/// Placement of a cell's text block.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Caption {
    /// Top-left corner of the text.
    pub position: (u32, u32),
    /// Font size in pixels, scaled with the cell.
    pub font_size: f64,
}
