//! Normalize [`Params`] into a [`GridRequest`] and run it.

use super::parse::{MARGIN, MAX_WIDTH, MIN_WIDTH, SAMPLES, STROKE_WIDTH};
use super::request::{GridRequest, OutputKind, Params};
use crate::error::GridError;
use crate::layout::{HexGrid, LayoutPlan};
use crate::sample::{Candidate, apothem_range, best_fit, sample};
use crate::sheet::{SampleSheet, SheetPlan};

const DEFAULT_SAMPLES: i32 = 6;
const DEFAULT_MIN_WIDTH: i32 = 30;
const DEFAULT_MAX_WIDTH: i32 = 90;
const DEFAULT_STROKE_WIDTH: i32 = 2;

impl Params {
    /// Fill in defaults and normalize.
    ///
    /// Values set directly on the struct (bypassing the parser) are clamped
    /// to the same ranges. The width bounds become even, `max == 0` means
    /// exactly `min`, and inverted bounds are swapped.
    pub fn resolve(&self) -> GridRequest {
        let clamp = |v: Option<i32>, default: i32, range: core::ops::RangeInclusive<i32>| {
            v.unwrap_or(default).clamp(*range.start(), *range.end())
        };

        let min = clamp(self.min_width, DEFAULT_MIN_WIDTH, MIN_WIDTH) as u32;
        let max = clamp(self.max_width, DEFAULT_MAX_WIDTH, MAX_WIDTH) as u32;
        let mut min_width = min.div_ceil(2) * 2;
        let mut max_width = max / 2 * 2;
        if max_width == 0 {
            max_width = min_width;
        }
        if max_width < min_width {
            core::mem::swap(&mut min_width, &mut max_width);
        }

        let stroke_width = clamp(self.stroke_width, DEFAULT_STROKE_WIDTH, STROKE_WIDTH) as u32;
        let grow = (stroke_width / 2) as i32;

        let distinct = apothem_range(min_width, max_width).count() as u32;
        let samples = (clamp(self.samples, DEFAULT_SAMPLES, SAMPLES) as u32).min(distinct.max(1));

        let request = GridRequest {
            output: self.output.unwrap_or_default(),
            samples,
            orientation: self.orientation.unwrap_or_default(),
            min_width,
            max_width,
            stroke_width,
            margin_x: clamp(self.margin_x, 0, MARGIN) + grow,
            margin_y: clamp(self.margin_y, 0, MARGIN) + grow,
            half_pixel: stroke_width % 2 == 1,
            color: self.color.unwrap_or_default(),
            crop: self.crop.unwrap_or(false),
            adjust_grid: self.adjust_grid.unwrap_or(false),
        };
        log::debug!("resolved grid request: {request:?}");
        request
    }
}

impl GridRequest {
    /// The single best candidate for the width bounds.
    pub fn best_fit(&self) -> Result<Candidate, GridError> {
        best_fit(self.min_width, self.max_width)
    }

    /// Layout builder for `candidate` with this request's orientation,
    /// margins and pixel shift.
    pub fn hex_grid(&self, candidate: Candidate) -> HexGrid {
        HexGrid::new(candidate)
            .orientation(self.orientation)
            .margins(self.margin_x, self.margin_y)
            .half_pixel(self.half_pixel)
    }

    /// Sheet builder with this request's sample count, stroke and orientation.
    pub fn sample_sheet(&self) -> SampleSheet {
        SampleSheet::new(self.samples)
            .stroke_width(self.stroke_width)
            .orientation(self.orientation)
    }

    /// Produce whatever [`output`](Self::output) asks for on a
    /// `canvas_w × canvas_h` canvas.
    pub fn plan(&self, canvas_w: u32, canvas_h: u32) -> Result<Output, GridError> {
        match self.output {
            OutputKind::Grid => {
                let candidate = self.best_fit()?;
                self.hex_grid(candidate).compute(canvas_w, canvas_h).map(Output::Grid)
            }
            OutputKind::Sheet => {
                let candidates = sample(self.min_width, self.max_width);
                self.sample_sheet()
                    .compute(&candidates, canvas_w, canvas_h)
                    .map(Output::Sheet)
            }
        }
    }
}

#[cfg(feature = "svg")]
impl GridRequest {
    /// Render a planned output as SVG. Grids honor [`crop`](Self::crop),
    /// [`adjust_grid`](Self::adjust_grid), the stroke width and the color;
    /// sheets are always drawn in black on white.
    pub fn render_svg(&self, output: &Output) -> alloc::string::String {
        match output {
            Output::Grid(plan) => {
                let color = alloc::string::ToString::to_string(&self.color);
                crate::svg::GridSvg::new(plan)
                    .stroke(self.stroke_width, &color)
                    .crop(self.crop)
                    .image_grid(self.adjust_grid)
                    .render()
            }
            Output::Sheet(sheet) => crate::svg::render_sheet_svg(sheet),
        }
    }
}

/// A planned grid or sheet.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Grid(LayoutPlan),
    Sheet(SheetPlan),
}

impl Output {
    pub fn as_grid(&self) -> Option<&LayoutPlan> {
        match self {
            Self::Grid(plan) => Some(plan),
            Self::Sheet(_) => None,
        }
    }

    pub fn as_sheet(&self) -> Option<&SheetPlan> {
        match self {
            Self::Sheet(plan) => Some(plan),
            Self::Grid(_) => None,
        }
    }
}
