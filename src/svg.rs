//! SVG rendering of hexagon fields and sample sheets.
//!
//! A reference renderer for hosts without their own path API: every
//! hexagon becomes one closed `<path>` through its six vertices, in the
//! order [`hexagon_vertices`](crate::hexagon_vertices) returns them.
//!
//! # Example
//!
//! ```
//! use hexfit::{HexGrid, best_fit, svg::render_grid_svg};
//!
//! let candidate = best_fit(30, 90).unwrap();
//! let plan = HexGrid::new(candidate).compute(400, 300).unwrap();
//!
//! let svg = render_grid_svg(&plan, 2, "black");
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<path").count(), plan.len());
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt::Write;

use crate::geometry::{Point, Rect};
use crate::layout::LayoutPlan;
use crate::sheet::{SheetCell, SheetPlan};

/// Color of the sheet background.
const SHEET_BACKGROUND: &str = "white";
/// Color of sheet strokes, labels and separators.
const SHEET_INK: &str = "black";
/// Color of the image-grid guide lines.
const IMAGE_GRID: &str = "#7f7f7f";
/// Line height of the caption block, relative to the font size.
const LINE_HEIGHT: f64 = 1.25;

/// Render `plan` on its canvas with the given stroke width and CSS color.
///
/// Shorthand for [`GridSvg`] without cropping or image grid.
pub fn render_grid_svg(plan: &LayoutPlan, stroke_width: u32, color: &str) -> String {
    GridSvg::new(plan).stroke(stroke_width, color).render()
}

/// Options for rendering a single hexagon field.
#[derive(Clone, Debug)]
pub struct GridSvg<'a> {
    plan: &'a LayoutPlan,
    stroke_width: u32,
    color: &'a str,
    crop: bool,
    image_grid: bool,
}

impl<'a> GridSvg<'a> {
    /// Black 1px strokes on the whole canvas.
    pub fn new(plan: &'a LayoutPlan) -> Self {
        Self {
            plan,
            stroke_width: 1,
            color: SHEET_INK,
            crop: false,
            image_grid: false,
        }
    }

    /// Stroke width and CSS color of the outlines.
    pub fn stroke(mut self, width: u32, color: &'a str) -> Self {
        self.stroke_width = width;
        self.color = color;
        self
    }

    /// Show only [`LayoutPlan::crop_rect`] instead of the whole canvas.
    pub fn crop(mut self, on: bool) -> Self {
        self.crop = on;
        self
    }

    /// Draw the image grid of [`LayoutPlan::image_grid`] under the field.
    pub fn image_grid(mut self, on: bool) -> Self {
        self.image_grid = on;
        self
    }

    pub fn render(&self) -> String {
        let plan = self.plan;
        let view = if self.crop {
            plan.crop_rect()
        } else {
            let canvas = plan.canvas();
            Rect::new(0, 0, canvas.width, canvas.height)
        };
        let mut svg = String::with_capacity(256 + plan.len() * 96);
        open_document(&mut svg, view);
        if self.image_grid {
            push_image_grid(&mut svg, plan, view);
        }
        push_field(&mut svg, plan, self.stroke_width, self.color);
        svg.push_str("</svg>\n");
        svg
    }
}

/// Render a sample sheet: background, one clipped group per cell with its
/// caption, and the separator grid between cells.
pub fn render_sheet_svg(sheet: &SheetPlan) -> String {
    let area = sheet.area();
    let mut svg = String::with_capacity(4096);
    open_document(&mut svg, Rect::new(0, 0, area.width, area.height));

    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{SHEET_BACKGROUND}"/>"#,
        area.width, area.height
    );

    svg.push_str("<defs>\n");
    for cell in &sheet.cells {
        let _ = writeln!(
            svg,
            r#"  <clipPath id="cell{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            cell.index, cell.origin.0, cell.origin.1, cell.size, cell.size
        );
    }
    svg.push_str("</defs>\n");

    for cell in &sheet.cells {
        push_cell(&mut svg, cell, sheet.stroke_width);
    }
    push_separators(&mut svg, sheet);

    svg.push_str("</svg>\n");
    svg
}

fn open_document(svg: &mut String, view: Rect) {
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{x} {y} {w} {h}">"#,
        x = view.x,
        y = view.y,
        w = view.width,
        h = view.height
    );
}

/// Thin guide lines at the image-grid spacing, anchored on the first center.
fn push_image_grid(svg: &mut String, plan: &LayoutPlan, view: Rect) {
    let grid = plan.image_grid();
    let (sx, sy) = grid.spacing;
    let _ = writeln!(
        svg,
        r#"<defs><pattern id="image-grid" x="{}" y="{}" width="{sx}" height="{sy}" patternUnits="userSpaceOnUse"><path d="M{sx},0 L0,0 L0,{sy}" fill="none" stroke="{IMAGE_GRID}" stroke-width="0.5"/></pattern></defs>"#,
        coord(grid.offset.x),
        coord(grid.offset.y)
    );
    let _ = writeln!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#image-grid)"/>"#,
        view.x, view.y, view.width, view.height
    );
}

fn push_field(svg: &mut String, plan: &LayoutPlan, stroke_width: u32, color: &str) {
    let _ = writeln!(
        svg,
        r#"<g fill="none" stroke="{}" stroke-width="{stroke_width}" stroke-linejoin="miter">"#,
        escape_xml(color)
    );
    for hexagon in plan.hexagons() {
        svg.push_str("  ");
        push_path(svg, &hexagon);
        svg.push('\n');
    }
    svg.push_str("</g>\n");
}

fn push_path(svg: &mut String, vertices: &[Point; 6]) {
    svg.push_str(r#"<path d=""#);
    for (i, v) in vertices.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(svg, "{cmd}{},{} ", coord(v.x), coord(v.y));
    }
    svg.push_str(r#"Z"/>"#);
}

fn push_cell(svg: &mut String, cell: &SheetCell, stroke_width: u32) {
    let _ = writeln!(svg, r#"<g clip-path="url(#cell{})">"#, cell.index);
    match &cell.layout {
        Ok(plan) => push_field(svg, plan, stroke_width, SHEET_INK),
        Err(e) => {
            log::debug!("sheet cell {} left empty: {e}", cell.index);
        }
    }

    let font = cell.caption.font_size;
    let (x, y) = cell.caption.position;
    let _ = writeln!(
        svg,
        r#"<text x="{x}" y="{y}" font-family="monospace" font-size="{}" fill="{SHEET_INK}" xml:space="preserve">"#,
        coord(font)
    );
    let lines = [
        format!("width  : {}", cell.label.width),
        format!("stretch: {}", cell.label.stretch()),
        format!("quality: {}", cell.label.quality),
    ];
    for (i, line) in lines.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"  <tspan x="{x}" dy="{}">{}</tspan>"#,
            coord(if i == 0 { font } else { font * LINE_HEIGHT }),
            escape_xml(line)
        );
    }
    svg.push_str("</text>\n</g>\n");
}

/// Lines between cells, twice the stroke width.
fn push_separators(svg: &mut String, sheet: &SheetPlan) {
    let area = sheet.area();
    let cell = sheet.packing.cell_size;
    let _ = writeln!(
        svg,
        r#"<g stroke="{SHEET_INK}" stroke-width="{}">"#,
        2 * sheet.stroke_width
    );
    for col in 1..sheet.packing.cols {
        let x = col * cell;
        let _ = writeln!(svg, r#"  <line x1="{x}" y1="0" x2="{x}" y2="{}"/>"#, area.height);
    }
    for row in 1..sheet.packing.rows {
        let y = row * cell;
        let _ = writeln!(svg, r#"  <line x1="0" y1="{y}" x2="{}" y2="{y}"/>"#, area.width);
    }
    svg.push_str("</g>\n");
}

/// Coordinates with at most three decimals, trailing zeros dropped.
fn coord(v: f64) -> String {
    let mut s = format!("{v:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Escape special characters for XML text and attribute content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::HexGrid;
    use crate::orientation::Orientation;
    use crate::sample::{Candidate, sample};
    use crate::sheet::SampleSheet;

    #[test]
    fn coordinates_are_trimmed() {
        assert_eq!(coord(12.0), "12");
        assert_eq!(coord(12.5), "12.5");
        assert_eq!(coord(17.333_333), "17.333");
        assert_eq!(coord(-0.000_1), "0");
        assert_eq!(coord(-3.25), "-3.25");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn grid_has_one_closed_path_per_hexagon() {
        let plan = HexGrid::new(Candidate::new(15)).compute(1000, 800).unwrap();
        let svg = render_grid_svg(&plan, 2, "#ff0000");
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="800""#));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<path").count(), plan.len());
        assert_eq!(svg.matches("Z\"/>").count(), plan.len());
        assert!(svg.contains(r##"stroke="#ff0000" stroke-width="2""##));
    }

    #[test]
    fn first_path_starts_at_top_vertex() {
        let c = Candidate::new(15);
        let plan = HexGrid::new(c).compute(1000, 800).unwrap();
        let first = plan.center(0, 0);
        let svg = render_grid_svg(&plan, 1, "black");
        let expected = format!("M{},{} ", coord(first.x), coord(first.y - c.radius));
        assert!(svg.contains(&expected), "{expected}");
    }

    #[test]
    fn cropped_view_matches_crop_rect() {
        let plan = HexGrid::new(Candidate::new(15)).compute(1000, 800).unwrap();
        let crop = plan.crop_rect();
        let svg = GridSvg::new(&plan).crop(true).render();
        let expected = format!(
            r#"width="{w}" height="{h}" viewBox="{} {} {w} {h}""#,
            crop.x,
            crop.y,
            w = crop.width,
            h = crop.height
        );
        assert!(svg.contains(&expected), "{expected}");
        assert!(svg.contains(r#"viewBox="12 6 975 788""#));
        assert!(!svg.contains("image-grid"));
    }

    #[test]
    fn image_grid_follows_first_center() {
        let plan = HexGrid::new(Candidate::new(15))
            .orientation(Orientation::Vertical)
            .compute(800, 1000)
            .unwrap();
        let grid = plan.image_grid();
        let svg = GridSvg::new(&plan).image_grid(true).render();
        let pattern = format!(
            r#"<pattern id="image-grid" x="{}" y="{}" width="26" height="15""#,
            coord(grid.offset.x),
            coord(grid.offset.y)
        );
        assert!(svg.contains(&pattern), "{pattern}");
        assert!(svg.contains(r#"fill="url(#image-grid)""#));
        assert_eq!(svg.matches("<path").count(), plan.len() + 1);
    }

    #[test]
    fn vertical_grid_renders() {
        let plan = HexGrid::new(Candidate::new(20))
            .orientation(Orientation::Vertical)
            .compute(300, 500)
            .unwrap();
        let svg = render_grid_svg(&plan, 3, "currentColor");
        assert!(svg.contains(r#"width="300" height="500""#));
        assert_eq!(svg.matches("<path").count(), plan.len());
    }

    #[test]
    fn sheet_structure() {
        let candidates = sample(30, 90);
        let sheet = SampleSheet::new(6).compute(&candidates, 500, 500).unwrap();
        let svg = render_sheet_svg(&sheet);
        assert!(svg.contains(r#"width="498" height="332""#));
        assert!(svg.contains(r#"fill="white""#));
        assert_eq!(svg.matches("<clipPath").count(), 6);
        assert_eq!(svg.matches("width  : ").count(), 6);
        assert_eq!(svg.matches("stretch: ").count(), 6);
        assert_eq!(svg.matches("quality: ").count(), 6);
        // 3 cols, 2 rows: two vertical and one horizontal separator.
        assert_eq!(svg.matches("<line").count(), 3);
        assert!(svg.contains(r#"<g stroke="black" stroke-width="4">"#));
    }

    #[test]
    fn sheet_label_values() {
        let candidates = sample(30, 30);
        let sheet = SampleSheet::new(1).compute(&candidates, 400, 400).unwrap();
        let svg = render_sheet_svg(&sheet);
        assert!(svg.contains("width  : 30"));
        assert!(svg.contains("stretch: -0.07%"));
    }
}
