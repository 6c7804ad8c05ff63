//! Parsed parameters and the normalized request they resolve to.

use crate::orientation::Orientation;

/// What the host should produce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputKind {
    /// A hexagon field using the best candidate.
    #[default]
    Grid,
    /// A sheet comparing several candidates side by side.
    Sheet,
}

/// Stroke color for the hexagon outlines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrokeColor {
    /// Whatever foreground color the host has selected.
    Foreground,
    /// An explicit sRGB color.
    Srgb { r: u8, g: u8, b: u8, a: u8 },
    /// Opaque black.
    #[default]
    Black,
}

/// CSS form: `currentColor`, `black`, `#rrggbb` or `#rrggbbaa`.
impl core::fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Foreground => f.write_str("currentColor"),
            Self::Black => f.write_str("black"),
            Self::Srgb { r, g, b, a: 255 } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Srgb { r, g, b, a } => write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

/// Raw parameters as parsed. Unset fields take their defaults in
/// [`resolve`](Params::resolve).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub output: Option<OutputKind>,
    pub samples: Option<i32>,
    pub orientation: Option<Orientation>,
    pub min_width: Option<i32>,
    pub max_width: Option<i32>,
    pub stroke_width: Option<i32>,
    pub margin_x: Option<i32>,
    pub margin_y: Option<i32>,
    pub color: Option<StrokeColor>,
    pub crop: Option<bool>,
    pub adjust_grid: Option<bool>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A fully normalized request, ready to drive sampling and layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRequest {
    pub output: OutputKind,
    /// Sample count, capped at the number of apothems in range.
    pub samples: u32,
    pub orientation: Orientation,
    /// Even lower width bound.
    pub min_width: u32,
    /// Even upper width bound, never below `min_width`.
    pub max_width: u32,
    pub stroke_width: u32,
    /// Margin along x, including half the stroke.
    pub margin_x: i32,
    /// Margin along y, including half the stroke.
    pub margin_y: i32,
    /// Shift centers by half a pixel (odd strokes).
    pub half_pixel: bool,
    pub color: StrokeColor,
    /// Crop the generated layer to the hexagon field.
    pub crop: bool,
    /// Align the host's image grid with the hexagon centers.
    pub adjust_grid: bool,
}
