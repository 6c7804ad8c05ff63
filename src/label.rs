//! Structured label data for a grid: width, quality, stretch and spacing.
//!
//! The values are what a host shows next to a layer or a sample; the
//! [`Display`](core::fmt::Display) impl renders the compact layer-name form
//! `Wdth:30 Qual:74/-0.07% Grid:15x26`. Translation is left to the host.

use core::fmt;

use crate::math;
use crate::orientation::Orientation;
use crate::sample::Candidate;

/// Label values for one candidate in one orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    /// Face-to-face width in pixels.
    pub width: u32,
    /// Quality rounded to the nearest whole hexagon count.
    pub quality: u32,
    /// Signed apothem stretch in percent, rounded to its leading significant digit.
    pub stretch_percent: f64,
    /// Decimal places needed to show `stretch_percent`.
    pub stretch_decimals: usize,
    /// Image grid spacing in the caller's frame.
    pub grid: (u32, u32),
}

impl Label {
    /// Build the label for `candidate` drawn with `orientation`.
    pub fn new(candidate: &Candidate, orientation: Orientation) -> Self {
        let (stretch_percent, stretch_decimals) =
            round_significant(candidate.stretch_percent());
        Self {
            width: candidate.width(),
            quality: math::round(candidate.quality) as u32,
            stretch_percent,
            stretch_decimals,
            grid: orientation.transform_pair(candidate.apothem, candidate.separation),
        }
    }

    /// The stretch as `+0.07%` / `-0.1%`.
    pub fn stretch(&self) -> Stretch {
        Stretch {
            percent: self.stretch_percent,
            decimals: self.stretch_decimals,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wdth:{} Qual:{}/{} Grid:{}x{}",
            self.width,
            self.quality,
            self.stretch(),
            self.grid.0,
            self.grid.1
        )
    }
}

/// Signed stretch percentage formatter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stretch {
    percent: f64,
    decimals: usize,
}

impl fmt::Display for Stretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.percent < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{sign}{:.*}%",
            self.decimals,
            math::abs(self.percent)
        )
    }
}

/// Round to one significant digit: `round(v, -floor(log10|v|))`.
///
/// Returns the rounded value and the number of decimals it needs. Zero and
/// non-finite values are returned unchanged with no decimals. Magnitudes of
/// one or more need no decimals either, so a 12% stretch shows as `10%`,
/// never `10.0%`. Only the smallest apothems stretch that much.
fn round_significant(v: f64) -> (f64, usize) {
    if v == 0.0 || !v.is_finite() {
        return (v, 0);
    }
    let digits = -(math::floor(math::log10(math::abs(v))) as i32);
    let scale = math::powi(10.0, digits);
    let rounded = math::round(v * scale) / scale;
    (rounded, digits.max(0) as usize)
}
