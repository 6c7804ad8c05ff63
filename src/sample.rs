//! Best-fit search over hexagon sizes.
//!
//! A regular hexagon grid with apothem `a` has rows `a·√3` apart. That is
//! never an integer, so the row pitch is rounded to whole pixels and the
//! apothem axis is conceptually stretched by the same ratio. Stretching a
//! single axis keeps every hexagon mirror-symmetric about both axes; the
//! price is a small drift between the ideal and the rasterized grid. The
//! sampler scores every apothem in a width range by that drift.
//!
//! # Example
//!
//! ```
//! use hexfit::best_fit;
//!
//! let best = best_fit(30, 90).unwrap();
//! assert!((15..=45).contains(&best.apothem));
//! assert_eq!(best.width(), 2 * best.apothem);
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use core::ops::RangeInclusive;

use crate::error::GridError;
use crate::math;

/// Smallest apothem the sampler will consider (a 4px wide hexagon).
pub const MIN_APOTHEM: u32 = 2;

/// One scored hexagon size.
///
/// Pure data, computed once from its apothem.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Center-to-face distance; half the face-to-face width.
    pub apothem: u32,
    /// Exact row pitch, `apothem · √3`.
    pub ideal_separation: f64,
    /// Row pitch actually used, `round(ideal_separation)`.
    pub separation: u32,
    /// `ideal_separation / separation`, the stretch applied along the apothem axis.
    pub apothem_stretch: f64,
    /// Pixel drift per hexagon pair, `|2 · apothem · (apothem_stretch − 1)|`.
    pub misalignment: f64,
    /// Contiguous hexagons before the drift reaches one pixel, `1 / misalignment`.
    pub quality: f64,
    /// Center-to-vertex distance, `separation · 2/3`.
    ///
    /// Derived from the rounded separation rather than the ideal one so
    /// that vertices of adjacent rows meet exactly on the row pitch.
    pub radius: f64,
}

impl Candidate {
    /// Score a single apothem. `apothem` must be non-zero.
    pub fn new(apothem: u32) -> Self {
        debug_assert!(apothem > 0, "apothem must be non-zero");
        let a = apothem as f64;
        let ideal_separation = a * math::SQRT_3;
        let separation = math::round(ideal_separation) as u32;
        let apothem_stretch = ideal_separation / separation as f64;
        let misalignment = math::abs(2.0 * a * (apothem_stretch - 1.0));
        Self {
            apothem,
            ideal_separation,
            separation,
            apothem_stretch,
            misalignment,
            quality: 1.0 / misalignment,
            radius: separation as f64 / 3.0 * 2.0,
        }
    }

    /// Face-to-face width in pixels.
    pub fn width(&self) -> u32 {
        2 * self.apothem
    }

    /// Signed deviation of the apothem stretch from 1, in percent.
    pub fn stretch_percent(&self) -> f64 {
        (self.apothem_stretch - 1.0) * 100.0
    }
}

/// Apothems covered by a pair of (already even-rounded) width bounds.
///
/// The lower bound rounds up, the upper bound rounds down, and apothems
/// below [`MIN_APOTHEM`] are excluded. The range is empty when no apothem
/// qualifies.
pub fn apothem_range(min_width: u32, max_width: u32) -> RangeInclusive<u32> {
    let lower = (min_width / 2 + min_width % 2).max(MIN_APOTHEM);
    let upper = max_width / 2;
    lower..=upper
}

/// Best candidate between two width bounds without allocating.
///
/// Ties keep the smallest apothem, matching the order of [`sample`].
pub fn best_fit(min_width: u32, max_width: u32) -> Result<Candidate, GridError> {
    let best = apothem_range(min_width, max_width)
        .map(Candidate::new)
        .reduce(|best, c| {
            if c.misalignment < best.misalignment {
                c
            } else {
                best
            }
        });
    best.ok_or(GridError::EmptyCandidateRange {
        min_width,
        max_width,
    })
}

/// Score every apothem between two width bounds, best first.
///
/// The caller normalizes the bounds beforehand (minimum rounded up to an
/// even width, maximum rounded down, swapped when inverted). Quality is not
/// monotonic in the apothem, so the whole range is scanned.
///
/// ```
/// use hexfit::sample;
///
/// let candidates = sample(30, 90);
/// let best = candidates.best().unwrap();
/// assert!(candidates.iter().all(|c| c.misalignment >= best.misalignment));
/// ```
#[cfg(feature = "alloc")]
pub fn sample(min_width: u32, max_width: u32) -> Candidates {
    let mut items: Vec<Candidate> = apothem_range(min_width, max_width)
        .map(Candidate::new)
        .collect();
    items.sort_by(|a, b| a.misalignment.total_cmp(&b.misalignment));
    if let Some(best) = items.first() {
        log::debug!(
            "best fit in {min_width}..={max_width}: width {} separation {} quality {:.1} ({} candidates)",
            best.width(),
            best.separation,
            best.quality,
            items.len()
        );
    }
    Candidates {
        min_width,
        max_width,
        items,
    }
}

/// Candidates from one [`sample`] call, sorted by ascending misalignment.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq)]
pub struct Candidates {
    min_width: u32,
    max_width: u32,
    items: Vec<Candidate>,
}

#[cfg(feature = "alloc")]
impl Candidates {
    /// The best-aligned candidate, or [`GridError::EmptyCandidateRange`].
    pub fn best(&self) -> Result<&Candidate, GridError> {
        self.items.first().ok_or(GridError::EmptyCandidateRange {
            min_width: self.min_width,
            max_width: self.max_width,
        })
    }

    /// All candidates, best first.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }

    /// Iterate best first.
    pub fn iter(&self) -> core::slice::Iter<'_, Candidate> {
        self.items.iter()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no apothem fell inside the bounds.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `count` best candidates, re-sorted by ascending apothem for
    /// spatial presentation on a sample sheet.
    pub fn curated(&self, count: usize) -> Vec<Candidate> {
        let mut picked: Vec<Candidate> = self.items.iter().take(count).copied().collect();
        picked.sort_by_key(|c| c.apothem);
        picked
    }
}

#[cfg(feature = "alloc")]
impl<'a> IntoIterator for &'a Candidates {
    type Item = &'a Candidate;
    type IntoIter = core::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
