//! Errors reported by the best-fit search and the layout engine.

use thiserror::Error;

use crate::geometry::Size;

/// Grid computation error.
///
/// Both kinds are recoverable: the caller reports them to the user and
/// aborts the current request. Neither is ever retried internally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// No integer apothem exists between the requested width bounds.
    #[error("no hexagon size fits between widths {min_width} and {max_width}")]
    EmptyCandidateRange {
        /// Lower width bound as passed to the sampler.
        min_width: u32,
        /// Upper width bound as passed to the sampler.
        max_width: u32,
    },
    /// The canvas has room for zero rows or zero columns of hexagons.
    #[error("impossible to draw a {hexagon_width}px wide hexagon on a {canvas} canvas")]
    InsufficientSpace {
        /// Requested face-to-face hexagon width (`2 * apothem`).
        hexagon_width: u32,
        /// Canvas dimensions in the caller's frame.
        canvas: Size,
    },
}
