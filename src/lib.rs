//! Best-fit hexagonal grids on a pixel raster.
//!
//! A regular hexagon of integer width has an irrational row pitch
//! (`apothem · √3`). Rounding it to whole pixels stretches the hexagons a
//! little, and the stretch adds up across the canvas. This crate scores
//! every width in a range by how long a run of hexagons stays within a
//! pixel of the ideal, picks the best, and lays it out centered on a
//! canvas with vertices that land exactly where a renderer needs them.
//!
//! Pure geometry: no pixel operations, `no_std` compatible, no allocation
//! outside the `alloc`-gated sampling and sheet APIs.
//!
//! # Example
//!
//! ```
//! use hexfit::{HexGrid, Orientation, best_fit};
//!
//! let candidate = best_fit(30, 90).unwrap();
//! let plan = HexGrid::new(candidate)
//!     .orientation(Orientation::Vertical)
//!     .margins(1, 1)
//!     .compute(1000, 800)
//!     .unwrap();
//!
//! for vertices in plan.hexagons() {
//!     // stroke a closed path through `vertices`
//!     assert_eq!(vertices.len(), 6);
//! }
//! ```
//!
//! # Modules
//!
//! - [`sample`](mod@sample): candidate scoring and best-fit search
//! - [`pack`]: square cells packed into a rectangle
//! - [`layout`]: hexagon field layout and its derived rectangles
//! - [`vertex`]: hexagon vertices around a center
//! - [`orientation`]: horizontal and vertical grids
//! - `sheet`: side-by-side comparison of several candidates (`alloc`)
//! - `params`: parameter string parsing and normalization (`params`)
//! - `svg`: reference SVG renderer (`svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod math;

pub mod error;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod orientation;
pub mod pack;
pub mod sample;
pub mod vertex;

#[cfg(feature = "alloc")]
pub mod sheet;

#[cfg(feature = "params")]
pub mod params;

#[cfg(feature = "svg")]
pub mod svg;

pub use error::GridError;
pub use geometry::{Point, Rect, Size};
pub use label::{Label, Stretch};
pub use layout::{Centers, HexGrid, Hexagons, ImageGrid, LayoutPlan, layout};
pub use orientation::Orientation;
pub use pack::{Packing, pack};
pub use sample::{Candidate, MIN_APOTHEM, apothem_range, best_fit};
pub use vertex::{hexagon_vertices, vertex_offsets};

#[cfg(feature = "alloc")]
pub use sample::{Candidates, sample};
#[cfg(feature = "alloc")]
pub use sheet::{Caption, SampleSheet, SheetCell, SheetPlan};
