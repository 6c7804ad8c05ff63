//! Square-cell packing for sample sheets.
//!
//! Finds the rows × columns grid of equal squares, at least `count` of them,
//! whose cell size is largest inside a rectangle. Any optimal grid is limited
//! either by the canvas height or by its width, so only two candidates need
//! checking: the best height-filling grid and the best width-filling grid.

use crate::math;

/// Result of [`pack`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packing {
    /// Side of each square cell, truncated to whole pixels.
    pub cell_size: u32,
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl Packing {
    /// Number of cells in the grid (always ≥ the requested count).
    pub fn capacity(&self) -> u32 {
        self.rows * self.cols
    }

    /// Top-left corner of cell `index`, filled row by row.
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        let cols = self.cols.max(1);
        ((index % cols) * self.cell_size, (index / cols) * self.cell_size)
    }
}

/// Pack `count` equal squares into a `width × height` rectangle.
///
/// A `count` of zero is treated as one. On a tie between the height-filling
/// and width-filling grids the width-filling one (more columns) wins; that
/// preference is empirical and kept as is.
///
/// A side that is not a positive finite number yields an empty packing
/// (`cell_size`, `rows` and `cols` all zero).
pub fn pack(width: f64, height: f64, count: u32) -> Packing {
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        log::debug!("nothing to pack into {width}x{height}");
        return Packing {
            cell_size: 0,
            rows: 0,
            cols: 0,
        };
    }
    let n = count.max(1) as f64;
    let ratio = width / height;
    let cols_ideal = math::sqrt(n * ratio);
    let rows_ideal = n / cols_ideal;

    // Fill the whole height.
    let mut rows_h = ceil_u32(rows_ideal);
    let mut cols_h = ceil_u32(n / rows_h as f64);
    while (rows_h as f64 * ratio) < cols_h as f64 {
        rows_h += 1;
        cols_h = ceil_u32(n / rows_h as f64);
    }
    let cell_h = height / rows_h as f64;

    // Fill the whole width.
    let mut cols_w = ceil_u32(cols_ideal);
    let mut rows_w = ceil_u32(n / cols_w as f64);
    while (cols_w as f64) < rows_w as f64 * ratio {
        cols_w += 1;
        rows_w = ceil_u32(n / cols_w as f64);
    }
    let cell_w = width / cols_w as f64;

    let (cell, rows, cols) = if cell_h <= cell_w {
        (cell_w, rows_w, cols_w)
    } else {
        (cell_h, rows_h, cols_h)
    };

    log::debug!(
        "packed {count} cells into {width}x{height}: {rows}x{cols} of {cell:.1}px"
    );

    Packing {
        cell_size: cell as u32,
        rows,
        cols,
    }
}

fn ceil_u32(v: f64) -> u32 {
    let f = math::floor(v);
    let c = if f < v { f + 1.0 } else { f };
    (c as u32).max(1)
}
