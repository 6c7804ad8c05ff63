//! Cross-checks of the fast paths against straightforward recomputation.

#![cfg(feature = "alloc")]

use hexfit::{
    GridError, HexGrid, Orientation, Size, best_fit, hexagon_vertices, pack, sample,
};

/// Score every apothem from scratch and return the least misaligned one.
fn brute_best(min_width: u32, max_width: u32) -> u32 {
    let mut best = (f64::INFINITY, 0);
    for a in min_width.div_ceil(2).max(2)..=max_width / 2 {
        let ideal = a as f64 * 3f64.sqrt();
        let sep = ideal.round();
        let misalignment = (2.0 * a as f64 * (ideal / sep - 1.0)).abs();
        if misalignment < best.0 {
            best = (misalignment, a);
        }
    }
    best.1
}

#[test]
fn best_candidate_matches_recomputation() {
    for (lo, hi) in [(30, 90), (4, 10), (20, 400), (100, 102), (1000, 3000)] {
        let fast = best_fit(lo, hi).unwrap();
        assert_eq!(fast.apothem, brute_best(lo, hi), "[{lo}, {hi}]");
        assert_eq!(sample(lo, hi).best().unwrap().apothem, fast.apothem);
    }
}

#[test]
fn best_candidate_is_no_worse_than_any_other() {
    let list = sample(30, 90);
    let best = list.best().unwrap();
    for c in &list {
        assert!(best.misalignment <= c.misalignment);
        assert!(best.quality >= c.quality);
    }
}

/// Largest cell over every row count; more columns than needed never helps.
fn brute_cell(width: f64, height: f64, n: u32) -> f64 {
    (1..=n)
        .map(|rows| {
            let cols = n.div_ceil(rows);
            (width / cols as f64).min(height / rows as f64)
        })
        .fold(0.0, f64::max)
}

#[test]
fn packing_is_optimal_for_small_counts() {
    let canvases = [
        (500.0, 500.0),
        (1000.0, 100.0),
        (100.0, 1000.0),
        (1920.0, 1080.0),
        (777.0, 333.0),
        (640.0, 641.0),
    ];
    for (w, h) in canvases {
        for n in 1..=25 {
            let p = pack(w, h, n);
            let expected = brute_cell(w, h, n);
            assert!(
                (p.cell_size as f64 - expected.floor()).abs() < 1e-9,
                "{w}x{h} n={n}: got {p:?}, best cell {expected}"
            );
            assert!(p.capacity() >= n, "{w}x{h} n={n}: {p:?}");
            assert!((p.cell_size * p.cols) as f64 <= w);
            assert!((p.cell_size * p.rows) as f64 <= h);
        }
    }
}

#[test]
fn six_cells_on_a_square() {
    let p = pack(500.0, 500.0, 6);
    assert_eq!((p.cell_size, p.rows, p.cols), (166, 2, 3));
}

#[test]
fn oversized_hexagon_on_tiny_canvas() {
    let c = best_fit(200, 200).unwrap();
    assert_eq!(
        HexGrid::new(c).compute(10, 10),
        Err(GridError::InsufficientSpace {
            hexagon_width: 200,
            canvas: Size::new(10, 10),
        })
    );
}

#[test]
fn vertices_stay_inside_margins_and_field_is_maximal() {
    for o in Orientation::ALL {
        for apothem in [3, 8, 15, 26, 41] {
            let c = hexfit::Candidate::new(apothem);
            for (w, h) in [(200, 150), (640, 480), (333, 999), (1000, 800)] {
                for (mx, my) in [(0, 0), (1, 1), (12, 5)] {
                    let Ok(plan) = HexGrid::new(c).orientation(o).margins(mx, my).compute(w, h)
                    else {
                        continue;
                    };
                    let (cw, ch) = o.transform_pair(w as f64, h as f64);
                    let (cmx, cmy) = o.transform_pair(mx as f64, my as f64);
                    for center in plan.centers() {
                        let center = o.transform_point(center);
                        let vs = hexagon_vertices(
                            center,
                            apothem as f64,
                            c.radius,
                            Orientation::Horizontal,
                        );
                        for v in vs {
                            // Centering floors to whole pixels, so allow one.
                            assert!(v.x >= cmx - 1.0 && v.x <= cw - cmx + 1.0, "{o:?} {w}x{h} {v:?}");
                            assert!(v.y >= cmy - 1.0 && v.y <= ch - cmy + 1.0, "{o:?} {w}x{h} {v:?}");
                        }
                    }

                    // One more row or column would not fit.
                    let (rows, cols) = (plan.rows() as f64, plan.cols() as f64);
                    let a = apothem as f64;
                    let sep = c.separation as f64;
                    let stagger = if plan.rows() > 1 { 1.0 } else { 0.0 };
                    assert!(a * (2.0 * (cols + 1.0) + stagger) > cw - 2.0 * cmx);
                    assert!((rows + 1.0) * sep + sep / 3.0 > ch - 2.0 * cmy);
                }
            }
        }
    }
}

#[test]
fn orientations_are_transposes() {
    let c = best_fit(30, 90).unwrap();
    let h = HexGrid::new(c).compute(800, 600).unwrap();
    let v = HexGrid::new(c)
        .orientation(Orientation::Vertical)
        .compute(600, 800)
        .unwrap();
    assert_eq!((h.rows(), h.cols()), (v.rows(), v.cols()));
    for (a, b) in h.centers().zip(v.centers()) {
        assert_eq!(a.transposed(), b);
    }
    assert_eq!(h.crop_rect().size(), v.crop_rect().size().transposed());
}
