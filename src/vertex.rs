//! Hexagon vertices around a center.

use crate::geometry::Point;
use crate::orientation::Orientation;

/// Vertex offsets from the center, clockwise starting at the top.
///
/// Horizontal grids have a vertex at top and bottom and flat faces left and
/// right (`±apothem`); vertical grids use the same six offsets transposed.
/// The winding order is identical for both, so a renderer that connects the
/// vertices in sequence and closes back to the first one strokes every
/// hexagon of a plan the same way.
pub fn vertex_offsets(apothem: f64, radius: f64, orientation: Orientation) -> [Point; 6] {
    let half = radius / 2.0;
    let offsets = [
        Point::new(0.0, -radius),
        Point::new(apothem, -half),
        Point::new(apothem, half),
        Point::new(0.0, radius),
        Point::new(-apothem, half),
        Point::new(-apothem, -half),
    ];
    offsets.map(|p| orientation.transform_point(p))
}

/// The six vertices of the hexagon centered on `center`.
pub fn hexagon_vertices(
    center: Point,
    apothem: f64,
    radius: f64,
    orientation: Orientation,
) -> [Point; 6] {
    vertex_offsets(apothem, radius, orientation).map(|v| center.offset(v.x, v.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn horizontal_offsets() {
        let v = vertex_offsets(15.0, 18.0, Orientation::Horizontal);
        assert_eq!(
            v,
            [
                Point::new(0.0, -18.0),
                Point::new(15.0, -9.0),
                Point::new(15.0, 9.0),
                Point::new(0.0, 18.0),
                Point::new(-15.0, 9.0),
                Point::new(-15.0, -9.0),
            ]
        );
    }

    #[test]
    fn vertical_offsets_are_transposed() {
        let v = vertex_offsets(15.0, 18.0, Orientation::Vertical);
        assert_eq!(
            v,
            [
                Point::new(-18.0, 0.0),
                Point::new(-9.0, 15.0),
                Point::new(9.0, 15.0),
                Point::new(18.0, 0.0),
                Point::new(9.0, -15.0),
                Point::new(-9.0, -15.0),
            ]
        );
    }

    #[test]
    fn swapped_horizontal_equals_vertical() {
        let center = Point::new(103.5, 47.0);
        let h = hexagon_vertices(center, 21.0, 24.0, Orientation::Horizontal);
        let v = hexagon_vertices(center.transposed(), 21.0, 24.0, Orientation::Vertical);
        for (a, b) in h.iter().zip(v.iter()) {
            assert!(close(a.transposed(), *b), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn opposite_vertices_are_symmetric() {
        let center = Point::new(50.5, 60.5);
        for o in Orientation::ALL {
            let v = hexagon_vertices(center, 13.0, 15.333, o);
            for i in 0..3 {
                let a = v[i];
                let b = v[i + 3];
                assert!(close(Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0), center));
            }
        }
    }

    #[test]
    fn face_to_face_width_is_two_apothems() {
        let v = hexagon_vertices(Point::new(0.0, 0.0), 15.0, 17.333, Orientation::Horizontal);
        assert_eq!(v[1].x - v[5].x, 30.0);
        let v = hexagon_vertices(Point::new(0.0, 0.0), 15.0, 17.333, Orientation::Vertical);
        assert_eq!(v[1].y - v[5].y, 30.0);
    }
}
