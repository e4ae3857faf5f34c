use crate::error::{Error, Result};
use crate::geometry::orientation::orientation;
use crate::geometry::point::Point;

/// An ordered triple of non-collinear points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    /// Creates a triangle, rejecting coincident or collinear vertices.
    ///
    /// Degeneracy is detected with the exact orientation test, so a triangle
    /// of zero area never gets past construction.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self> {
        if orientation(a, b, c) == 0 {
            return Err(Error::DegenerateTriangle);
        }
        Ok(Self { a, b, c })
    }

    /// The equilateral triangle with vertices (0, 0), (0.5, √0.75), (1, 0).
    ///
    /// This is the fixed base region for the four-point simulation; its side
    /// length is 1 and its apex sits above the midpoint of the base.
    pub fn unit_equilateral() -> Self {
        Self {
            a: Point { x: 0.0, y: 0.0 },
            b: Point { x: 0.5, y: 0.75_f64.sqrt() },
            c: Point { x: 1.0, y: 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn test_new_accepts_proper_triangle() {
        let t = Triangle::new(p(0.0, 0.0), p(3.0, 0.0), p(1.0, 2.0)).unwrap();
        assert_eq!(t.b, p(3.0, 0.0));
    }

    #[test]
    fn test_new_rejects_collinear_vertices() {
        let err = Triangle::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)).unwrap_err();
        assert_eq!(err, Error::DegenerateTriangle);
    }

    #[test]
    fn test_new_rejects_coincident_vertices() {
        let a = p(1.0, 1.0);
        assert!(Triangle::new(a, a, p(0.0, 2.0)).is_err());
        assert!(Triangle::new(a, a, a).is_err());
    }

    #[test]
    fn test_unit_equilateral_is_non_degenerate() {
        let t = Triangle::unit_equilateral();
        assert_ne!(orientation(t.a, t.b, t.c), 0);
        assert_eq!(t.a, p(0.0, 0.0));
        assert_eq!(t.c, p(1.0, 0.0));
        assert_eq!(t.b.y, 0.75_f64.sqrt());
    }
}
