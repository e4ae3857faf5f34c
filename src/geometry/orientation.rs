use crate::geometry::point::Point;

/// Returns the turn direction of the ordered triple `a`, `b`, `c`.
///
/// `1` means a counterclockwise turn, `-1` clockwise, and `0` that the three
/// points are collinear (which covers coincident points, since the
/// determinant vanishes identically). Zero is returned only when the
/// determinant is exactly zero; any tolerance policy belongs to the caller.
pub fn orientation(a: Point, b: Point, c: Point) -> i8 {
    let det = (a.x - c.x) * (b.y - c.y) - (a.y - c.y) * (b.x - c.x);
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

/// Classifies the convex hull of four points by its shape.
///
/// Returns `1` if the hull is a quadrilateral (all four points are hull
/// vertices), `-1` if it is a triangle (exactly one point lies strictly
/// inside the triangle of the other three), and `0` if any three of the
/// points are collinear or the points are not all distinct. The result is
/// the product of the four orientation tests over the C(4,3) triples; the
/// sign cancellation across the triples is what encodes the hull shape.
pub fn classify_four(a: Point, b: Point, c: Point, d: Point) -> i8 {
    orientation(a, b, c) * orientation(a, b, d) * orientation(a, c, d) * orientation(b, c, d)
}
