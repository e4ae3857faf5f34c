use rand::Rng;

use crate::geometry::point::Point;
use crate::geometry::triangle::Triangle;

/// Samples one point uniformly over the area of `tri`.
///
/// Two independent uniform draws in [0, 1) parametrize the triangle. The
/// square root on the first draw corrects the area element of the
/// parametrization: feeding the raw draws in as barycentric weights would
/// cluster points toward vertex `a` instead of covering the triangle
/// uniformly.
pub fn sample_in_triangle<R: Rng + ?Sized>(tri: &Triangle, rng: &mut R) -> Point {
    let r1: f64 = rng.gen();
    let r2: f64 = rng.gen();
    let s1 = r1.sqrt();
    Point {
        x: tri.a.x * (1.0 - s1) + tri.b.x * (1.0 - r2) * s1 + tri.c.x * r2 * s1,
        y: tri.a.y * (1.0 - s1) + tri.b.y * (1.0 - r2) * s1 + tri.c.y * r2 * s1,
    }
}
