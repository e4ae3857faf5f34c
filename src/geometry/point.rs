use crate::error::{Error, Result};

/// An immutable 2D point with value equality.
///
/// The fields are plain `f64`s and may be filled in directly for coordinates
/// that are known to be finite; `new` is the checked path for untrusted
/// input and rejects NaN and infinities once, at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point, rejecting non-finite coordinates.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFiniteCoordinate { x, y });
        }
        Ok(Self { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_finite_coordinates() {
        let p = Point::new(0.25, -3.5).unwrap();
        assert_eq!(p, Point { x: 0.25, y: -3.5 });
    }

    #[test]
    fn test_new_rejects_non_finite_coordinates() {
        assert!(Point::new(f64::NAN, 0.0).is_err());
        assert!(Point::new(0.0, f64::INFINITY).is_err());
        assert!(Point::new(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_error_reports_offending_coordinates() {
        let err = Point::new(1.0, f64::NAN).unwrap_err();
        match err {
            crate::error::Error::NonFiniteCoordinate { x, .. } => assert_eq!(x, 1.0),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
