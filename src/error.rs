use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by constructors and simulation entry points.
///
/// Every variant is fatal to the run that produced it; the computation is
/// deterministic given a seed, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A draw needs four distinct points, so the pool must hold at least four.
    #[error("sample count must be at least 4 to draw four distinct points, got {0}")]
    SampleCountTooSmall(usize),
    /// Point coordinates must be finite.
    #[error("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },
    /// Triangle vertices must be distinct and non-collinear.
    #[error("triangle vertices are collinear or not all distinct")]
    DegenerateTriangle,
}
