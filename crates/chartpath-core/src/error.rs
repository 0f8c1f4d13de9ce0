// File: crates/chartpath-core/src/error.rs
// Summary: Error taxonomy for path construction preconditions.

use thiserror::Error;

/// Failure building a path. All variants are fatal to the render call that
/// raised them; the caller substitutes its no-data fallback view.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PathError {
    /// A line or band needs at least two samples to place a segment.
    #[error("series has {got} sample(s); at least 2 are required")]
    InsufficientSamples { got: usize },

    /// Zero value span leaves the y mapping undefined.
    #[error("value range [{min}, {max}] has no span")]
    DegenerateRange { min: f64, max: f64 },

    /// Zero-area target rectangle.
    #[error("rect {width}x{height} has no drawable area")]
    DegenerateRect { width: f32, height: f32 },
}
