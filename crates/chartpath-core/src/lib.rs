// File: crates/chartpath-core/src/lib.rs
// Summary: Core library entry point; exports the path geometry and
//          hit-testing API.

pub mod builder;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod marker;
pub mod path;
pub mod range;
pub mod sample;
pub mod scale;
pub mod types;

pub use builder::{build, LineShape, PathOptions, ZeroPolicy};
pub use error::PathError;
pub use geometry::{Point, Rect};
pub use hit::{locate, pixel_position, SampleRef};
pub use marker::{horizontal_marker, leading_label, trailing_label};
pub use path::{Path, PathCommand};
pub use range::ValueRange;
pub use sample::{Band, SampleKind, SamplePoint, Series};
pub use types::{plot_rect, Insets, HEIGHT, WIDTH};
