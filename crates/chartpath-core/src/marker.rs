// File: crates/chartpath-core/src/marker.rs
// Summary: Marker geometry: value guide lines and pointed label tag shapes.

use crate::error::PathError;
use crate::geometry::{Point, Rect};
use crate::path::Path;
use crate::range::ValueRange;
use crate::scale::ValueScale;

/// Guide line across the full rect width at `value`'s y position, for
/// average lines and y-axis points of interest.
pub fn horizontal_marker(rect: Rect, value: f64, range: ValueRange) -> Result<Path, PathError> {
    if range.span() <= 0.0 {
        return Err(PathError::DegenerateRange { min: range.min, max: range.max });
    }
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return Err(PathError::DegenerateRect { width: rect.width, height: rect.height });
    }
    let y = ValueScale::new(rect, range).to_px(value);
    let mut path = Path::new();
    path.move_to(Point::new(rect.x, y));
    path.line_to(Point::new(rect.right(), y));
    Ok(path)
}

/// Label tag outline for marker values shown on the leading edge: a box
/// whose right side tapers to a point, notch one fifth of the width deep.
pub fn leading_label(rect: Rect) -> Path {
    let notch = rect.width / 5.0;
    let mut path = Path::new();
    path.move_to(Point::new(rect.x, rect.bottom()));
    path.line_to(Point::new(rect.right() - notch, rect.bottom()));
    path.line_to(Point::new(rect.right(), rect.mid_y()));
    path.line_to(Point::new(rect.right() - notch, rect.y));
    path.line_to(Point::new(rect.x, rect.y));
    path.close();
    path
}

/// Mirror of [`leading_label`] for the trailing edge: the left side tapers
/// to the point.
pub fn trailing_label(rect: Rect) -> Path {
    let notch = rect.width / 5.0;
    let mut path = Path::new();
    path.move_to(Point::new(rect.right(), rect.bottom()));
    path.line_to(Point::new(rect.right(), rect.y));
    path.line_to(Point::new(rect.x + notch, rect.y));
    path.line_to(Point::new(rect.x, rect.mid_y()));
    path.line_to(Point::new(rect.x + notch, rect.bottom()));
    path.close();
    path
}
