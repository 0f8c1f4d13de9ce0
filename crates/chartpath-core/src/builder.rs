// File: crates/chartpath-core/src/builder.rs
// Summary: Path construction for line and band charts across all mode
//          combinations (straight/curved, include/skip zero, filled).

use crate::error::PathError;
use crate::geometry::{Point, Rect};
use crate::path::Path;
use crate::range::ValueRange;
use crate::sample::{Band, SampleKind, Series};
use crate::scale::{PointScale, ValueScale};

/// Segment interpolation between consecutive samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineShape {
    Straight,
    /// Cubic Bézier with horizontally symmetric control points.
    Curved,
}

/// What to do with samples whose value is exactly zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroPolicy {
    Include,
    /// Omit zero samples from emission while keeping index-based x
    /// placement, so the line gaps instead of re-compacting.
    Skip,
}

/// Per-call build configuration.
#[derive(Clone, Copy, Debug)]
pub struct PathOptions {
    pub shape: LineShape,
    pub zero: ZeroPolicy,
    /// Project the line down to the rect bottom to form a fillable area.
    /// Ignored for banded series, which are already closed regions.
    pub filled: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            shape: LineShape::Straight,
            zero: ZeroPolicy::Include,
            filled: false,
        }
    }
}

/// Build the vector path for one series in one rect.
///
/// Coordinate mapping for sample `i` of `n` with value `v`:
/// `x = rect.x + i * (rect.width / (n - 1))`,
/// `y = rect.y + rect.height - (v - range.min) * (rect.height / range.span())`.
/// The mapping is identical across every mode; only the command sequence
/// differs.
///
/// Fails before emitting anything when the series has fewer than two
/// samples, the range has no span, or the rect has no area; a degenerate
/// path is never drawn silently.
pub fn build(
    rect: Rect,
    series: &Series,
    range: ValueRange,
    options: PathOptions,
) -> Result<Path, PathError> {
    let n = series.len();
    if n < 2 {
        return Err(PathError::InsufficientSamples { got: n });
    }
    if range.span() <= 0.0 {
        return Err(PathError::DegenerateRange { min: range.min, max: range.max });
    }
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return Err(PathError::DegenerateRect { width: rect.width, height: rect.height });
    }

    let xs = PointScale::new(rect, n);
    let ys = ValueScale::new(rect, range);

    // One dispatch on (kind, shape); the zero policy is a per-sample gate
    // inside each emitter.
    let path = match (series.kind(), options.shape) {
        (SampleKind::Single, LineShape::Straight) => {
            straight_line(rect, series.values(), xs, ys, options)
        }
        (SampleKind::Single, LineShape::Curved) => {
            curved_line(rect, series.values(), xs, ys, options)
        }
        (SampleKind::Banded, LineShape::Straight) => {
            straight_band(series.bands(), xs, ys, options.zero)
        }
        (SampleKind::Banded, LineShape::Curved) => {
            curved_band(series.bands(), xs, ys, options.zero)
        }
    };
    Ok(path)
}

#[inline]
fn keep(zero: ZeroPolicy, value: f64) -> bool {
    match zero {
        ZeroPolicy::Include => true,
        ZeroPolicy::Skip => value != 0.0,
    }
}

#[inline]
fn keep_band(zero: ZeroPolicy, band: &Band) -> bool {
    match zero {
        ZeroPolicy::Include => true,
        ZeroPolicy::Skip => !band.is_zero(),
    }
}

/// Horizontally symmetric control points: each control sits at the pair's
/// midpoint x, at its own endpoint's y. Smooth, but not a true spline
/// through tangents.
#[inline]
fn curve_controls(prev: Point, next: Point) -> (Point, Point) {
    let half = (next.x - prev.x) / 2.0;
    (
        Point::new(prev.x + half, prev.y),
        Point::new(next.x - half, next.y),
    )
}

/// Append the fill closure: drop from the last emitted point to the rect
/// bottom, run back along it to the left edge, close.
fn close_filled(path: &mut Path, rect: Rect, last: Point) {
    path.line_to(Point::new(last.x, rect.bottom()));
    path.line_to(Point::new(rect.x, rect.bottom()));
    path.close();
    path.filled = true;
}

fn straight_line(
    rect: Rect,
    values: &[f64],
    xs: PointScale,
    ys: ValueScale,
    options: PathOptions,
) -> Path {
    let mut path = Path::new();
    // Under skip-zero the path starts at the first non-zero sample; an
    // all-zero series renders as an empty path rather than an error.
    let Some(first) = values.iter().position(|&v| keep(options.zero, v)) else {
        return path;
    };
    let mut last = Point::new(xs.to_px(first), ys.to_px(values[first]));
    path.move_to(last);

    for (i, &v) in values.iter().enumerate().skip(first + 1) {
        if !keep(options.zero, v) {
            continue;
        }
        let next = Point::new(xs.to_px(i), ys.to_px(v));
        path.line_to(next);
        last = next;
    }
    if options.filled {
        close_filled(&mut path, rect, last);
    }
    path
}

fn curved_line(
    rect: Rect,
    values: &[f64],
    xs: PointScale,
    ys: ValueScale,
    options: PathOptions,
) -> Path {
    let mut path = Path::new();
    let Some(first) = values.iter().position(|&v| keep(options.zero, v)) else {
        return path;
    };
    let mut prev = Point::new(xs.to_px(first), ys.to_px(values[first]));
    path.move_to(prev);

    for (i, &v) in values.iter().enumerate().skip(first + 1) {
        if !keep(options.zero, v) {
            continue;
        }
        let next = Point::new(xs.to_px(i), ys.to_px(v));
        let (c1, c2) = curve_controls(prev, next);
        path.curve_to(c1, c2, next);
        prev = next;
    }
    if options.filled {
        close_filled(&mut path, rect, prev);
    }
    path
}

fn straight_band(bands: &[Band], xs: PointScale, ys: ValueScale, zero: ZeroPolicy) -> Path {
    let mut path = Path::new();
    let Some(first) = bands.iter().position(|b| keep_band(zero, b)) else {
        return path;
    };
    // Upper boundary left to right.
    path.move_to(Point::new(xs.to_px(first), ys.to_px(bands[first].upper)));
    for (i, b) in bands.iter().enumerate().skip(first + 1) {
        if !keep_band(zero, b) {
            continue;
        }
        path.line_to(Point::new(xs.to_px(i), ys.to_px(b.upper)));
    }
    // Lower boundary right to left, then close back to the first upper
    // point, forming a single region between the bounds.
    for (i, b) in bands.iter().enumerate().rev() {
        if !keep_band(zero, b) {
            continue;
        }
        path.line_to(Point::new(xs.to_px(i), ys.to_px(b.lower)));
    }
    path.close();
    path
}

fn curved_band(bands: &[Band], xs: PointScale, ys: ValueScale, zero: ZeroPolicy) -> Path {
    let mut path = Path::new();
    let Some(first) = bands.iter().position(|b| keep_band(zero, b)) else {
        return path;
    };
    let mut prev = Point::new(xs.to_px(first), ys.to_px(bands[first].upper));
    path.move_to(prev);

    for (i, b) in bands.iter().enumerate().skip(first + 1) {
        if !keep_band(zero, b) {
            continue;
        }
        let next = Point::new(xs.to_px(i), ys.to_px(b.upper));
        let (c1, c2) = curve_controls(prev, next);
        path.curve_to(c1, c2, next);
        prev = next;
    }
    // The control-point rule applies independently to the reverse traversal;
    // the first reverse segment is the vertical drop onto the lower bound.
    for (i, b) in bands.iter().enumerate().rev() {
        if !keep_band(zero, b) {
            continue;
        }
        let next = Point::new(xs.to_px(i), ys.to_px(b.lower));
        let (c1, c2) = curve_controls(prev, next);
        path.curve_to(c1, c2, next);
        prev = next;
    }
    path.close();
    path
}
