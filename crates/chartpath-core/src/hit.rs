// File: crates/chartpath-core/src/hit.rs
// Summary: Pointer hit-testing: resolve touch coordinates to sample indices
//          and overlay marker positions.

use crate::geometry::{Point, Rect};
use crate::range::ValueRange;
use crate::sample::{SamplePoint, Series};
use crate::scale::{BinScale, ValueScale};

/// A located sample, tagged with its owning series label so multi-series
/// overlays can tell results apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRef<'a> {
    pub series: &'a str,
    pub index: usize,
    pub point: SamplePoint,
}

/// Resolve a pointer position to the sample under it.
///
/// The rect is divided into `series.len()` equal-width bins; the pointer's
/// bin index is the sample index. Out-of-range pointers are a normal
/// outcome of interaction, so absence is `None`, never an error.
pub fn locate<'a>(point: Point, rect: Rect, series: &'a Series) -> Option<SampleRef<'a>> {
    let bins = BinScale::new(rect, series.len());
    let index = bins.index_at(point.x)?;
    let sample = series.get(index)?;
    Some(SampleRef {
        series: series.label(),
        index,
        point: sample,
    })
}

/// Pixel position for the overlay marker of the sample under the pointer:
/// horizontally centered in its bin, vertically at the sample's value under
/// the same min-relative mapping the path builder uses, so markers land on
/// the drawn line.
///
/// `None` when the pointer is out of range, when the sample carries no
/// single value (banded series), or when the range has no span — this
/// function never raises.
pub fn pixel_position(
    point: Point,
    rect: Rect,
    series: &Series,
    range: ValueRange,
) -> Option<Point> {
    if range.span() <= 0.0 {
        return None;
    }
    let bins = BinScale::new(rect, series.len());
    let index = bins.index_at(point.x)?;
    let value = series.get(index)?.value()?;
    let ys = ValueScale::new(rect, range);
    Some(Point::new(bins.center_x(index), ys.to_px(value)))
}
