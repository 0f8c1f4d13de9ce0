// File: crates/chartpath-core/src/types.rs
// Summary: Shared constants and insets for deriving plot areas.

use crate::geometry::Rect;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Inner drawing rectangle for a surface of `width` x `height` with `insets`
/// reserved for axis labels and legends. Collapses to zero size when the
/// insets exceed the surface.
pub fn plot_rect(width: u32, height: u32, insets: &Insets) -> Rect {
    let w = width.saturating_sub(insets.hsum()) as f32;
    let h = height.saturating_sub(insets.vsum()) as f32;
    Rect::from_xywh(insets.left as f32, insets.top as f32, w, h)
}
