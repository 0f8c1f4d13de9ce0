// File: crates/chartpath-core/src/path.rs
// Summary: Vector path output model: an ordered command list plus fill flag.

use crate::geometry::Point;
use std::fmt::Write as _;

/// One drawing command. Consumers replay these against whatever vector path
/// type their renderer provides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier segment.
    CurveTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    Close,
}

/// A transient render artifact: the command sequence for one series in one
/// rect. `filled` records whether the bottom-projection fill commands were
/// appended; band paths are closed regions without them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
    pub filled: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn curve_to(&mut self, control1: Point, control2: Point, to: Point) {
        self.commands.push(PathCommand::CurveTo { control1, control2, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize as SVG path data (`M`/`L`/`C`/`Z`). Used by demos, text
    /// snapshots, and renderers that accept path strings.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(out, "M{} {}", p.x, p.y);
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(out, "L{} {}", p.x, p.y);
                }
                PathCommand::CurveTo { control1, control2, to } => {
                    let _ = write!(
                        out,
                        "C{} {} {} {} {} {}",
                        control1.x, control1.y, control2.x, control2.y, to.x, to.y
                    );
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }
}
