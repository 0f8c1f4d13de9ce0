// File: crates/chartpath-examples/src/bin/lines.rs
// Summary: Minimal example that builds straight and curved line paths.

use chartpath_core::{build, LineShape, PathOptions, Rect, Series, ValueRange};

fn main() {
    // Build a simple line series
    let series = Series::from_values(
        "demo",
        vec![0.0, 1.2, 0.8, 1.8, 1.4, 2.0],
    );
    let rect = Rect::from_size(300.0, 120.0);
    let range = ValueRange::new(0.0, 2.2);

    let straight = build(rect, &series, range, PathOptions::default()).expect("straight path");
    println!("straight ({} commands): {}", straight.len(), straight.to_svg());

    let curved = build(
        rect,
        &series,
        range,
        PathOptions { shape: LineShape::Curved, ..Default::default() },
    )
    .expect("curved path");
    println!("curved   ({} commands): {}", curved.len(), curved.to_svg());
}
