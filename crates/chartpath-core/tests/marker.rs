// File: crates/chartpath-core/tests/marker.rs
// Purpose: Validate guide-line markers and label tag shapes.

use chartpath_core::{
    horizontal_marker, leading_label, trailing_label, PathCommand, PathError, Point, Rect,
    ValueRange,
};

#[test]
fn horizontal_marker_spans_the_rect_at_value_y() {
    let rect = Rect::from_size(200.0, 100.0);
    let range = ValueRange::new(0.0, 10.0);

    let path = horizontal_marker(rect, 2.5, range).unwrap();
    assert_eq!(
        path.commands,
        vec![
            PathCommand::MoveTo(Point::new(0.0, 75.0)),
            PathCommand::LineTo(Point::new(200.0, 75.0)),
        ]
    );
}

#[test]
fn horizontal_marker_rejects_degenerate_range() {
    let rect = Rect::from_size(200.0, 100.0);
    let err = horizontal_marker(rect, 1.0, ValueRange::new(1.0, 1.0)).unwrap_err();
    assert_eq!(err, PathError::DegenerateRange { min: 1.0, max: 1.0 });
}

#[test]
fn leading_label_tapers_on_the_right() {
    let rect = Rect::from_size(50.0, 20.0);
    let path = leading_label(rect);
    assert_eq!(
        path.commands,
        vec![
            PathCommand::MoveTo(Point::new(0.0, 20.0)),
            PathCommand::LineTo(Point::new(40.0, 20.0)),
            PathCommand::LineTo(Point::new(50.0, 10.0)),
            PathCommand::LineTo(Point::new(40.0, 0.0)),
            PathCommand::LineTo(Point::new(0.0, 0.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn trailing_label_mirrors_the_leading_shape() {
    let rect = Rect::from_size(50.0, 20.0);
    let path = trailing_label(rect);
    assert_eq!(
        path.commands,
        vec![
            PathCommand::MoveTo(Point::new(50.0, 20.0)),
            PathCommand::LineTo(Point::new(50.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 0.0)),
            PathCommand::LineTo(Point::new(0.0, 10.0)),
            PathCommand::LineTo(Point::new(10.0, 20.0)),
            PathCommand::Close,
        ]
    );
}
