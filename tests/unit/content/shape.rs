use super::*;
use kurbo::{PathEl, Shape as _};

#[test]
fn control_point_count_selects_segment_kind() {
    let line = bezier_curve(&[0.0, 0.0, 10.0, 0.0]).unwrap();
    assert!(matches!(line.elements()[1], PathEl::LineTo(_)));

    let quad = bezier_curve(&[0.0, 0.0, 5.0, 5.0, 10.0, 0.0]).unwrap();
    assert!(matches!(quad.elements()[1], PathEl::QuadTo(_, _)));

    let cubic = bezier_curve(&[0.0, 0.0, 1.0, 1.0, 2.0, 1.0, 3.0, 0.0]).unwrap();
    assert!(matches!(cubic.elements()[1], PathEl::CurveTo(_, _, _)));
}

#[test]
fn long_polygons_chain_quadratics_to_the_last_point() {
    let path = bezier_curve(&[0.0, 0.0, 1.0, 2.0, 2.0, 2.0, 3.0, 1.0, 4.0, 0.0]).unwrap();
    let els = path.elements();
    assert_eq!(els.len(), 4);
    assert!(els[1..].iter().all(|e| matches!(e, PathEl::QuadTo(_, _))));
    match els[3] {
        PathEl::QuadTo(_, end) => assert_eq!(end, Point::new(4.0, 0.0)),
        ref other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn malformed_control_points_are_rejected() {
    assert!(bezier_curve(&[]).is_err());
    assert!(bezier_curve(&[1.0, 2.0]).is_err());
    assert!(bezier_curve(&[1.0, 2.0, 3.0]).is_err());
    assert!(bezier_curve(&[0.0, 0.0, f64::NAN, 1.0]).is_err());
}

#[test]
fn flourishes_hug_the_corners() {
    let canvas = Canvas::new(1920, 1080).unwrap();
    let curves = corner_flourishes(canvas).unwrap();
    let top_left = curves[0].bounding_box();
    assert_eq!(top_left.x0, 128.0);
    assert_eq!(top_left.x1, 384.0);
    assert!(top_left.y0 >= 72.0 && top_left.y1 <= 216.0);

    let bottom_right = curves[3].bounding_box();
    assert_eq!(bottom_right.x1, 1920.0 - 128.0);
    assert!(bottom_right.y1 <= 1080.0 - 72.0 + 1e-9);
}

#[test]
fn background_is_fill_then_four_white_strokes() {
    let canvas = Canvas::new(640, 480).unwrap();
    let Element::Group(layers) = talk_background(canvas).unwrap() else {
        panic!("background should be a group");
    };
    assert_eq!(layers.len(), 5);
    assert!(matches!(
        layers[0],
        Element::Fill(FillElement { width: 640, height: 480, color }) if color == Rgba8::INDIAN_RED
    ));
    assert!(layers[1..].iter().all(|l| matches!(
        l,
        Element::Shape(ShapeElement { stroke, .. }) if *stroke == Rgba8::WHITE
    )));
}
