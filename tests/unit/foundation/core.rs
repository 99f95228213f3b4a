use super::*;

#[test]
fn slide_range_contains_boundaries() {
    let r = SlideRange::new(2, 5).unwrap();
    assert!(!r.contains(1));
    assert!(r.contains(2));
    assert!(r.contains(4));
    assert!(!r.contains(5));
    assert_eq!(r.len(), 3);
}

#[test]
fn slide_range_rejects_inverted_bounds() {
    assert!(SlideRange::new(3, 2).is_err());
    assert!(SlideRange::new(4, 4).unwrap().is_empty());
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(1920, 1080).unwrap();
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 1920.0, 1080.0));
}

#[test]
fn rel_pos_maps_onto_canvas() {
    let c = Canvas::new(200, 100).unwrap();
    let p = RelPos::new(0.25, 0.5).unwrap().to_canvas(c);
    assert_eq!(p, Point::new(50.0, 50.0));
    assert!(RelPos::new(f64::NAN, 0.0).is_err());
}

#[test]
fn named_colors_render_as_hex() {
    assert_eq!(Rgba8::INDIAN_RED.to_hex(), "#cd5c5cff");
    assert_eq!(Rgba8::WHITE.to_hex(), "#ffffffff");
}
