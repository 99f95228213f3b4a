use super::*;
use crate::style::registry::FontFamily;

fn text(s: &str) -> Element {
    Element::Text(TextElement {
        text: s.to_string(),
        style: TextStyle::new(FontFamily::Gnuolane),
        pos: RelPos::new(0.5, 0.5).unwrap(),
        anchor: Anchor::Center,
    })
}

#[test]
fn slide_keeps_append_order() {
    let mut slide = Slide::new();
    assert!(slide.is_empty());
    slide.append(text("a"));
    slide.extend([text("b"), text("c")]);
    let got: Vec<_> = slide
        .elements()
        .iter()
        .map(|e| match e {
            Element::Text(t) => t.text.clone(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(got, ["a", "b", "c"]);
}

#[test]
fn rel_source_rules() {
    assert!(validate_rel_source("logo.png", "f").is_ok());
    assert!(validate_rel_source("img\\logo.png", "f").is_ok());
    assert!(validate_rel_source("", "f").is_err());
    assert!(validate_rel_source("/abs/logo.png", "f").is_err());
    assert!(validate_rel_source("../logo.png", "f").is_err());
}

#[test]
fn shape_serializes_as_svg_path() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((10.0, 0.0));
    let el = Element::Shape(ShapeElement {
        path,
        stroke: Rgba8::WHITE,
        thickness: 1.0,
    });
    let v = serde_json::to_value(&el).unwrap();
    let d = v["shape"]["path"].as_str().unwrap();
    assert!(d.starts_with('M'));
    assert!(d.contains("L10,0"));
}

#[test]
fn describe_mentions_payload() {
    assert!(text("Hello").describe().contains("\"Hello\""));
    let fill = Element::Fill(FillElement {
        width: 4,
        height: 2,
        color: Rgba8::BLACK,
    });
    assert_eq!(fill.describe(), "fill 4x2 #000000ff");
}
