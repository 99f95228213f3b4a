use crate::{
    content::element::{Element, FillElement, ShapeElement},
    foundation::core::{BezPath, Canvas, Point, Rgba8},
    foundation::error::{DeckError, DeckResult},
};

/// Build a Bézier path from flat `x0, y0, x1, y1, ...` control coordinates.
///
/// Two points give a line, three a quadratic, four a cubic. Longer control
/// polygons become a chain of quadratics joined at the midpoints of interior
/// edges.
pub fn bezier_curve(coords: &[f64]) -> DeckResult<BezPath> {
    if coords.len() % 2 != 0 {
        return Err(DeckError::configuration(format!(
            "bezier control coordinates must come in x,y pairs (got {})",
            coords.len()
        )));
    }
    if coords.len() < 4 {
        return Err(DeckError::configuration(
            "bezier curve needs at least two control points",
        ));
    }
    if coords.iter().any(|v| !v.is_finite()) {
        return Err(DeckError::configuration(
            "bezier control coordinates must be finite",
        ));
    }

    let pts: Vec<Point> = coords
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect();

    let mut path = BezPath::new();
    path.move_to(pts[0]);
    match pts.len() {
        2 => path.line_to(pts[1]),
        3 => path.quad_to(pts[1], pts[2]),
        4 => path.curve_to(pts[1], pts[2], pts[3]),
        n => {
            for i in 1..n - 2 {
                path.quad_to(pts[i], pts[i].midpoint(pts[i + 1]));
            }
            path.quad_to(pts[n - 2], pts[n - 1]);
        }
    }
    Ok(path)
}

/// The four corner curves framing the talk background.
pub fn corner_flourishes(canvas: Canvas) -> DeckResult<[BezPath; 4]> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let (w15, w5) = (f64::from(canvas.width / 15), f64::from(canvas.width / 5));
    let (h15, h5) = (f64::from(canvas.height / 15), f64::from(canvas.height / 5));

    Ok([
        bezier_curve(&[w15, h5, w15, h15, w5, h15])?,
        bezier_curve(&[w - w15, h5, w - w15, h15, w - w5, h15])?,
        bezier_curve(&[w15, h - h5, w15, h - h15, w5, h - h15])?,
        bezier_curve(&[w - w15, h - h5, w - w15, h - h15, w - w5, h - h15])?,
    ])
}

/// Indian-red backdrop with white corner flourishes.
pub fn talk_background(canvas: Canvas) -> DeckResult<Element> {
    let mut layers = Vec::with_capacity(5);
    layers.push(Element::Fill(FillElement {
        width: canvas.width,
        height: canvas.height,
        color: Rgba8::INDIAN_RED,
    }));
    for path in corner_flourishes(canvas)? {
        layers.push(Element::Shape(ShapeElement {
            path,
            stroke: Rgba8::WHITE,
            thickness: 1.0,
        }));
    }
    Ok(Element::Group(layers))
}

#[cfg(test)]
#[path = "../../tests/unit/content/shape.rs"]
mod tests;
