use crate::{
    foundation::core::{BezPath, RelPos, Rgba8, Vec2},
    foundation::error::{DeckError, DeckResult},
    style::registry::TextStyle,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// A renderable piece of slide content.
///
/// Elements are plain data: the presenter decides how to rasterize them.
pub enum Element {
    /// A single line of text.
    Text(TextElement),
    /// A raster image loaded by the presenter.
    Image(ImageElement),
    /// A stroked curve.
    Shape(ShapeElement),
    /// A solid color box anchored at the origin.
    Fill(FillElement),
    /// Elements drawn in order as one unit.
    Group(Vec<Element>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Which point of an element sits on its position.
pub enum Anchor {
    /// Element is centered on its position.
    #[default]
    Center,
    /// Element's top-left corner sits on its position.
    TopLeft,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Text placed on a slide.
pub struct TextElement {
    /// UTF-8 text.
    pub text: String,
    /// Resolved style.
    pub style: TextStyle,
    /// Position in canvas fractions.
    pub pos: RelPos,
    /// Anchor used for `pos`.
    pub anchor: Anchor,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Image placed on a slide.
pub struct ImageElement {
    /// Relative path to the image file.
    pub source: String,
    /// Position in canvas fractions.
    pub pos: RelPos,
    /// Anchor used for `pos`.
    pub anchor: Anchor,
    /// Non-uniform scale, default `(1, 1)`.
    pub scale: Vec2,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A stroked path in canvas pixels.
pub struct ShapeElement {
    /// Path geometry.
    #[serde(serialize_with = "serialize_svg_path")]
    pub path: BezPath,
    /// Stroke color.
    pub stroke: Rgba8,
    /// Stroke thickness in pixels.
    pub thickness: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// A solid color box.
pub struct FillElement {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fill color.
    pub color: Rgba8,
}

fn serialize_svg_path<S: serde::Serializer>(path: &BezPath, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_svg())
}

impl ImageElement {
    /// Validate the source path and scale.
    pub fn validate(&self) -> DeckResult<()> {
        validate_rel_source(&self.source, "image source")?;
        if !self.scale.x.is_finite() || !self.scale.y.is_finite() {
            return Err(DeckError::validation("image scale must be finite"));
        }
        Ok(())
    }
}

pub(crate) fn validate_rel_source(source: &str, field: &str) -> DeckResult<()> {
    if source.trim().is_empty() {
        return Err(DeckError::validation(format!("{field} must be non-empty")));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(DeckError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    if s.split('/').any(|part| part == "..") {
        return Err(DeckError::validation(format!(
            "{field} must not contain '..'"
        )));
    }
    Ok(())
}

impl Element {
    /// One-line human readable description, used by text presenters.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(t) => format!("text {:?} @ ({:.2}, {:.2})", t.text, t.pos.x, t.pos.y),
            Self::Image(i) => format!(
                "image {} @ ({:.2}, {:.2}) x{:.2}",
                i.source, i.pos.x, i.pos.y, i.scale.x
            ),
            Self::Shape(s) => format!("shape {} {}px", s.stroke.to_hex(), s.thickness),
            Self::Fill(f) => format!("fill {}x{} {}", f.width, f.height, f.color.to_hex()),
            Self::Group(items) => format!("group of {}", items.len()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Ordered content shown as one screen.
///
/// Content order equals append order.
pub struct Slide {
    elements: Vec<Element>,
}

impl Slide {
    /// An empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one element.
    pub fn append(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Append elements in iteration order.
    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    /// Elements in draw order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/element.rs"]
mod tests;
