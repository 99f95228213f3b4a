//! Placement helpers for common slide content.
//!
//! Positions are fractions of the canvas. Titles and headers use the styles the
//! [`StyleRegistry`] designates for them.

use crate::{
    content::element::{Anchor, Element, ImageElement, TextElement},
    foundation::core::{RelPos, Vec2},
    foundation::error::DeckResult,
    style::registry::{StyleRegistry, TextStyle},
};

const TITLE_POS: RelPos = RelPos { x: 0.5, y: 0.4 };
const HEADER_POS: RelPos = RelPos { x: 0.5, y: 0.2 };

fn text_el(style: TextStyle, text: &str, pos: RelPos, anchor: Anchor) -> Element {
    Element::Text(TextElement {
        text: text.to_string(),
        style,
        pos,
        anchor,
    })
}

/// Large centered title in the registry's title style.
pub fn title(styles: &StyleRegistry, text: &str) -> Element {
    text_el(styles.title(), text, TITLE_POS, Anchor::Center)
}

/// Centered slide header in the registry's header style.
pub fn header(styles: &StyleRegistry, text: &str) -> Element {
    text_el(styles.header(), text, HEADER_POS, Anchor::Center)
}

/// One line of text centered on `(x, y)`.
pub fn txt_at(style: TextStyle, text: &str, x: f64, y: f64) -> DeckResult<Element> {
    Ok(text_el(style, text, RelPos::new(x, y)?, Anchor::Center))
}

/// Centered lines; line `i` sits at `(x + i*dx, y + i*dy)`.
pub fn txt_set_at(
    style: TextStyle,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    lines: &[&str],
) -> DeckResult<Vec<Element>> {
    txt_set(style, x, y, dx, dy, lines, Anchor::Center)
}

/// Like [`txt_set_at`] but each line starts at its position instead of being centered.
pub fn txt_set_from(
    style: TextStyle,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    lines: &[&str],
) -> DeckResult<Vec<Element>> {
    txt_set(style, x, y, dx, dy, lines, Anchor::TopLeft)
}

fn txt_set(
    style: TextStyle,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    lines: &[&str],
    anchor: Anchor,
) -> DeckResult<Vec<Element>> {
    let origin = RelPos::new(x, y)?;
    RelPos::new(dx, dy)?;
    Ok(lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let k = i as f64;
            text_el(style, line, origin.offset(k * dx, k * dy), anchor)
        })
        .collect())
}

/// Image with its top-left corner at `(x, y)`, unscaled.
pub fn image(source: &str, x: f64, y: f64) -> DeckResult<Element> {
    image_el(source, RelPos::new(x, y)?, Anchor::TopLeft, Vec2::new(1.0, 1.0))
}

/// Image centered on `(x, y)` and scaled by `scale`.
pub fn image_at(source: &str, x: f64, y: f64, scale: Vec2) -> DeckResult<Element> {
    image_el(source, RelPos::new(x, y)?, Anchor::Center, scale)
}

fn image_el(source: &str, pos: RelPos, anchor: Anchor, scale: Vec2) -> DeckResult<Element> {
    let img = ImageElement {
        source: source.to_string(),
        pos,
        anchor,
        scale,
    };
    img.validate()?;
    Ok(Element::Image(img))
}

#[cfg(test)]
#[path = "../../tests/unit/content/place.rs"]
mod tests;
