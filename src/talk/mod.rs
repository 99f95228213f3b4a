//! The "Oak: a pure Go game engine" conference talk.
//!
//! Each section is a plain builder function; [`sections`] lists them in
//! presentation order and [`build`] assembles the deck.

mod slides;

use crate::{
    content::shape::talk_background,
    deck::{assemble::SlideSet, assemble::assemble, section::Section},
    foundation::core::Canvas,
    foundation::error::DeckResult,
    style::registry::talk_styles,
};

/// Talk sections in presentation order.
pub fn sections() -> DeckResult<Vec<Section>> {
    Ok(vec![
        Section::new("intro", 5, slides::intro)?,
        Section::new("engines", 7, slides::engines)?,
        Section::new("examples", 1, slides::examples)?,
        Section::new("philosophy", 7, slides::philosophy)?,
        Section::new("full games", 1, slides::full_games)?,
        Section::new("conclusion", 2, slides::conclusion)?,
    ])
}

/// Assemble the talk for `canvas` with its styles and background.
pub fn build(canvas: Canvas) -> DeckResult<SlideSet> {
    let styles = talk_styles()?;
    assemble(&sections()?, &styles, Some(talk_background(canvas)?))
}

#[cfg(test)]
#[path = "../../tests/unit/talk/deck.rs"]
mod tests;
