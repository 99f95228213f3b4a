use crate::{
    content::element::{Element, Slide},
    deck::allocate::{OffsetTable, SectionSpan, allocate},
    deck::section::{Section, SectionSlides},
    foundation::error::{DeckError, DeckResult},
    style::registry::StyleRegistry,
};

/// The finished, read-only flat slide sequence.
///
/// Produced by [`assemble`]; nothing can append to it afterwards.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SlideSet {
    slides: Vec<Slide>,
    offsets: OffsetTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<Element>,
}

impl SlideSet {
    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// `true` for an empty presentation.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at flat `index`.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Iterate slides in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Offset table the slides were assembled from.
    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    /// Section spans in declaration order.
    pub fn spans(&self) -> &[SectionSpan] {
        self.offsets.spans()
    }

    /// The section owning flat slide `index`.
    pub fn section_of(&self, index: usize) -> Option<&SectionSpan> {
        self.offsets.section_of(index)
    }

    /// Backdrop drawn beneath every slide.
    pub fn background(&self) -> Option<&Element> {
        self.background.as_ref()
    }

    /// Pretty JSON dump of slides, spans, and background.
    pub fn to_json_pretty(&self) -> DeckResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DeckError::serde(format!("slide set to json: {e}")))
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Allocate offsets for `sections`, then run each section's builder once, in
/// declaration order, over a view restricted to its own slides.
///
/// Zero-length sections own no slides and their builders are not invoked.
/// The first builder error aborts assembly.
#[tracing::instrument(skip_all, fields(sections = sections.len()))]
pub fn assemble(
    sections: &[Section],
    styles: &StyleRegistry,
    background: Option<Element>,
) -> DeckResult<SlideSet> {
    let offsets = allocate(sections.iter().map(|s| (s.name(), s.slide_count())))?;
    tracing::info!(total = offsets.total(), "allocated slide offsets");

    let mut slides = vec![Slide::new(); offsets.total()];
    let mut rest: &mut [Slide] = &mut slides;

    for (section, span) in sections.iter().zip(offsets.spans()) {
        let (owned, tail) = std::mem::take(&mut rest).split_at_mut(span.range.len());
        rest = tail;

        if span.range.is_empty() {
            tracing::debug!(section = %span.name, "skipping zero-length section");
            continue;
        }

        tracing::debug!(
            section = %span.name,
            start = span.range.start,
            len = span.range.len(),
            "building section"
        );
        let mut view = SectionSlides::new(&span.name, span.range, owned);
        section.builder().build(&mut view, styles)?;
    }
    debug_assert!(rest.is_empty());

    Ok(SlideSet {
        slides,
        offsets,
        background,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/deck/assemble.rs"]
mod tests;
