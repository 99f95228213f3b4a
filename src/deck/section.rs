use std::fmt;

use crate::{
    content::element::{Element, Slide},
    foundation::core::SlideRange,
    foundation::error::{DeckError, DeckResult},
    style::registry::StyleRegistry,
};

/// Populates the slides of one section.
///
/// Implemented for any `Fn(&mut SectionSlides<'_>, &StyleRegistry) -> DeckResult<()>`,
/// so plain functions and closures both work.
pub trait SlideBuilder {
    /// Append content to the slides in `slides`.
    fn build(&self, slides: &mut SectionSlides<'_>, styles: &StyleRegistry) -> DeckResult<()>;
}

impl<F> SlideBuilder for F
where
    F: Fn(&mut SectionSlides<'_>, &StyleRegistry) -> DeckResult<()>,
{
    fn build(&self, slides: &mut SectionSlides<'_>, styles: &StyleRegistry) -> DeckResult<()> {
        self(slides, styles)
    }
}

/// A named, fixed-size group of slides and the builder that fills them.
pub struct Section {
    name: String,
    slide_count: usize,
    builder: Box<dyn SlideBuilder>,
}

impl Section {
    /// Declare a section.
    ///
    /// `slide_count` is signed so that a negative count from a computed
    /// declaration surfaces as a [`DeckError::Configuration`] instead of wrapping.
    pub fn new(
        name: impl Into<String>,
        slide_count: i64,
        builder: impl SlideBuilder + 'static,
    ) -> DeckResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DeckError::configuration("section name must be non-empty"));
        }
        let slide_count = usize::try_from(slide_count).map_err(|_| {
            DeckError::configuration(format!(
                "section '{name}' declares a negative slide count ({slide_count})"
            ))
        })?;
        Ok(Self {
            name,
            slide_count,
            builder: Box::new(builder),
        })
    }

    /// Declare a section whose builder is a closure.
    pub fn from_fn<F>(name: impl Into<String>, slide_count: i64, f: F) -> DeckResult<Self>
    where
        F: Fn(&mut SectionSlides<'_>, &StyleRegistry) -> DeckResult<()> + 'static,
    {
        Self::new(name, slide_count, f)
    }

    /// Section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of slides the section owns.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub(crate) fn builder(&self) -> &dyn SlideBuilder {
        self.builder.as_ref()
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("slide_count", &self.slide_count)
            .finish_non_exhaustive()
    }
}

/// Range-restricted view over the slides owned by one section.
///
/// Indices are local: `0` is the section's first slide. Addressing past the
/// end of the view is a [`DeckError::ContractViolation`].
#[derive(Debug)]
pub struct SectionSlides<'a> {
    name: &'a str,
    range: SlideRange,
    slides: &'a mut [Slide],
}

impl<'a> SectionSlides<'a> {
    pub(crate) fn new(name: &'a str, range: SlideRange, slides: &'a mut [Slide]) -> Self {
        debug_assert_eq!(range.len(), slides.len());
        Self {
            name,
            range,
            slides,
        }
    }

    /// Name of the owning section.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Flat index of the first slide in the view.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Flat range covered by the view.
    pub fn range(&self) -> SlideRange {
        self.range
    }

    /// Number of slides in the view.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// `true` for zero-length sections.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Flat index of local slide `k`.
    pub fn global_index(&self, k: usize) -> DeckResult<usize> {
        if k >= self.slides.len() {
            return Err(out_of_range(self.name, self.range, k));
        }
        Ok(self.range.start + k)
    }

    /// Read local slide `k`.
    pub fn get(&self, k: usize) -> DeckResult<&Slide> {
        self.slides
            .get(k)
            .ok_or_else(|| out_of_range(self.name, self.range, k))
    }

    /// Mutable access to local slide `k`.
    pub fn slide(&mut self, k: usize) -> DeckResult<&mut Slide> {
        let (name, range) = (self.name, self.range);
        self.slides
            .get_mut(k)
            .ok_or_else(|| out_of_range(name, range, k))
    }

    /// Append one element to local slide `k`.
    pub fn append(&mut self, k: usize, element: Element) -> DeckResult<()> {
        self.slide(k)?.append(element);
        Ok(())
    }

    /// Append elements to local slide `k`.
    pub fn extend(
        &mut self,
        k: usize,
        elements: impl IntoIterator<Item = Element>,
    ) -> DeckResult<()> {
        self.slide(k)?.extend(elements);
        Ok(())
    }
}

fn out_of_range(name: &str, range: SlideRange, k: usize) -> DeckError {
    DeckError::contract(format!(
        "section '{name}' addressed local slide {k} (flat index {}) outside its range [{}, {})",
        range.start.saturating_add(k),
        range.start,
        range.end
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/deck/section.rs"]
mod tests;
