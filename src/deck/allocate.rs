use std::collections::BTreeSet;

use crate::{
    foundation::core::SlideRange,
    foundation::error::{DeckError, DeckResult},
};

/// The flat range assigned to one section.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SectionSpan {
    /// Section name.
    pub name: String,
    /// Flat slide range `[start, start + slide_count)`.
    pub range: SlideRange,
}

/// Offsets for an ordered list of sections.
///
/// Spans are in declaration order, contiguous, and non-overlapping; together
/// they cover `[0, total)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct OffsetTable {
    spans: Vec<SectionSpan>,
    total: usize,
}

impl OffsetTable {
    /// Sum of all section slide counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Spans in declaration order.
    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    /// Span of the section called `name`.
    pub fn get(&self, name: &str) -> Option<&SectionSpan> {
        self.spans.iter().find(|s| s.name == name)
    }

    /// Start offset of the section called `name`.
    pub fn start_of(&self, name: &str) -> Option<usize> {
        self.get(name).map(|s| s.range.start)
    }

    /// The section owning flat slide `index`.
    pub fn section_of(&self, index: usize) -> Option<&SectionSpan> {
        if index >= self.total {
            return None;
        }
        let pos = self.spans.partition_point(|s| s.range.end <= index);
        self.spans.get(pos)
    }
}

/// Assign each `(name, slide_count)` a start offset equal to the running sum of
/// the counts declared before it.
///
/// Pure: no slides are created. Names must be unique; a running sum that
/// overflows `usize` is a configuration error.
pub fn allocate<'a, I>(entries: I) -> DeckResult<OffsetTable>
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let mut seen = BTreeSet::new();
    let mut spans = Vec::new();
    let mut next_start = 0usize;

    for (name, count) in entries {
        if !seen.insert(name) {
            return Err(DeckError::configuration(format!(
                "duplicate section name '{name}'"
            )));
        }
        let end = next_start.checked_add(count).ok_or_else(|| {
            DeckError::configuration(format!(
                "section '{name}' overflows the slide index space"
            ))
        })?;
        spans.push(SectionSpan {
            name: name.to_string(),
            range: SlideRange::new(next_start, end)?,
        });
        next_start = end;
    }

    Ok(OffsetTable {
        spans,
        total: next_start,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/deck/allocate.rs"]
mod tests;
