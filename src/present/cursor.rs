use crate::foundation::error::{DeckError, DeckResult};

/// Current position in a deck of `len` slides.
///
/// Moving past either end clamps. Empty decks have no current slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    /// Cursor on the first slide.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current flat index, `None` for an empty deck.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Deck length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for an empty deck.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slide. Returns `false` when already on the last slide.
    pub fn next(&mut self) -> bool {
        if self.index + 1 >= self.len {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back one slide. Returns `false` when already on the first slide.
    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump to 1-based slide `number`; out-of-range numbers leave the cursor put.
    pub fn jump_to_number(&mut self, number: usize) -> DeckResult<()> {
        if number == 0 || number > self.len {
            return Err(DeckError::validation(format!(
                "slide number {number} is outside 1..={}",
                self.len
            )));
        }
        self.index = number - 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/cursor.rs"]
mod tests;
