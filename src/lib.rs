//! Slidedeck assembles a presentation from named sections.
//!
//! Each [`Section`] declares how many slides it owns and a builder that fills
//! them. Assembly turns an ordered list of sections into one flat, read-only
//! [`SlideSet`] that a [`PresentationDriver`] shows one slide at a time.
//!
//! # Pipeline overview
//!
//! 1. **Allocate**: `[(name, slide_count)] -> OffsetTable` (pure running-sum offsets)
//! 2. **Assemble**: every builder runs once, in declaration order, on a
//!    [`SectionSlides`] view restricted to its own range
//! 3. **Present**: the finished [`SlideSet`] is handed to a driver together with a
//!    [`DisplayConfig`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same sections always produce the same offsets and content.
//! - **Fail fast**: a builder that addresses a slide outside its range gets a
//!   [`DeckError::ContractViolation`] and assembly stops.
//! - **Data only**: elements describe content; rasterization belongs to the driver.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod content;
mod deck;
mod foundation;
mod present;
mod style;

/// The conference talk shipped with the `slidedeck` binary.
pub mod talk;

pub use content::element::{
    Anchor, Element, FillElement, ImageElement, ShapeElement, Slide, TextElement,
};
pub use content::place::{header, image, image_at, title, txt_at, txt_set_at, txt_set_from};
pub use content::shape::{bezier_curve, corner_flourishes, talk_background};
pub use deck::allocate::{OffsetTable, SectionSpan, allocate};
pub use deck::assemble::{SlideSet, assemble};
pub use deck::section::{Section, SectionSlides, SlideBuilder};
pub use foundation::core::{BezPath, Canvas, Point, Rect, RelPos, Rgba8, SlideRange, Vec2};
pub use foundation::error::{DeckError, DeckResult};
pub use present::config::DisplayConfig;
pub use present::cursor::SlideCursor;
pub use present::driver::{PresentationDriver, TerminalDriver, outline};
pub use style::registry::{
    FontFamily, StyleRegistry, StyleRegistryBuilder, TextStyle, talk_styles,
};
