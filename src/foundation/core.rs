use crate::foundation::error::{DeckError, DeckResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Output surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> DeckResult<Self> {
        if width == 0 || height == 0 {
            return Err(DeckError::configuration("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Canvas bounds as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// CSS `white`.
    pub const WHITE: Self = Self::opaque(0xff, 0xff, 0xff);
    /// CSS `black`.
    pub const BLACK: Self = Self::opaque(0x00, 0x00, 0x00);
    /// CSS `blue`.
    pub const BLUE: Self = Self::opaque(0x00, 0x00, 0xff);
    /// CSS `indianred`.
    pub const INDIAN_RED: Self = Self::opaque(0xcd, 0x5c, 0x5c);

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// `#rrggbbaa` form, used in outlines.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Position expressed in fractions of the canvas (`0.0..=1.0` is on screen).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RelPos {
    /// Horizontal fraction of canvas width.
    pub x: f64,
    /// Vertical fraction of canvas height.
    pub y: f64,
}

impl RelPos {
    /// Create a relative position; both components must be finite.
    pub fn new(x: f64, y: f64) -> DeckResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DeckError::validation("relative position must be finite"));
        }
        Ok(Self { x, y })
    }

    /// Map onto pixel coordinates of `canvas`.
    pub fn to_canvas(self, canvas: Canvas) -> Point {
        Point::new(
            self.x * f64::from(canvas.width),
            self.y * f64::from(canvas.height),
        )
    }

    /// Shift by a relative delta.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Half-open range of flat slide indices `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlideRange {
    /// First slide index owned by the range.
    pub start: usize,
    /// One past the last slide index.
    pub end: usize, // exclusive
}

impl SlideRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: usize, end: usize) -> DeckResult<Self> {
        if start > end {
            return Err(DeckError::configuration("SlideRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of slides in the range.
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// `true` when the range owns no slides.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// `true` when `index` falls in `[start, end)`.
    pub fn contains(self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
