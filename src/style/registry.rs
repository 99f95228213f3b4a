use std::collections::BTreeMap;

use crate::foundation::{
    core::Rgba8,
    error::{DeckError, DeckResult},
};

/// Font faces available to slide text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FontFamily {
    /// Display face used for decorative text.
    Express,
    /// Body face used for titles, headers, and bullet lists.
    Gnuolane,
    /// Serif face.
    Libel,
}

impl FontFamily {
    /// Relative path of the font file the presenter should load.
    pub fn font_source(self) -> &'static str {
        match self {
            Self::Express => "fonts/express.ttf",
            Self::Gnuolane => "fonts/gnuolane.ttf",
            Self::Libel => "fonts/libel.ttf",
        }
    }
}

/// A resolved `{font, size, color}` text style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Font face.
    pub family: FontFamily,
    /// Font size in pixels.
    pub size_px: f32,
    /// Text color.
    pub color: Rgba8,
}

impl TextStyle {
    /// Base style for `family`: 12px white.
    pub fn new(family: FontFamily) -> Self {
        Self {
            family,
            size_px: 12.0,
            color: Rgba8::WHITE,
        }
    }

    /// Copy of this style at another size.
    pub fn with_size(self, size_px: f32) -> Self {
        Self { size_px, ..self }
    }

    /// Copy of this style in another color.
    pub fn with_color(self, color: Rgba8) -> Self {
        Self { color, ..self }
    }

    fn validate(&self, name: &str) -> DeckResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(DeckError::configuration(format!(
                "style '{name}' size_px must be finite and > 0"
            )));
        }
        Ok(())
    }
}

/// Immutable mapping from style name to [`TextStyle`].
///
/// Built once with [`StyleRegistryBuilder`] and shared by reference with every
/// section builder. The registry also designates the styles used by
/// [`crate::title`] and [`crate::header`].
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    styles: BTreeMap<String, TextStyle>,
    title: String,
    header: String,
}

impl StyleRegistry {
    /// Start building a registry.
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::default()
    }

    /// Look up a style by name.
    pub fn get(&self, name: &str) -> Option<&TextStyle> {
        self.styles.get(name)
    }

    /// Look up a style by name, failing on unknown names.
    pub fn resolve(&self, name: &str) -> DeckResult<TextStyle> {
        self.get(name)
            .copied()
            .ok_or_else(|| DeckError::validation(format!("unknown text style '{name}'")))
    }

    /// Style used for section titles.
    pub fn title(&self) -> TextStyle {
        self.styles[&self.title]
    }

    /// Style used for slide headers.
    pub fn header(&self) -> TextStyle {
        self.styles[&self.header]
    }

    /// Registered styles in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TextStyle)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// `true` when no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Builder for [`StyleRegistry`].
#[derive(Debug, Default)]
pub struct StyleRegistryBuilder {
    styles: BTreeMap<String, TextStyle>,
    title: Option<String>,
    header: Option<String>,
}

impl StyleRegistryBuilder {
    /// Register `style` under `name`. Names must be unique and non-empty.
    pub fn style(mut self, name: impl Into<String>, style: TextStyle) -> DeckResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DeckError::configuration("style name must be non-empty"));
        }
        style.validate(&name)?;
        if self.styles.contains_key(&name) {
            return Err(DeckError::configuration(format!(
                "duplicate style name '{name}'"
            )));
        }
        self.styles.insert(name, style);
        Ok(self)
    }

    /// Name the style used by titles.
    pub fn title(mut self, name: impl Into<String>) -> Self {
        self.title = Some(name.into());
        self
    }

    /// Name the style used by headers.
    pub fn header(mut self, name: impl Into<String>) -> Self {
        self.header = Some(name.into());
        self
    }

    /// Finish the registry. Title and header must name registered styles.
    pub fn build(self) -> DeckResult<StyleRegistry> {
        let title = self
            .title
            .ok_or_else(|| DeckError::configuration("style registry needs a title style"))?;
        let header = self
            .header
            .ok_or_else(|| DeckError::configuration("style registry needs a header style"))?;
        for (role, name) in [("title", &title), ("header", &header)] {
            if !self.styles.contains_key(name) {
                return Err(DeckError::configuration(format!(
                    "{role} style '{name}' is not registered"
                )));
            }
        }
        Ok(StyleRegistry {
            styles: self.styles,
            title,
            header,
        })
    }
}

/// The registry used by the talk deck.
pub fn talk_styles() -> DeckResult<StyleRegistry> {
    let express = TextStyle::new(FontFamily::Express);
    let gnuolane = TextStyle::new(FontFamily::Gnuolane);
    let libel = TextStyle::new(FontFamily::Libel);

    let mut builder = StyleRegistry::builder();
    for size in [28.0_f32, 44.0, 72.0] {
        let px = size as u32;
        builder = builder
            .style(format!("express{px}"), express.with_size(size))?
            .style(format!("gnuolane{px}"), gnuolane.with_size(size))?
            .style(format!("libel{px}"), libel.with_size(size))?;
    }
    builder
        .style("rlibel28", libel.with_size(28.0).with_color(Rgba8::BLUE))?
        .title("gnuolane72")
        .header("gnuolane44")
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/style/registry.rs"]
mod tests;
