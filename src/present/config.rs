use std::path::Path;

use crate::{
    foundation::core::Canvas,
    foundation::error::{DeckError, DeckResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Initial display configuration handed to a presentation driver.
pub struct DisplayConfig {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Logical update rate (frames per second).
    pub frame_rate: u32,
    /// Draw rate (frames per second).
    pub draw_frame_rate: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            frame_rate: 30,
            draw_frame_rate: 30,
        }
    }
}

impl DisplayConfig {
    /// Reject zero dimensions or rates.
    pub fn validate(&self) -> DeckResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DeckError::configuration(
                "display width/height must be > 0",
            ));
        }
        if self.frame_rate == 0 || self.draw_frame_rate == 0 {
            return Err(DeckError::configuration(
                "display frame_rate/draw_frame_rate must be > 0",
            ));
        }
        Ok(())
    }

    /// Canvas matching the display size.
    pub fn canvas(&self) -> DeckResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Parse and validate a JSON configuration. Missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> DeckResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| DeckError::serde(format!("display config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse, and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> DeckResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            DeckError::Other(anyhow::Error::new(e).context(format!(
                "read display config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/config.rs"]
mod tests;
