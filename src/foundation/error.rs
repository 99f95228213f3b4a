/// Convenience result type used across the crate.
pub type DeckResult<T> = Result<T, DeckError>;

/// Error type for deck declaration, assembly, and presentation.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// A declaration is malformed (negative slide count, duplicate name, zero dimensions).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A builder addressed a slide outside the range assigned to its section.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// Slide content is invalid (bad image source, unknown style, non-finite placement).
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure (I/O, wrapped sources).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`DeckError::ContractViolation`].
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }

    /// Build a [`DeckError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
