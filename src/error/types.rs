use thiserror::Error;

/// Unified result type for stimulus generation.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors surfaced by the layout generator and the condition enumerator.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A color or dimension outside the closed taxonomy.
    #[error("{kind} `{value}` is not supported")]
    UnsupportedValue { kind: &'static str, value: String },
    /// The requested populations cannot fit in the grid.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// The static catalog has no entry for a stimulus name.
    #[error("no catalog entry for stimulus `{0}`")]
    MissingAsset(String),
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("catalog configuration error: {0}")]
    Config(String),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    pub(crate) fn unsupported(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            kind,
            value: value.into(),
        }
    }
}
