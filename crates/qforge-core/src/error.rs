use thiserror::Error;

/// Core error type shared across qforge crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A selector or type tag outside the supported set.
    #[error("not implemented: {0}")]
    Unimplemented(String),
    /// A value of one shape was passed where another is required.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    /// Keys and values, or table columns, disagree on length.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    /// Element access beyond the end of a container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Convenience alias for results returned by qforge crates.
pub type Result<T> = std::result::Result<T, Error>;
