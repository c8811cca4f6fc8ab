use thiserror::Error;

/// Errors emitted by the generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Value(#[from] qforge_core::Error),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl GenerationError {
    pub fn unimplemented(what: impl Into<String>) -> Self {
        Self::Value(qforge_core::Error::Unimplemented(what.into()))
    }

    /// True when the selector or type was not recognized.
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Value(qforge_core::Error::Unimplemented(_)))
    }
}
