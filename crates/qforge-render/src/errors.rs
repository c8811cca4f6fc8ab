use thiserror::Error;

use qforge_core::BaseType;

/// Errors emitted while rendering a value.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Value(#[from] qforge_core::Error),
    #[error("{kind} value {value} is outside the representable calendar range")]
    OutOfRange { kind: BaseType, value: String },
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
}
