//! Errors produced while transforming a data unit

/// Which side of the input/transform line an error falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be decoded, or lacked the expected structure.
    Decode,
    /// The transform itself failed while computing a mutation.
    Internal,
}

/// A non-fatal failure to transform a data unit.
///
/// Its `Display` output is the message reported over the host's error channel.
#[derive(thiserror::Error, Debug)]
pub enum TransformError {
    /// The input is not valid JSON.
    #[error("failed to decode json: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not valid UTF-8.
    #[error("input is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The field the transform works on is absent.
    #[error("field `{0}` not found")]
    MissingField(String),

    /// A value along the field path has the wrong type.
    #[error("field `{field}` is not {expected}")]
    FieldType {
        /// The path to the offending value.
        field: String,
        /// What was expected there.
        expected: &'static str,
    },

    /// The policy could not be configured.
    #[error("transform is misconfigured: {0}")]
    Config(#[from] ConfigError),

    /// A catch-all for faults while computing the mutation.
    #[error("transform failed: {0}")]
    Internal(String),
}

impl TransformError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::Json(_)
            | TransformError::Utf8(_)
            | TransformError::MissingField(_)
            | TransformError::FieldType { .. } => ErrorKind::Decode,
            TransformError::Config(_) | TransformError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Wrap any displayable fault as an internal error.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        TransformError::Internal(cause.to_string())
    }
}

/// A transform configuration that cannot be used.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An empty pattern would match everywhere without consuming input.
    #[error("substitution pattern #{index} is empty")]
    EmptyPattern {
        /// Position of the rule as declared.
        index: usize,
    },
}
