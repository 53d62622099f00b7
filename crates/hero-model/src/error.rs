use thiserror::Error;

/// A record key that is not one of the recognized hero fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized hero field: {0}")]
pub struct UnknownFieldError(pub String);
