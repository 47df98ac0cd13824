/// Errors returned by the entry decoder.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("entry must have exactly 3 rows, got {got}")]
    WrongRowCount { got: usize },
}

/// Errors returned when decoding a multi-entry batch.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("batch must contain a multiple of 4 lines, got {lines}")]
    MalformedBatch { lines: usize },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
