use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input is not valid {0}")]
    Decoding(&'static str),
    #[error("input is empty")]
    EmptyInput,
    #[error("unsupported file extension (expected .qif or .qmtf): {0}")]
    UnsupportedExtension(String),
    #[error("malformed input: {0}")]
    Malformed(#[from] MalformedInput),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural defects in the QIF stream. All are fatal; the converter
/// never skips records or emits partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("transaction record before any account header")]
    TransactionBeforeAccount,
    #[error("record not closed by a `^` delimiter before end of input")]
    UnterminatedRecord,
}
