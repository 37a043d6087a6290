use thiserror::Error;

pub type Result<T> = std::result::Result<T, NumericError>;

/// Coarse failure classes surfaced to callers and to the batch binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputFormat,
    DegenerateInput,
    FileAccess,
}

#[derive(Debug, Error)]
pub enum NumericError {
    #[error("invalid numeric token {token:?} at line {line}, column {column}")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("ragged row {row}: expected {expected} entries, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("dimension mismatch: {context} ({left} vs {right})")]
    DimensionMismatch {
        context: &'static str,
        left: usize,
        right: usize,
    },
    #[error("non-finite value {value} at index {idx}")]
    NonFinite { idx: usize, value: f64 },
    #[error("empty input")]
    EmptyInput,
    #[error("duplicate interpolation node {value} at indices {first} and {second}")]
    DuplicateNode {
        first: usize,
        second: usize,
        value: f64,
    },
    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },
    #[error("invalid precision setting: {0}")]
    InvalidPrecision(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NumericError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumericError::InvalidToken { .. }
            | NumericError::RaggedRow { .. }
            | NumericError::DimensionMismatch { .. }
            | NumericError::NonFinite { .. }
            | NumericError::InvalidPrecision(_)
            | NumericError::Parse(_) => ErrorKind::InputFormat,
            NumericError::EmptyInput
            | NumericError::DuplicateNode { .. }
            | NumericError::InsufficientPoints { .. } => ErrorKind::DegenerateInput,
            NumericError::FileAccess { .. } => ErrorKind::FileAccess,
        }
    }
}
