use thiserror::Error;

/// A single external row that could not be loaded. The row is dropped and the
/// run continues.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Skipping malformed record on line [{line}]: expected at least 4 fields, found [{found}]")]
    TooFewFields {
        line: u64,
        found: usize
    },
    #[error("Skipping record on line [{line}]: not valid UTF-8")]
    InvalidEncoding {
        line: u64
    },
    #[error("Skipping record on line [{line}] with invalid amount [{value}]: {source}")]
    InvalidAmount {
        line: u64,
        value: String,
        source: rust_decimal::Error
    }
}

impl RecordError {
    pub fn line(&self) -> u64 {
        match self {
            Self::TooFewFields { line, .. }
            | Self::InvalidEncoding { line }
            | Self::InvalidAmount { line, .. } => *line
        }
    }
}
