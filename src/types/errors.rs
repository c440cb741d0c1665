use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a reconciliation run before any report is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error opening feed at path [{}]: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("Error reading header of feed at path [{}]: {source}", .path.display())]
    Header {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Error reading line [{line}] of feed at path [{}]: {source}", .path.display())]
    Record {
        path: PathBuf,
        line: u64,
        source: csv::Error
    }
}
