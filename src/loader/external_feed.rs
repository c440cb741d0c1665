use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use crate::loader::open_feed;
use crate::models::{ExternalRecord, RecordError};
use crate::types::{parse_amount, LoadError};

const MINIMUM_FIELDS: usize = 4;

/// The records of one external feed, in the order they appear in the file.
#[derive(Debug, Default)]
pub struct ExternalFeed {
    pub records: Vec<ExternalRecord>,
    /// Rows dropped while loading. Each one has already been logged.
    pub skipped: Vec<RecordError>
}

/// Loads `externalId,amount,type,reference` rows from the feed at `path`.
///
/// The header line is discarded and trailing fields past the fourth are ignored.
/// Short rows, rows that are not valid UTF-8 and rows with an unparsable amount
/// are skipped with a warning.
///
/// # Errors
/// Returns `LoadError` if the file cannot be opened, the header cannot be read,
/// or reading the file fails partway through.
pub fn load_external_feed(path: &Path) -> Result<ExternalFeed, LoadError> {
    let mut reader = open_feed(path)?;

    reader.headers().map_err(|source| LoadError::Header {
        path: path.to_path_buf(),
        source
    })?;

    let mut feed = ExternalFeed::default();

    for result in reader.byte_records() {
        let byte_record = result.map_err(|source| {
            let line = source.position().map(|position| position.line()).unwrap_or_default();
            LoadError::Record { path: path.to_path_buf(), line, source }
        })?;

        let line = byte_record.position().map(|position| position.line()).unwrap_or_default();
        let parsed = StringRecord::from_byte_record(byte_record)
            .map_err(|_| RecordError::InvalidEncoding { line })
            .and_then(|record| parse_record(&record, line));

        match parsed {
            Ok(external_record) => feed.records.push(external_record),
            Err(error) => {
                warn!("{error}");
                feed.skipped.push(error);
            }
        }
    }

    Ok(feed)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<ExternalRecord, RecordError> {
    if record.len() < MINIMUM_FIELDS {
        return Err(RecordError::TooFewFields { line, found: record.len() })
    }

    let amount = parse_amount(&record[1]).map_err(|source| RecordError::InvalidAmount {
        line,
        value: record[1].to_string(),
        source
    })?;

    Ok(ExternalRecord {
        external_id: record[0].trim().to_string(),
        amount,
        record_type: record[2].trim().to_uppercase(),
        reference: record[3].trim().to_string()
    })
}
