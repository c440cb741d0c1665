mod external_feed;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{Reader, ReaderBuilder, Trim};

use crate::types::LoadError;

pub use external_feed::{load_external_feed, ExternalFeed};

/// Opens a comma-delimited feed with a header row. Rows may carry any number
/// of fields; callers decide what a short row means.
pub fn open_feed(path: &Path) -> Result<Reader<BufReader<File>>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source
    })?;

    Ok(ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file)))
}
