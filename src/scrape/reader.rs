//! Opening log files, plain or gzip-compressed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use super::ScrapeError;

/// Check whether a path names a gzip-compressed log.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Open a log file for sequential reading.
///
/// Files ending in `.gz` are decompressed on the fly; anything else is read
/// as-is.
pub fn open_log(path: &Path) -> Result<Box<dyn BufRead>, ScrapeError> {
    let file = File::open(path).map_err(|source| ScrapeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzip_path(path) {
        tracing::debug!(path = %path.display(), "opening gzip-compressed log");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
