//! Typed errors for dataset resolution and row lookup.
//!
//! Library code surfaces one of three conditions: a missing base or dataset
//! directory, an unreadable or malformed data file, or an out-of-bounds
//! position. Nothing is downgraded to a default value, and no storage
//! operation is retried here; resilience belongs to the caller.

use std::fmt;
use std::path::PathBuf;

/// Convenience alias for Results produced by this crate.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Error type for the sharded row index.
#[derive(Debug)]
pub enum IndexError {
    /// The base directory or a selected dataset directory does not exist.
    DatasetNotFound { path: PathBuf },

    /// A data file could not be read, or its contents were not what the
    /// index expected (bad footer, missing column, unsupported type).
    CorruptFile {
        path: PathBuf,
        detail: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A lookup position outside `0..len()`. Always a caller bug.
    OutOfRange { position: usize, len: usize },
}

impl IndexError {
    /// Create a missing-directory error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        IndexError::DatasetNotFound { path: path.into() }
    }

    /// Create a corrupt-file error wrapping an underlying cause.
    pub fn corrupt(
        path: impl Into<PathBuf>,
        detail: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        IndexError::CorruptFile {
            path: path.into(),
            detail: detail.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a corrupt-file error with no underlying cause.
    pub fn corrupt_msg(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        IndexError::CorruptFile {
            path: path.into(),
            detail: detail.into(),
            source: None,
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::DatasetNotFound { path } => {
                write!(f, "dataset path not found: '{}'", path.display())
            }
            IndexError::CorruptFile {
                path,
                detail,
                source,
            } => {
                if let Some(src) = source {
                    write!(
                        f,
                        "unreadable data file '{}': {}: {}",
                        path.display(),
                        detail,
                        src
                    )
                } else {
                    write!(f, "unreadable data file '{}': {}", path.display(), detail)
                }
            }
            IndexError::OutOfRange { position, len } => {
                write!(
                    f,
                    "position {} out of range for index of length {}",
                    position, len
                )
            }
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::CorruptFile {
                source: Some(s), ..
            } => Some(s.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = IndexError::not_found("/data/missing");
        let msg = err.to_string();
        assert!(msg.contains("/data/missing"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn corrupt_display_includes_detail_and_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err = IndexError::corrupt("/data/a/data/shard.parquet", "read parquet footer", io_err);
        let msg = err.to_string();
        assert!(msg.contains("shard.parquet"));
        assert!(msg.contains("read parquet footer"));
        assert!(msg.contains("truncated"));
    }

    #[test]
    fn out_of_range_display() {
        let err = IndexError::OutOfRange {
            position: 5,
            len: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IndexError::corrupt("/p", "open", io_err);
        assert!(std::error::Error::source(&err).is_some());

        let err = IndexError::corrupt_msg("/p", "negative row count");
        assert!(std::error::Error::source(&err).is_none());
    }
}
