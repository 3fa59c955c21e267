//! The sharded-file row index: one flat position space over many files.
//!
//! [`RowIndex`] maps a global row position to a `(file, local row)` pair
//! using only per-file row counts, then materializes a single row's field
//! value on demand. Construction performs one footer probe per file; after
//! that, `len` and `get` run against an immutable in-memory mapping plus
//! one row-level read per `get` call.

use crate::error::{IndexError, Result};
use crate::io::parquet;
use crate::resolver;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One entry per logical row: which file owns it, and where inside that file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PositionEntry {
    file_key: usize,
    local_row: u64,
}

/// A flat, randomly-addressable row index over a fixed list of Parquet files.
///
/// The index is immutable once built: entry `i` resolves to the same row for
/// the lifetime of the instance, and `get`/`len` take `&self`, so a built
/// index can be shared across threads and read concurrently without locking.
/// Changes to the underlying files after construction are not guarded
/// against.
///
/// Every `get` re-reads the owning file's projected column slice from
/// storage; no decoded content is cached between calls. That favors minimal
/// peak memory over I/O cost, which suits scattered random access but will
/// repeat work when many rows are drawn from the same large file in a tight
/// loop.
///
/// # Example
///
/// ```no_run
/// use shardrow::RowIndex;
///
/// let index = RowIndex::open("datasets", &["wikipedia", "books"], "text")?;
/// for position in 0..index.len() {
///     let values = index.get(position)?;
///     println!("{}", values.join(" "));
/// }
/// # Ok::<(), shardrow::IndexError>(())
/// ```
#[derive(Debug)]
pub struct RowIndex {
    /// File key to path, keys assigned densely in discovery order.
    files: HashMap<usize, PathBuf>,
    /// Global position to (file key, local row), in construction order.
    entries: Vec<PositionEntry>,
    /// Name of the column materialized by `get`.
    field: String,
}

impl RowIndex {
    /// Build an index over an ordered list of data files.
    ///
    /// Files are keyed `0, 1, 2, ...` in input order and probed for their
    /// row count via footer metadata only. A list that yields zero total
    /// rows produces a valid empty index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::CorruptFile`] if any file's metadata cannot be
    /// read. The build fails atomically; no partially built index is ever
    /// returned.
    pub fn build<I, P>(file_paths: I, field: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut files = HashMap::new();
        let mut entries = Vec::new();

        for (file_key, path) in file_paths.into_iter().enumerate() {
            let path = path.into();
            let rows = parquet::row_count(&path)?;
            for local_row in 0..rows {
                entries.push(PositionEntry {
                    file_key,
                    local_row,
                });
            }
            files.insert(file_key, path);
        }

        Ok(Self {
            files,
            entries,
            field: field.into(),
        })
    }

    /// Resolve the selected datasets under `base` and build an index over
    /// the resulting files.
    ///
    /// Convenience for [`resolver::resolve_dataset_files`] followed by
    /// [`RowIndex::build`].
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DatasetNotFound`] if `base` or any named
    /// dataset directory is missing, or [`IndexError::CorruptFile`] if any
    /// discovered file's metadata cannot be read.
    pub fn open<S: AsRef<str>>(
        base: impl AsRef<Path>,
        dataset_names: &[S],
        field: impl Into<String>,
    ) -> Result<Self> {
        let paths = resolver::resolve_dataset_files(base, dataset_names)?;
        Self::build(paths, field)
    }

    /// Total number of rows across all indexed files. O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files backing the index.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Name of the column `get` materializes.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Fetch the field value(s) for one global row position.
    ///
    /// Resolves the position to its owning file and local row, then reads
    /// exactly that row's column value from storage. The result is always a
    /// sequence; see [`crate::io::parquet::read_field`] for the shape
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `position >= len()`, or
    /// [`IndexError::CorruptFile`] if the underlying read fails. A failed
    /// read poisons nothing; the index remains usable for other positions.
    pub fn get(&self, position: usize) -> Result<Vec<String>> {
        let entry = self
            .entries
            .get(position)
            .ok_or(IndexError::OutOfRange {
                position,
                len: self.entries.len(),
            })?;

        // Every entry's key is inserted into the mapping during build.
        let path = &self.files[&entry.file_key];
        parquet::read_field(path, entry.local_row, &self.field)
    }
}
