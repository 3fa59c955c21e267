//! Dataset discovery: map named dataset directories to concrete data files.
//!
//! A corpus lives under one base directory, with one subdirectory per
//! dataset and that dataset's Parquet shards inside a `data/` folder:
//!
//! ```text
//! <base>/
//! ├── wikipedia/
//! │   └── data/
//! │       ├── part-000.parquet
//! │       └── part-001.parquet
//! └── books/
//!     └── data/
//!         └── part-000.parquet
//! ```
//!
//! The resolver is a pure filesystem read. It retains no state; the caller
//! feeds the returned file list to [`RowIndex::build`](crate::RowIndex::build).
//! How the dataset names were chosen (interactively, from config, or
//! hardcoded) is outside this crate's concern.

use crate::error::{IndexError, Result};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of each dataset that holds its data files.
pub const DATA_DIR: &str = "data";

/// File extension marking a columnar data file.
pub const DATA_EXTENSION: &str = "parquet";

/// List the dataset names available under a base directory.
///
/// Every immediate subdirectory of `base` counts as a dataset; loose files
/// at the top level are ignored. Names are returned sorted so callers can
/// present a stable selection list.
///
/// # Errors
///
/// Returns [`IndexError::DatasetNotFound`] if `base` is not a directory, or
/// [`IndexError::CorruptFile`] if the listing itself fails mid-read.
pub fn available_datasets(base: impl AsRef<Path>) -> Result<Vec<String>> {
    let base = base.as_ref();
    if !base.is_dir() {
        return Err(IndexError::not_found(base));
    }

    let entries =
        fs::read_dir(base).map_err(|e| IndexError::corrupt(base, "list base directory", e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IndexError::corrupt(base, "list base directory", e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| IndexError::corrupt(entry.path(), "stat directory entry", e))?;
        if file_type.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}

/// Resolve an ordered selection of dataset names into one flat, ordered
/// list of data file paths.
///
/// For each name, in the order given, this lists
/// `<base>/<name>/data/*.parquet` and appends the matches. Dataset order is
/// preserved; files within one dataset are sorted lexicographically so the
/// resulting sequence is reproducible across runs and platforms rather than
/// dependent on incidental OS listing order.
///
/// A dataset whose `data/` folder is empty or absent contributes zero
/// files; that is not an error. Files with other extensions are skipped.
///
/// # Errors
///
/// Returns [`IndexError::DatasetNotFound`] if `base` or any
/// `<base>/<name>` does not exist.
pub fn resolve_dataset_files<S: AsRef<str>>(
    base: impl AsRef<Path>,
    dataset_names: &[S],
) -> Result<Vec<PathBuf>> {
    let base = base.as_ref();
    if !base.is_dir() {
        return Err(IndexError::not_found(base));
    }

    let mut files = Vec::new();
    for name in dataset_names {
        let dataset_dir = base.join(name.as_ref());
        if !dataset_dir.is_dir() {
            return Err(IndexError::not_found(dataset_dir));
        }

        let pattern = dataset_dir
            .join(DATA_DIR)
            .join(format!("*.{DATA_EXTENSION}"));
        let pattern = pattern.to_string_lossy();

        let entries = glob(&pattern).map_err(|e| {
            IndexError::corrupt(&dataset_dir, format!("invalid listing pattern '{pattern}'"), e)
        })?;

        let mut matched = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| IndexError::corrupt(&dataset_dir, "list data files", e.into_error()))?;
            // Only include actual files, not directories
            if path.is_file() {
                matched.push(path);
            }
        }

        // Sort for deterministic order
        matched.sort();
        files.extend(matched);
    }

    Ok(files)
}
