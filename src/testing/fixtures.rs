//! Corpus fixtures: shard writers and a tempdir-backed dataset tree.

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, ListBuilder, StringBuilder};
use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::ArrowWriter;
use parquet::file::properties::WriterProperties;
use serde::{Deserialize, Serialize};
use serde_arrow::schema::{SchemaLike, TracingOptions};
use serde_arrow::to_record_batch;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use crate::resolver::DATA_DIR;

/// Row shape of the shard files the fixtures write: a single `text` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRow {
    pub text: String,
}

/// Write a typed `Vec<T>` to a Parquet file.
///
/// Infers an Arrow schema from `T`, converts the rows to a `RecordBatch`,
/// and writes one batch. Works even when `data` is empty (a zero-row batch
/// is written, so the file still carries a valid footer).
///
/// # Errors
/// An error is returned if schema inference, conversion, file creation, or
/// writing fails.
pub fn write_rows_parquet<T: Serialize + serde::Deserialize<'static>>(
    path: impl AsRef<Path>,
    data: &Vec<T>,
) -> Result<usize> {
    let path = path.as_ref();

    let fields: Vec<FieldRef> = Vec::<FieldRef>::from_type::<T>(TracingOptions::default())
        .context("infer Arrow schema from type T")?;
    let batch: RecordBatch =
        to_record_batch(&fields, data).context("convert rows to RecordBatch")?;

    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let props = WriterProperties::builder().build();
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), Some(props)).context("create ArrowWriter")?;
    writer.write(&batch).context("write batch to parquet")?;
    writer.close().context("close ArrowWriter")?;

    Ok(data.len())
}

/// Write a shard with a scalar `text: Utf8` column, one element per row.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_text_rows(path: impl AsRef<Path>, rows: &[&str]) -> Result<usize> {
    let data: Vec<TextRow> = rows
        .iter()
        .map(|t| TextRow {
            text: (*t).to_string(),
        })
        .collect();
    write_rows_parquet(&path, &data)
}

/// Write a shard with a `text: List<Utf8>` column, one list per row.
///
/// Exercises the multi-value read shape, where a single position yields
/// more than one string.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_text_list_rows(path: impl AsRef<Path>, rows: &[&[&str]]) -> Result<usize> {
    let path = path.as_ref();

    let schema = Arc::new(Schema::new(vec![Field::new(
        "text",
        DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
        false,
    )]));

    let mut list_builder = ListBuilder::new(StringBuilder::new());
    for row in rows {
        let values = list_builder.values();
        for item in *row {
            values.append_value(item);
        }
        list_builder.append(true);
    }
    let text_array: ArrayRef = Arc::new(list_builder.finish());

    let batch = RecordBatch::try_new(schema.clone(), vec![text_array])
        .context("build list-column RecordBatch")?;

    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let props = WriterProperties::builder().build();
    let mut writer =
        ArrowWriter::try_new(file, schema, Some(props)).context("create ArrowWriter")?;
    writer.write(&batch).context("write batch to parquet")?;
    writer.close().context("close ArrowWriter")?;

    Ok(rows.len())
}

/// A temporary `<base>/<dataset>/data/*.parquet` tree for tests.
///
/// The backing directory is removed when the fixture is dropped.
pub struct TempCorpus {
    root: TempDir,
}

impl TempCorpus {
    /// Create an empty corpus in a fresh temporary directory.
    ///
    /// # Errors
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            root: tempfile::tempdir().context("create corpus tempdir")?,
        })
    }

    /// Base path of the corpus, suitable for [`crate::RowIndex::open`].
    #[must_use]
    pub fn base(&self) -> &Path {
        self.root.path()
    }

    /// Create a dataset directory with an empty `data/` folder.
    ///
    /// # Errors
    /// Returns an error if the directories cannot be created.
    pub fn add_dataset(&self, dataset: &str) -> Result<PathBuf> {
        let dir = self.base().join(dataset).join(DATA_DIR);
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(dir)
    }

    /// Add a scalar-text shard to a dataset, creating the dataset if needed.
    ///
    /// # Errors
    /// Returns an error if the shard cannot be written.
    pub fn add_shard(&self, dataset: &str, file_name: &str, rows: &[&str]) -> Result<PathBuf> {
        let path = self.add_dataset(dataset)?.join(file_name);
        write_text_rows(&path, rows)?;
        Ok(path)
    }

    /// Add a list-of-strings shard to a dataset.
    ///
    /// # Errors
    /// Returns an error if the shard cannot be written.
    pub fn add_list_shard(
        &self,
        dataset: &str,
        file_name: &str,
        rows: &[&[&str]],
    ) -> Result<PathBuf> {
        let path = self.add_dataset(dataset)?.join(file_name);
        write_text_list_rows(&path, rows)?;
        Ok(path)
    }

    /// Drop arbitrary bytes into a dataset's `data/` folder.
    ///
    /// Useful for planting files with bogus contents or foreign extensions.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn add_raw_file(&self, dataset: &str, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.add_dataset(dataset)?.join(file_name);
        fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parquet::row_count;

    #[test]
    fn written_shard_reports_row_count() -> Result<()> {
        let corpus = TempCorpus::new()?;
        let path = corpus.add_shard("d", "part-000.parquet", &["a", "b", "c"])?;
        assert_eq!(row_count(&path)?, 3);
        Ok(())
    }

    #[test]
    fn empty_shard_has_valid_footer() -> Result<()> {
        let corpus = TempCorpus::new()?;
        let path = corpus.add_shard("d", "empty.parquet", &[])?;
        assert_eq!(row_count(&path)?, 0);
        Ok(())
    }

    #[test]
    fn corpus_layout_matches_convention() -> Result<()> {
        let corpus = TempCorpus::new()?;
        let path = corpus.add_shard("wikipedia", "part-000.parquet", &["x"])?;
        assert!(path.ends_with("wikipedia/data/part-000.parquet"));
        assert!(path.is_file());
        Ok(())
    }
}
