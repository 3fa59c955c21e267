//! Parquet metadata probes and single-row field reads.
//!
//! This module provides the two storage operations the row index needs:
//! - [`row_count`]: how many rows a file holds, read from the footer only
//! - [`read_field`]: one named column's value at one row offset
//!
//! Both open the file fresh on every call. Nothing decoded here is cached
//! across calls; peak memory stays bounded by a single projected column
//! slice at the cost of repeated I/O on hot files.

use crate::error::{IndexError, Result};
use arrow::array::{Array, LargeListArray, LargeStringArray, ListArray, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::{ParquetRecordBatchReaderBuilder, RowSelection, RowSelector};
use parquet::file::reader::{FileReader, SerializedFileReader};
use std::fs::File;
use std::path::Path;

/// Read a Parquet file's row count from its footer metadata.
///
/// No row data is decoded; cost is one footer read regardless of file size,
/// which keeps index construction at O(files) rather than O(rows).
///
/// # Errors
///
/// Returns [`IndexError::CorruptFile`] if the file cannot be opened or the
/// footer is malformed.
pub fn row_count(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IndexError::corrupt(path, "open data file", e))?;
    let reader = SerializedFileReader::new(file)
        .map_err(|e| IndexError::corrupt(path, "read parquet footer", e))?;

    let rows = reader.metadata().file_metadata().num_rows();
    u64::try_from(rows).map_err(|_| {
        IndexError::corrupt_msg(path, format!("footer reports negative row count {rows}"))
    })
}

/// Read one row's value from a named column of a Parquet file.
///
/// Builds a reader projected down to the single requested column with a row
/// selection of skip(`row`) + select(1), so only that column's pages around
/// the target row are decoded.
///
/// The result is always a sequence, keeping the consumer's shape uniform:
/// a scalar string column yields one element, and a list-of-strings column
/// yields every item of the row's list rather than silently dropping any.
///
/// # Errors
///
/// Returns [`IndexError::CorruptFile`] if the file cannot be read, the
/// column is missing or of an unsupported type, the value is null, or `row`
/// lies past the end of the file. No retry is attempted.
pub fn read_field(path: impl AsRef<Path>, row: u64, field: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let row = usize::try_from(row).map_err(|_| {
        IndexError::corrupt_msg(path, format!("row offset {row} exceeds addressable range"))
    })?;

    let file = File::open(path).map_err(|e| IndexError::corrupt(path, "open data file", e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| IndexError::corrupt(path, "read parquet footer", e))?;

    let column = builder.schema().index_of(field).map_err(|_| {
        IndexError::corrupt_msg(path, format!("column '{field}' not present in schema"))
    })?;
    let projection = ProjectionMask::roots(builder.parquet_schema(), [column]);

    let mut selectors = Vec::with_capacity(2);
    if row > 0 {
        selectors.push(RowSelector::skip(row));
    }
    selectors.push(RowSelector::select(1));

    let mut reader = builder
        .with_projection(projection)
        .with_row_selection(RowSelection::from(selectors))
        .build()
        .map_err(|e| IndexError::corrupt(path, "build column reader", e))?;

    while let Some(batch) = reader
        .next()
        .transpose()
        .map_err(|e| IndexError::corrupt(path, "read column batch", e))?
    {
        if batch.num_rows() == 0 {
            continue;
        }
        return row_values(path, field, batch.column(0).as_ref());
    }

    Err(IndexError::corrupt_msg(
        path,
        format!("row {row} past end of file"),
    ))
}

/// Extract the field value(s) from the first row of a projected column.
fn row_values(path: &Path, field: &str, array: &dyn Array) -> Result<Vec<String>> {
    if array.is_null(0) {
        return Err(IndexError::corrupt_msg(
            path,
            format!("null value in column '{field}'"),
        ));
    }

    match array.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => string_values(path, field, array),
        DataType::List(_) => {
            let list = array
                .as_any()
                .downcast_ref::<ListArray>()
                .ok_or_else(|| type_mismatch(path, field, "list"))?;
            let items = list.value(0);
            string_values(path, field, items.as_ref())
        }
        DataType::LargeList(_) => {
            let list = array
                .as_any()
                .downcast_ref::<LargeListArray>()
                .ok_or_else(|| type_mismatch(path, field, "large list"))?;
            let items = list.value(0);
            string_values(path, field, items.as_ref())
        }
        other => Err(IndexError::corrupt_msg(
            path,
            format!("unsupported type {other} for column '{field}'"),
        )),
    }
}

/// Collect every element of a string array, rejecting nulls.
fn string_values(path: &Path, field: &str, array: &dyn Array) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(array.len());
    match array.data_type() {
        DataType::Utf8 => {
            let strings = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| type_mismatch(path, field, "string"))?;
            for i in 0..strings.len() {
                if strings.is_null(i) {
                    return Err(IndexError::corrupt_msg(
                        path,
                        format!("null value in column '{field}'"),
                    ));
                }
                out.push(strings.value(i).to_string());
            }
        }
        DataType::LargeUtf8 => {
            let strings = array
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .ok_or_else(|| type_mismatch(path, field, "large string"))?;
            for i in 0..strings.len() {
                if strings.is_null(i) {
                    return Err(IndexError::corrupt_msg(
                        path,
                        format!("null value in column '{field}'"),
                    ));
                }
                out.push(strings.value(i).to_string());
            }
        }
        other => {
            return Err(IndexError::corrupt_msg(
                path,
                format!("unsupported element type {other} for column '{field}'"),
            ));
        }
    }
    Ok(out)
}

fn type_mismatch(path: &Path, field: &str, expected: &str) -> IndexError {
    IndexError::corrupt_msg(
        path,
        format!("expected {expected} array for column '{field}'"),
    )
}
