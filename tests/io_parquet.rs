use anyhow::Result;
use shardrow::IndexError;
use shardrow::io::parquet::{read_field, row_count};
use shardrow::testing::{write_text_list_rows, write_text_rows};

#[test]
fn row_count_reads_footer_only() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("rows.parquet");
    write_text_rows(&path, &["a", "b", "c", "d"])?;

    assert_eq!(row_count(&path)?, 4);
    Ok(())
}

#[test]
fn row_count_of_empty_file_is_zero() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("empty.parquet");
    write_text_rows(&path, &[])?;

    assert_eq!(row_count(&path)?, 0);
    Ok(())
}

#[test]
fn row_count_missing_file_fails() {
    let err = row_count("nonexistent.parquet").unwrap_err();
    assert!(matches!(err, IndexError::CorruptFile { .. }));
}

#[test]
fn row_count_garbage_file_fails() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("junk.parquet");
    std::fs::write(&path, b"these are not the bytes you are looking for")?;

    let err = row_count(&path).unwrap_err();
    assert!(matches!(err, IndexError::CorruptFile { .. }));
    Ok(())
}

#[test]
fn read_field_returns_the_requested_row() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("rows.parquet");
    write_text_rows(&path, &["first", "second", "third"])?;

    assert_eq!(read_field(&path, 0, "text")?, vec!["first"]);
    assert_eq!(read_field(&path, 1, "text")?, vec!["second"]);
    assert_eq!(read_field(&path, 2, "text")?, vec!["third"]);
    Ok(())
}

#[test]
fn read_field_missing_column_fails() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("rows.parquet");
    write_text_rows(&path, &["only"])?;

    let err = read_field(&path, 0, "no_such_column").unwrap_err();
    match err {
        IndexError::CorruptFile { detail, .. } => {
            assert!(detail.contains("no_such_column"));
        }
        other => panic!("expected CorruptFile, got {other}"),
    }
    Ok(())
}

#[test]
fn read_field_past_end_fails() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("rows.parquet");
    write_text_rows(&path, &["a", "b"])?;

    let err = read_field(&path, 2, "text").unwrap_err();
    assert!(matches!(err, IndexError::CorruptFile { .. }));
    Ok(())
}

#[test]
fn read_field_list_column_returns_all_items() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("lists.parquet");
    let rows: &[&[&str]] = &[&["x", "y"], &["z"]];
    write_text_list_rows(&path, rows)?;

    assert_eq!(read_field(&path, 0, "text")?, vec!["x", "y"]);
    assert_eq!(read_field(&path, 1, "text")?, vec!["z"]);
    Ok(())
}
