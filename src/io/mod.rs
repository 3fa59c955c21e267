//! File-format collaborators consumed by the row index.
//!
//! The index itself never parses Parquet; it asks this module for a
//! metadata-only row count at build time and for a single row's field value
//! at lookup time.

pub mod parquet;
