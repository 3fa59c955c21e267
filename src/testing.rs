//! Testing utilities for code built on the row index.
//!
//! This module helps downstream users (and this crate's own tests) stand up
//! realistic corpus trees without hand-writing Parquet plumbing:
//!
//! - **Shard writers**: produce single-column `text` Parquet files, with
//!   scalar or list-of-strings layouts
//! - **[`TempCorpus`]**: a tempdir-backed `<base>/<dataset>/data/` tree
//!   that cleans up after itself
//!
//! # Quick Start
//!
//! ```no_run
//! use shardrow::RowIndex;
//! use shardrow::testing::TempCorpus;
//!
//! # fn main() -> anyhow::Result<()> {
//! let corpus = TempCorpus::new()?;
//! corpus.add_shard("wikipedia", "part-000.parquet", &["alpha", "beta"])?;
//!
//! let index = RowIndex::open(corpus.base(), &["wikipedia"], "text")?;
//! assert_eq!(index.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod fixtures;

pub use fixtures::*;
