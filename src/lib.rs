//! # Shardrow
//!
//! A **flat, randomly-addressable row index** over collections of Parquet
//! files split across named dataset directories. Shardrow lets a consumer
//! treat many separate files, each holding a variable number of rows, as one
//! logical sequence of records addressed by a global integer position, and
//! fetch any single record's text field without materializing the corpus in
//! memory.
//!
//! ## Key Features
//!
//! - **Dataset resolution** - turn an ordered selection of dataset names
//!   into an ordered, deterministic list of data files
//! - **Cheap construction** - one footer-metadata probe per file, O(files),
//!   never a full scan
//! - **Random access** - `get(position)` reads exactly one row's projected
//!   column value from its owning file
//! - **Immutable after build** - concurrent `get` calls from many threads
//!   need no locking
//! - **Typed failures** - missing directories, corrupt files, and
//!   out-of-bounds positions surface as distinct error variants
//!
//! ## Quick Start
//!
//! ```no_run
//! use shardrow::{RowIndex, resolver};
//!
//! # fn main() -> Result<(), shardrow::IndexError> {
//! // See what is available under the corpus root.
//! let names = resolver::available_datasets("datasets")?;
//! println!("datasets: {names:?}");
//!
//! // Index a selection and pull individual rows.
//! let index = RowIndex::open("datasets", &["wikipedia", "books"], "text")?;
//! println!("total rows: {}", index.len());
//! let record = index.get(0)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Layout Contract
//!
//! Data is expected at `<base>/<dataset>/data/*.parquet`, one directory per
//! dataset. Shardrow never writes to this tree; populating it belongs to
//! the data-preparation process. See [`resolver`] for the discovery rules
//! and [`index::RowIndex`] for the position mapping and read policy.
//!
//! ## Scope
//!
//! Batching, shuffling, and parallel fetch loops are the consumer's job;
//! the entire surface offered to them is `len()` and `get(position)`. There
//! is likewise no cross-call row cache, no write path, and no schema
//! validation beyond the single named field.

pub mod error;
pub mod index;
pub mod io;
pub mod resolver;
pub mod testing;

// Common public API at the crate root.
pub use error::{IndexError, Result};
pub use index::RowIndex;
