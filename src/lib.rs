//! rowfile - a minimal, line-oriented delimited-text (CSV) table accessor.
//!
//! A [`DelimitedTable`] opens or creates a backing file, treats the first
//! line as the column header, accumulates raw rows in memory, and saves the
//! whole table back in a single write. Rows are trusted raw lines: there is
//! deliberately no quoting, escaping, dialect handling, or field validation.
//!
//! Synthesized lines carry a separator after *every* field, including the
//! last (`"x,y,"` rather than `"x,y"`), for byte compatibility with files
//! produced by earlier versions of this format.
//!
//! ```no_run
//! use rowfile::DelimitedTable;
//!
//! let mut table = DelimitedTable::open("people.csv")?;
//! if table.header().is_none() {
//!     table.set_header(["name", "age"]);
//! }
//! table.push_record(["ada", "36"])?;
//! table.save()?;
//! # Ok::<(), rowfile::TableError>(())
//! ```

pub mod error;
pub mod store;
pub mod table;

// Re-export commonly used types
pub use error::{IoOp, TableError};
pub use store::{DiskStore, FileStore};
pub use table::{DelimitedTable, Outcome, SkipReason, DEFAULT_SEPARATOR};
