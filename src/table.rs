//! Delimited table - an ordered set of raw text lines backed by one file.
//!
//! The table owns the raw lines of a delimited-text file, with the header
//! (when present) at index 0. Mutation happens entirely in memory;
//! [`DelimitedTable::save`] flushes the whole line sequence back to the
//! backing file in a single write.
//!
//! # Line format
//!
//! Synthesized lines (header and field-sequence rows) place the separator
//! after *every* field, including the last: `set_header(["x", "y"])` produces
//! the line `"x,y,"`. Files written by earlier versions of this format carry
//! that trailing separator, so it is preserved byte-for-byte rather than
//! normalized to an inter-field join. When a header line is parsed back,
//! trailing empty fields are dropped so the original column list round-trips.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TableError;
use crate::store::{DiskStore, FileStore};

/// Default field separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Result of an operation that can be deliberately skipped.
///
/// Header assignment and save both have a "conditional skip" path that is not
/// a failure: assigning a header while rows exist preserves the existing
/// data, and saving to a read-only file leaves the file untouched. `Outcome`
/// makes the skip observable instead of indistinguishable from success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation took effect.
    Applied,
    /// The operation was deliberately skipped; state is unchanged.
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why a skippable operation did not take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `set_header` was called while the table already holds rows.
    HeaderPresent,
    /// `save` was called while the backing file is not writable.
    ReadOnly,
}

/// A delimited-text table: raw rows, an optional header, and a single-char
/// separator, all tied to one backing file.
///
/// Generic over the [`FileStore`] collaborator; the convenience constructors
/// use [`DiskStore`]. Single-threaded and synchronous: every operation runs
/// to completion on the calling thread, and no file handle is held open
/// between calls.
#[derive(Debug)]
pub struct DelimitedTable<S: FileStore = DiskStore> {
    /// Backing file; fixed at construction.
    path: PathBuf,
    /// Field separator; fixed at construction.
    separator: char,
    /// Raw lines, header (if present) at index 0, insertion order preserved.
    rows: Vec<String>,
    /// Column names derived from `rows[0]`, or `None` until a header exists.
    header: Option<Vec<String>>,
    store: S,
}

impl DelimitedTable<DiskStore> {
    /// Open (or create) `path` with the default `,` separator.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TableError> {
        Self::open_with_separator(path, DEFAULT_SEPARATOR)
    }

    /// Open (or create) `path` with an explicit separator.
    pub fn open_with_separator(
        path: impl Into<PathBuf>,
        separator: char,
    ) -> Result<Self, TableError> {
        Self::with_store(DiskStore, path, separator)
    }
}

impl<S: FileStore> DelimitedTable<S> {
    /// Open (or create) `path` through an injected [`FileStore`].
    ///
    /// If the file exists, all of its lines are loaded and the first line is
    /// split into the header; an existing-but-empty file fails with
    /// [`TableError::NoHeader`]. If the file does not exist, it is created
    /// empty and the table starts with no rows and no header.
    pub fn with_store(
        store: S,
        path: impl Into<PathBuf>,
        separator: char,
    ) -> Result<Self, TableError> {
        let path = path.into();

        if store.exists(&path) {
            let rows = store.read_all_lines(&path)?;
            if rows.is_empty() {
                return Err(TableError::NoHeader);
            }
            let header = split_header(&rows[0], separator);
            debug!(path = %path.display(), rows = rows.len(), "loaded table");
            Ok(Self {
                path,
                separator,
                rows,
                header: Some(header),
                store,
            })
        } else {
            store.create_file(&path)?;
            debug!(path = %path.display(), "created empty table file");
            Ok(Self {
                path,
                separator,
                rows: Vec::new(),
                header: None,
                store,
            })
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Field separator.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// All raw lines, header line included.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Column names, or `None` if no header has been set or loaded.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Set the column header, if and only if the table holds no rows yet.
    ///
    /// A table that already has rows keeps its existing header and data; the
    /// call returns `Skipped(HeaderPresent)` instead of overwriting them.
    /// The synthesized header line carries a trailing separator (see the
    /// module docs) and becomes row 0.
    pub fn set_header<I, T>(&mut self, columns: I) -> Outcome
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        if !self.rows.is_empty() {
            warn!(path = %self.path.display(), "rows already present, set_header skipped");
            return Outcome::Skipped(SkipReason::HeaderPresent);
        }

        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.rows.push(join_trailing(&columns, self.separator));
        self.header = Some(columns);
        Outcome::Applied
    }

    /// Append a raw line verbatim.
    ///
    /// This is the trusted raw path: no separator or field-count validation
    /// is performed. Fails with [`TableError::NoHeader`] until a header has
    /// been set or loaded, leaving the table unchanged.
    pub fn push_line(&mut self, line: impl Into<String>) -> Result<(), TableError> {
        if self.header.is_none() {
            return Err(TableError::NoHeader);
        }
        self.rows.push(line.into());
        Ok(())
    }

    /// Append a row from individual field values.
    ///
    /// Fields are joined with the trailing-separator rule (see the module
    /// docs) and appended via [`push_line`](Self::push_line), inheriting its
    /// no-header failure.
    pub fn push_record<I, T>(&mut self, fields: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.push_line(join_trailing(&fields, self.separator))
    }

    /// Append several raw lines in order.
    ///
    /// Not atomic by contract: the first failing append surfaces and earlier
    /// appends stay in place. (With the current invariants the header cannot
    /// disappear mid-loop, so in practice either every line lands or none
    /// does - callers should not rely on that.)
    pub fn extend_lines<I, T>(&mut self, lines: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for line in lines {
            self.push_line(line)?;
        }
        Ok(())
    }

    /// Write the whole in-memory line sequence back to the backing file.
    ///
    /// Replaces the file's entire content, one row per line, UTF-8 encoded.
    /// If the file is not currently writable the save is skipped and
    /// `Ok(Skipped(ReadOnly))` is returned; the file is left untouched.
    /// A failed write propagates as [`TableError::Io`] with no partial-write
    /// recovery.
    pub fn save(&self) -> Result<Outcome, TableError> {
        if !self.store.is_writable(&self.path) {
            warn!(path = %self.path.display(), "file not writable, save skipped");
            return Ok(Outcome::Skipped(SkipReason::ReadOnly));
        }

        self.store.write_all_lines(&self.path, &self.rows)?;
        debug!(path = %self.path.display(), rows = self.rows.len(), "saved table");
        Ok(Outcome::Applied)
    }
}

/// Join fields with a separator after every field, including the last.
fn join_trailing(fields: &[String], separator: char) -> String {
    let mut line = String::new();
    for field in fields {
        line.push_str(field);
        line.push(separator);
    }
    line
}

/// Split a header line into column names, dropping trailing empty fields so
/// a line synthesized with the trailing separator parses back to the column
/// list it was built from.
fn split_header(line: &str, separator: char) -> Vec<String> {
    let mut columns: Vec<String> = line.split(separator).map(str::to_string).collect();
    while columns.last().is_some_and(|c| c.is_empty()) {
        columns.pop();
    }
    columns
}
