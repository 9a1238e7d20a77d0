//! File Store collaborator - the narrow file-system surface the table consumes.
//!
//! [`DelimitedTable`](crate::DelimitedTable) never touches `std::fs` directly;
//! it goes through the [`FileStore`] trait so tests (and embedders with
//! unusual storage) can inject their own implementation. [`DiskStore`] is the
//! standard-filesystem implementation used by the convenience constructors.

use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::error::{IoOp, TableError};

/// Full-file line storage: existence check, creation, whole-file line read,
/// whole-file line write, and a writability probe.
///
/// No handle is held open across calls; every read or write is a complete
/// pass over the file.
pub trait FileStore {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create an empty file at `path`. Fails if it already exists.
    fn create_file(&self, path: &Path) -> Result<(), TableError>;

    /// Read the whole file as a sequence of lines, terminators stripped.
    /// An empty file yields an empty sequence.
    fn read_all_lines(&self, path: &Path) -> Result<Vec<String>, TableError>;

    /// Overwrite the whole file with `lines`, a newline after each line.
    fn write_all_lines(&self, path: &Path, lines: &[String]) -> Result<(), TableError>;

    /// Whether the file at `path` can currently be written.
    fn is_writable(&self, path: &Path) -> bool;
}

/// [`FileStore`] backed by `std::fs`. Reads and writes UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_file(&self, path: &Path) -> Result<(), TableError> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| TableError::Io {
                op: IoOp::Create,
                path: path.to_path_buf(),
                source: e,
            })
    }

    fn read_all_lines(&self, path: &Path) -> Result<Vec<String>, TableError> {
        let content = fs::read_to_string(path).map_err(|e| TableError::Io {
            op: IoOp::Read,
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn write_all_lines(&self, path: &Path, lines: &[String]) -> Result<(), TableError> {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(path, content).map_err(|e| TableError::Io {
            op: IoOp::Write,
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn is_writable(&self, path: &Path) -> bool {
        fs::metadata(path)
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }
}
