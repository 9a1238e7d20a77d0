//! Error types for table load, mutation, and save operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// File-system operation that failed, carried in [`TableError::Io`]
/// so callers can tell a failed create from a failed read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Create,
    Read,
    Write,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Errors surfaced by [`DelimitedTable`](crate::DelimitedTable) operations.
#[derive(Debug)]
pub enum TableError {
    /// The backing file exists but is empty (no header line to derive), or a
    /// row append was attempted before any header was set.
    NoHeader,
    /// An underlying storage operation failed.
    Io {
        /// Operation that was attempted.
        op: IoOp,
        /// File the operation targeted.
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHeader => write!(f, "no header line"),
            Self::Io { op, path, source } => {
                write!(f, "failed to {} {}: {}", op, path.display(), source)
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoHeader => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header_display() {
        assert_eq!(TableError::NoHeader.to_string(), "no header line");
    }

    #[test]
    fn test_io_display_includes_op_and_path() {
        let err = TableError::Io {
            op: IoOp::Read,
            path: PathBuf::from("/tmp/data.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("read"), "missing op in: {}", msg);
        assert!(msg.contains("/tmp/data.csv"), "missing path in: {}", msg);
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error;

        let err = TableError::Io {
            op: IoOp::Write,
            path: PathBuf::from("out.csv"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert!(err.source().is_some());
        assert!(TableError::NoHeader.source().is_none());
    }
}
