//! Error types for sluice-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the sluice-io crate.
///
/// Covers missing files, malformed delimited text, absent columns and the
/// underlying I/O failures encountered while reading or writing.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a line cannot be parsed.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a required column is absent from the header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when the delimited configuration is unusable.
    #[error("invalid delimited config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps an I/O error from reading or writing a file.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Wraps a CSV reader or writer error, such as an unterminated quote or
    /// invalid UTF-8.
    #[error("csv error in {}: {source}", path.display())]
    Csv {
        /// File being read or written.
        path: PathBuf,
        /// The underlying error.
        source: csv::Error,
    },

    /// Wraps an error from building a precipitation grid.
    #[error(transparent)]
    Idf(#[from] sluice_idf::IdfError),
}

impl IoError {
    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        IoError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
