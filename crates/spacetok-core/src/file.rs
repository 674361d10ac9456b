//! File boundary: read a stylesheet, substitute, write it back.
//!
//! The write is not atomic. A failure part way through may leave the file
//! truncated.

use std::io;
use std::path::{Path, PathBuf};

use crate::table::Mapping;
use crate::{substitute_with_report, Substitution};

/// Error reading or writing the target stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Substitute `table` into the file at `path` and overwrite it with the result.
///
/// The file is written even when nothing changed.
pub fn rewrite_file(path: &Path, table: &[Mapping]) -> Result<Substitution, FileError> {
    let substitution = preview_file(path, table)?;
    std::fs::write(path, &substitution.content).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(substitution)
}

/// Substitute `table` into the file at `path` without writing anything.
pub fn preview_file(path: &Path, table: &[Mapping]) -> Result<Substitution, FileError> {
    let source = read_source(path)?;
    Ok(substitute_with_report(&source, table))
}

fn read_source(path: &Path) -> Result<String, FileError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FileError::NotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::InvalidData => FileError::Encoding {
            path: path.to_path_buf(),
        },
        _ => FileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
