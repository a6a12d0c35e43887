//! Error types for export operations.
//!
//! Export failures are a distinct signal from validation diagnostics: a
//! [`ExportError`] indicates an environment or programming defect, not a
//! model-quality issue, and always aborts the export with no partial
//! document left in place.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The error type for publisher operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination directory exists and overwrite was not requested.
    #[error("target directory `{0}` already exists; enable overwrite to replace it")]
    DestinationExists(PathBuf),

    /// The same identifier was derived twice during one export.
    ///
    /// Downstream tooling resolves elements by identifier; a collision
    /// would make an import silently resolve to the wrong element, so the
    /// export aborts instead.
    #[error("identifier `{0}` was assigned twice during export")]
    DuplicateId(String),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<tempfile::PersistError> for ExportError {
    fn from(error: tempfile::PersistError) -> Self {
        Self::Io(error.error)
    }
}
