//! Unified error types for art-init.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum ArtInitError {
    // --- Usage ---

    /// No target directory was given on the command line.
    #[error("no name given as the first argument")]
    NoName,

    // --- Target directory ---

    /// The target path is already taken by a file, directory or symlink.
    #[error("{0:?} already exists")]
    AlreadyExists(PathBuf),

    /// Writing a scaffolded file (or creating a directory) failed.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- External tool ---

    /// The external initializer (`zig`) could not be found on `PATH`.
    #[error("required tool '{name}' not found — install: {install}")]
    MissingTool { name: String, install: String },

    /// The external initializer failed to start or exited unsuccessfully.
    #[error("`{tool} init` failed: {message}")]
    ExternalTool { tool: String, message: String },

    /// The external initializer did not finish within the configured deadline.
    #[error("`{tool} init` did not finish within {timeout:?}")]
    Timeout {
        tool: String,
        timeout: std::time::Duration,
    },

    /// The manifest the initializer should have produced could not be opened.
    #[error("failed to read {path}")]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest was read but one of the required fields is absent.
    #[error("{path} has no `.{field}` field")]
    ManifestField { path: PathBuf, field: &'static str },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, ArtInitError>`.
pub type Result<T> = std::result::Result<T, ArtInitError>;
