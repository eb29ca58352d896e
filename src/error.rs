//! Error types for css2cpp
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for css2cpp operations
pub type Css2CppResult<T> = Result<T, Css2CppError>;

/// Main error type for css2cpp operations
#[derive(Error, Debug)]
pub enum Css2CppError {
    /// Source stylesheet is missing or unreadable
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The minifier rejected the stylesheet
    #[error("cannot minify {}: {message}", .path.display())]
    Minify { path: PathBuf, message: String },

    /// Generated source could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
