//! Run configuration
//!
//! All inputs of a run live in [`Config`], built once at the entry point and
//! handed to the pipeline. Nothing below reads process arguments directly.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Source file used when none is given
pub const DEFAULT_SOURCE: &str = "style.css";

/// Extension stripped from the source when deriving the destination
pub const SOURCE_EXTENSION: &str = ".css";

/// Marker appended to the stripped source name
pub const DESTINATION_SUFFIX: &str = "_css";

/// Extension of the generated file
pub const DESTINATION_EXTENSION: &str = ".cpp";

/// Resolved inputs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Stylesheet to read
    pub source: PathBuf,
    /// Generated source to write
    pub destination: PathBuf,
}

impl Config {
    /// Build a config from explicit paths.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Fill in defaults for whatever the caller left out.
    ///
    /// The source falls back to [`DEFAULT_SOURCE`]; the destination is
    /// derived from the source with [`derive_destination`].
    pub fn resolve(source: Option<PathBuf>, destination: Option<PathBuf>) -> Self {
        let source = source.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
        let destination = destination.unwrap_or_else(|| derive_destination(&source));
        Self {
            source,
            destination,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Strip a trailing `.css` from `path`, if it has one.
///
/// Matching is case-sensitive and works on the whole path string, so only the
/// last extension is affected (`foo.bar.css` -> `foo.bar`).
pub(crate) fn strip_source_extension(path: &Path) -> OsString {
    match path.to_str().and_then(|s| s.strip_suffix(SOURCE_EXTENSION)) {
        Some(stem) => OsString::from(stem),
        None => path.as_os_str().to_owned(),
    }
}

/// Derive the generated file path from the stylesheet path.
///
/// `foo.css` becomes `foo_css.cpp`. A source without the `.css` extension
/// keeps its full name and still gets the suffix: `foo` becomes `foo_css.cpp`.
pub fn derive_destination(source: &Path) -> PathBuf {
    let mut name = strip_source_extension(source);
    name.push(DESTINATION_SUFFIX);
    name.push(DESTINATION_EXTENSION);
    PathBuf::from(name)
}
