//! Symbol fragment derivation
//!
//! The generated constant is named `pm_<identifier>`, where the identifier
//! comes from the stylesheet's file name.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::strip_source_extension;

/// ASCII non-word run. Word characters are `[A-Za-z0-9_]`.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("static pattern is valid"));

/// Derive the identifier fragment from the source path.
///
/// Takes the base file name without its trailing `.css`, collapses the
/// *first* run of non-word characters into `_` and lower-cases the result.
/// Later runs are left as they are: `my-style.file.css` gives
/// `my_style.file`. Existing generated symbol names depend on this, so it
/// must not become a global replace.
///
/// The `pm_` prefix in front of the fragment keeps a leading digit legal.
pub fn derive_identifier(source: &Path) -> String {
    let base = source
        .file_name()
        .map(|name| strip_source_extension(Path::new(name)))
        .unwrap_or_default();
    let base = base.to_string_lossy();
    NON_WORD.replace(&base, "_").to_lowercase()
}

/// Name of the generated constant for `identifier`.
pub fn symbol_name(identifier: &str) -> String {
    format!("pm_{identifier}")
}
