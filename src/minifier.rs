//! Stylesheet minification
//!
//! The pipeline only depends on the [`Minifier`] capability; [`LightningCss`]
//! is the implementation the binary uses.

use std::path::Path;

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use crate::error::{Css2CppError, Css2CppResult};

/// Output of a minifier.
///
/// `Absent` stands for "no usable text came back". It is not an error:
/// escaping turns it into an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Minified {
    Text(String),
    Absent,
}

impl Minified {
    /// The text, with `Absent` coerced to `""`.
    pub fn as_str(&self) -> &str {
        match self {
            Minified::Text(text) => text,
            Minified::Absent => "",
        }
    }
}

impl From<String> for Minified {
    fn from(text: String) -> Self {
        Minified::Text(text)
    }
}

impl From<Option<String>> for Minified {
    fn from(text: Option<String>) -> Self {
        text.map_or(Minified::Absent, Minified::Text)
    }
}

/// Turns stylesheet source into shorter, equivalent stylesheet source.
///
/// `path` is only used for diagnostics.
pub trait Minifier {
    fn minify(&self, path: &Path, source: &[u8]) -> Css2CppResult<Minified>;
}

/// Minifier backed by lightningcss.
///
/// Input bytes are decoded as UTF-8, replacing invalid sequences with
/// U+FFFD. The stylesheet is parsed, structurally minified and printed in
/// minified form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightningCss;

impl LightningCss {
    pub fn new() -> Self {
        Self
    }
}

impl Minifier for LightningCss {
    fn minify(&self, path: &Path, source: &[u8]) -> Css2CppResult<Minified> {
        let css = String::from_utf8_lossy(source);
        let minify_error = |message: String| Css2CppError::Minify {
            path: path.to_path_buf(),
            message,
        };

        let options = ParserOptions {
            filename: path.display().to_string(),
            ..ParserOptions::default()
        };
        let mut stylesheet =
            StyleSheet::parse(&css, options).map_err(|e| minify_error(e.to_string()))?;

        stylesheet
            .minify(MinifyOptions::default())
            .map_err(|e| minify_error(e.to_string()))?;

        let printer_options = PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        };
        let result = stylesheet
            .to_css(printer_options)
            .map_err(|e| minify_error(e.to_string()))?;

        tracing::debug!(
            input_bytes = source.len(),
            output_bytes = result.code.len(),
            "minified stylesheet"
        );
        Ok(Minified::Text(result.code))
    }
}
