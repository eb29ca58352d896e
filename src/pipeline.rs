//! Stylesheet to PROGMEM pipeline
//!
//! ## Flow
//!
//! 1. Announce source and destination
//! 2. Derive the identifier from the source file name
//! 3. Read the source (fatal on failure)
//! 4. Minify (fatal on failure)
//! 5. Escape and render the generated source
//! 6. Write the destination (reported, never fatal)

use std::path::Path;

use crate::config::Config;
use crate::error::{Css2CppError, Css2CppResult};
use crate::escaping::{escape_c_string, escaped_quote_count};
use crate::fs::{FileSystem, LocalFs};
use crate::generator::GeneratedSource;
use crate::identifier::derive_identifier;
use crate::minifier::{LightningCss, Minifier};

/// Receives progress notifications. Nothing flows back into the pipeline.
pub trait Reporter {
    /// Called before any file is touched
    fn started(&mut self, config: &Config);

    /// Called after the destination was written
    fn finished(&mut self, destination: &Path);

    /// Called when the destination could not be written
    fn write_failed(&mut self, error: &Css2CppError);
}

/// Reporter that ignores everything
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn started(&mut self, _config: &Config) {}
    fn finished(&mut self, _destination: &Path) {}
    fn write_failed(&mut self, _error: &Css2CppError) {}
}

/// Outcome of a run that got past reading and minifying.
#[derive(Debug)]
pub struct PipelineReport {
    /// Fragment used in the `pm_` symbol
    pub identifier: String,
    /// Size of the source file
    pub source_bytes: usize,
    /// Size of the minified stylesheet
    pub minified_bytes: usize,
    /// The rendered generated source
    pub output: String,
    /// Result of writing the destination
    pub write: Css2CppResult<()>,
}

/// Runs the read, minify, escape, render and write stages for one stylesheet.
#[derive(Debug, Clone)]
pub struct Pipeline<F, M> {
    fs: F,
    minifier: M,
}

impl Pipeline<LocalFs, LightningCss> {
    /// Pipeline over the local disk with the lightningcss minifier.
    pub fn local() -> Self {
        Self::new(LocalFs::new(), LightningCss::new())
    }
}

impl<F: FileSystem, M: Minifier> Pipeline<F, M> {
    pub fn new(fs: F, minifier: M) -> Self {
        Self { fs, minifier }
    }

    /// Process `config.source` into `config.destination`.
    ///
    /// Read and minify failures are returned as `Err` before anything is
    /// written. A write failure is handed to the reporter and recorded in
    /// [`PipelineReport::write`]; the run itself still succeeds.
    pub fn run(
        &self,
        config: &Config,
        reporter: &mut dyn Reporter,
    ) -> Css2CppResult<PipelineReport> {
        reporter.started(config);

        let _span = tracing::info_span!(
            "css2cpp",
            source = %config.source.display(),
            destination = %config.destination.display()
        )
        .entered();

        let identifier = derive_identifier(&config.source);
        tracing::debug!(%identifier, "derived identifier");

        let source = self
            .fs
            .read_bytes(&config.source)
            .map_err(|source| Css2CppError::Read {
                path: config.source.clone(),
                source,
            })?;
        tracing::info!(bytes = source.len(), "read stylesheet");

        let minified = self.minifier.minify(&config.source, &source)?;
        let escaped = escape_c_string(&minified);
        tracing::debug!(
            minified_bytes = minified.as_str().len(),
            escaped_quotes = escaped_quote_count(minified.as_str()),
            "escaped stylesheet"
        );

        let output = GeneratedSource::new(&config.source, &identifier, &escaped).render();

        let write = self
            .fs
            .write(&config.destination, &output)
            .map_err(|source| Css2CppError::Write {
                path: config.destination.clone(),
                source,
            });
        match &write {
            Ok(()) => {
                tracing::info!(bytes = output.len(), "wrote generated source");
                reporter.finished(&config.destination);
            }
            Err(err) => {
                tracing::debug!(error = %err, "write failed");
                reporter.write_failed(err);
            }
        }

        Ok(PipelineReport {
            identifier,
            source_bytes: source.len(),
            minified_bytes: minified.as_str().len(),
            output,
            write,
        })
    }
}
