//! css2cpp - stylesheet to PROGMEM code generator
//!
//! css2cpp minifies a stylesheet and emits it as a `const PROGMEM char[]`
//! string constant, so microcontrollers can serve a web UI straight from
//! flash instead of copying it into RAM.

pub mod config;
pub mod error;
pub mod escaping;
pub mod fs;
pub mod generator;
pub mod identifier;
pub mod minifier;
pub mod pipeline;

// Re-exports for convenience
pub use config::{derive_destination, Config};
pub use error::{Css2CppError, Css2CppResult};
pub use escaping::escape_c_string;
pub use fs::{FileSystem, LocalFs};
pub use generator::GeneratedSource;
pub use identifier::derive_identifier;
pub use minifier::{LightningCss, Minified, Minifier};
pub use pipeline::{Pipeline, PipelineReport, Reporter, SilentReporter};
