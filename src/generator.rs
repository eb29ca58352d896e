//! Generated source template
//!
//! Renders the C++ translation unit that holds the stylesheet:
//!
//! ```text
//! // This file was generated by css2cpp from style.css
//! #include <avr/pgmspace.h>
//!
//! const PROGMEM char pm_style[] = "body{color:red}";
//! ```

use std::fmt;
use std::path::Path;

use crate::identifier::symbol_name;

/// Name written into the provenance comment
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Header that declares `PROGMEM`
pub const PGMSPACE_INCLUDE: &str = "#include <avr/pgmspace.h>";

/// A generated source file, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource<'a> {
    source: &'a Path,
    identifier: &'a str,
    payload: &'a str,
}

impl<'a> GeneratedSource<'a> {
    /// `payload` must already be escaped for a double-quoted literal.
    pub fn new(source: &'a Path, identifier: &'a str, payload: &'a str) -> Self {
        Self {
            source,
            identifier,
            payload,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeneratedSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "// This file was generated by {} from {}",
            TOOL_NAME,
            self.source.display()
        )?;
        writeln!(f, "{PGMSPACE_INCLUDE}")?;
        writeln!(f)?;
        writeln!(
            f,
            "const PROGMEM char {}[] = \"{}\";",
            symbol_name(self.identifier),
            self.payload
        )
    }
}
