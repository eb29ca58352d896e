use std::path::PathBuf;

use clap::Parser;

use css2cpp::Config;

/// Minify a stylesheet into a PROGMEM string constant
#[derive(Parser, Debug)]
#[command(name = "css2cpp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Stylesheet to convert
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Generated file (default: SOURCE with `.css` replaced by `_css.cpp`)
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::resolve(self.source.clone(), self.destination.clone())
    }
}
