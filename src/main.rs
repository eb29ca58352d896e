//! css2cpp CLI - stylesheet to PROGMEM code generator
//!
//! Usage: css2cpp [SOURCE] [DESTINATION]

mod cli;
mod logging;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use css2cpp::{Config, Css2CppError, Pipeline, Reporter};

use crate::cli::Cli;

/// Prints progress to stdout and write failures to stderr
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn started(&mut self, config: &Config) {
        println!("Input file: {}", config.source.display());
        println!("Output file: {}", config.destination.display());
    }

    fn finished(&mut self, _destination: &Path) {
        println!("Done.");
    }

    fn write_failed(&mut self, error: &Css2CppError) {
        eprintln!("error: {error}");
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    Pipeline::local().run(&config, &mut ConsoleReporter)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
