//! Common test utilities for css2cpp CLI tests.
//!
//! - `TestEnv`: isolated working directory plus a runner for the binary
//! - Fixtures: reusable stylesheet content

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;
