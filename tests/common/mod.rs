//! Common test infrastructure for pixterm integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

pub use fixtures::*;

use clap::Parser;
use pixterm::cli::Cli;

/// Parse command-line arguments as if passed after `pixterm`.
pub fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pixterm").chain(args.iter().copied()))
        .expect("valid arguments")
}
