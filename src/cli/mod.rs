//! CLI module for serp-overview.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Reading content from a file or stdin
//!
//! # Usage
//!
//! The dispatcher in `main()` reads raw content, runs it through the
//! pipeline, and prints either the bare markup or a JSON outcome:
//!
//! ```ignore
//! use serp_overview::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => { /* print version, exit */ }
//!     CliCommand::Render(args) => { /* read input, render, print */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RenderArgs};
pub use version::{handle_version_command, VERSION};

use std::io::Read;

use crate::error::OverviewResult;

/// Read raw content from a file path, or from stdin when no path was
/// given.
pub fn read_input(path: Option<&str>) -> OverviewResult<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
