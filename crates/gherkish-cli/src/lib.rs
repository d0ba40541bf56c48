//! Command line driver for the `gherkish` formatter and inspector.
//!
//! The binary reads a feature file from a path or standard input and
//! writes to a path or standard output. Settings come from `GHERKISH_*`
//! environment variables, overridden by command-line flags.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
