//! Command-line interface
//!
//! Argument definitions and the non-interactive commands.

pub mod args;
pub mod commands;

pub use args::*;
