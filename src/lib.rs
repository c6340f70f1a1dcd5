//! Home Energy Calculator library
//!
//! This module exposes the calculator, form handling and rendering
//! for use in tests and by the binaries.

pub mod calculator;
pub mod cli;
pub mod core;
pub mod form;
pub mod i18n;
pub mod pricing;
pub mod report;
pub mod tui;
