//! fraudlens command-line tool
//!
//! Library half of the binary, exposed for testing.

pub mod app;
pub mod args;
pub mod config;
