//! CLI module for toolboard - command-line interface and subcommands.
//!
//! With no subcommand the dashboard is launched; `print` and `chart` write
//! the same data to stdout.

pub mod commands;

pub use commands::Cli;
