//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - print: write the (optionally filtered) records to stdout
//! - chart: write the characteristic counts to stdout

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolboard - browse a catalog of AI image tools in the terminal
#[derive(Parser, Debug)]
#[command(name = "toolboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory or http(s) URL holding the data file (overrides config)
    #[arg(short, long, global = true)]
    pub base: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the records once and print them
    Print {
        /// Case-insensitive search over tool name and characteristics
        #[arg(short, long)]
        query: Option<String>,

        /// Print as a table instead of cards
        #[arg(short, long)]
        table: bool,
    },

    /// Print the characteristic count per tool, tab separated
    Chart {
        /// Case-insensitive search over tool name and characteristics
        #[arg(short, long)]
        query: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args means dashboard mode
        let cli = Cli::try_parse_from(["toolboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.base.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["toolboard", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["toolboard", "-c", "/path/to/toolboard.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/toolboard.yml")));
    }

    #[test]
    fn test_cli_base_is_global() {
        let cli = Cli::try_parse_from(["toolboard", "print", "--base", "https://example.com/data"]).unwrap();
        assert_eq!(cli.base.as_deref(), Some("https://example.com/data"));
    }

    #[test]
    fn test_print_command() {
        let cli = Cli::try_parse_from(["toolboard", "print", "-q", "fastest", "--table"]).unwrap();
        match cli.command {
            Some(Commands::Print { query, table }) => {
                assert_eq!(query.as_deref(), Some("fastest"));
                assert!(table);
            }
            _ => panic!("Expected print command"),
        }
    }

    #[test]
    fn test_print_defaults_to_cards() {
        let cli = Cli::try_parse_from(["toolboard", "print"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Print { query: None, table: false })));
    }

    #[test]
    fn test_chart_command() {
        let cli = Cli::try_parse_from(["toolboard", "chart", "--query", "gem"]).unwrap();
        match cli.command {
            Some(Commands::Chart { query }) => assert_eq!(query.as_deref(), Some("gem")),
            _ => panic!("Expected chart command"),
        }
    }

    #[test]
    fn test_unknown_command_fails() {
        assert!(Cli::try_parse_from(["toolboard", "serve"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
