// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands map one-to-one onto the library's operations:
//   count, report, sections, links
// plus `all`, which runs the link crawl and the section report and saves
// both as JSON files.
// =============================================================================

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use citation_scout::config::DEFAULT_TIME_BUDGET_SECS;

#[derive(Parser, Debug)]
#[command(
    name = "citation-scout",
    version,
    about = "Find \"citation needed\" markers in Wikipedia articles",
    long_about = "citation-scout fetches a Wikipedia article and reports every passage tagged \
                  [citation needed]: as a numbered list, grouped by section, or across the \
                  articles it links to."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// User-Agent header to send (defaults to citation-scout/<version>)
    #[arg(long, global = true)]
    pub user_agent: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print how many citations an article needs
    ///
    /// Example: citation-scout count https://en.wikipedia.org/wiki/Rust
    Count {
        /// Article URL
        url: String,
    },

    /// List every passage that needs a citation, numbered
    Report {
        /// Article URL
        url: String,

        /// Write a titled text report here instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Group passages that need citations by section heading (JSON)
    Sections {
        /// Article URL
        url: String,

        /// Save the JSON here instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Scan the articles linked from an article (JSON)
    ///
    /// Example: citation-scout links https://en.wikipedia.org/wiki/Rust --time-budget 30
    Links {
        /// Article URL
        url: String,

        /// Save the JSON here instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Stop starting new requests after this many seconds
        #[arg(long, default_value_t = DEFAULT_TIME_BUDGET_SECS)]
        time_budget: u64,
    },

    /// Run the link crawl and the section report, saving both as JSON
    All {
        /// Article URL
        url: String,

        #[arg(long, default_value = "citations_in_links.json")]
        links_output: PathBuf,

        #[arg(long, default_value = "citations_needed_by_section.json")]
        sections_output: PathBuf,

        /// Stop starting new requests after this many seconds
        #[arg(long, default_value_t = DEFAULT_TIME_BUDGET_SECS)]
        time_budget: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_all_defaults() {
        let cli = Cli::parse_from(["citation-scout", "all", "https://en.wikipedia.org/wiki/X"]);
        match cli.command {
            Commands::All {
                links_output,
                sections_output,
                time_budget,
                ..
            } => {
                assert_eq!(links_output, PathBuf::from("citations_in_links.json"));
                assert_eq!(sections_output, PathBuf::from("citations_needed_by_section.json"));
                assert_eq!(time_budget, 10);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["citation-scout", "count", "https://x.org", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
