// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing) from -v / -q
// 3. Dispatch to the appropriate subcommand handler
// 4. Print or save the report
// 5. Exit with 0 on success, 1 if anything went wrong
//
// Logs go to stderr, results go to stdout, so JSON output can be piped.
// =============================================================================

mod cli;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use citation_scout::report::{render_text_report, save_json, save_text_report, to_json_pretty};
use citation_scout::{
    citations_needed_by_section, citations_needed_count, citations_needed_report, crawl_links,
    HttpFetcher, ScanConfig, SystemClock,
};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("citation_scout=info,warn"),
            1 => EnvFilter::new("citation_scout=debug,info"),
            2 => EnvFilter::new("citation_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ScanConfig::default();
    if let Some(user_agent) = cli.user_agent {
        config = config.with_user_agent(user_agent);
    }

    let fetcher = HttpFetcher::new(&config).context("Failed to create HTTP client")?;

    match cli.command {
        Commands::Count { url } => {
            let count = citations_needed_count(&fetcher, &url)
                .await
                .with_context(|| format!("Failed to scan {}", url))?;
            println!("{}", count);
        }
        Commands::Report { url, output } => {
            let snippets = citations_needed_report(&fetcher, &url)
                .await
                .with_context(|| format!("Failed to scan {}", url))?;
            match output {
                Some(path) => save_text_report(&url, &snippets, &path)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{}", render_text_report(&url, &snippets)),
            }
        }
        Commands::Sections { url, output } => {
            let sections = citations_needed_by_section(&fetcher, &url)
                .await
                .with_context(|| format!("Failed to scan {}", url))?;
            emit_json(&sections, output.as_deref())?;
        }
        Commands::Links {
            url,
            output,
            time_budget,
        } => {
            let config = config.with_time_budget(Duration::from_secs(time_budget));
            let links = crawl_links(&fetcher, &SystemClock::new(), &url, &config)
                .await
                .with_context(|| format!("Failed to crawl links of {}", url))?;
            emit_json(&links, output.as_deref())?;
        }
        Commands::All {
            url,
            links_output,
            sections_output,
            time_budget,
        } => {
            let config = config.with_time_budget(Duration::from_secs(time_budget));

            let links = crawl_links(&fetcher, &SystemClock::new(), &url, &config)
                .await
                .with_context(|| format!("Failed to crawl links of {}", url))?;
            println!("🔗 {} linked article(s) need citations", links.len());
            emit_json(&links, Some(links_output.as_path()))?;

            let sections = citations_needed_by_section(&fetcher, &url)
                .await
                .with_context(|| format!("Failed to scan {}", url))?;
            println!("📑 {} section(s) need citations", sections.len());
            emit_json(&sections, Some(sections_output.as_path()))?;
        }
    }

    Ok(())
}

// Saves JSON to `output` if given, otherwise prints it to stdout
fn emit_json<T: serde::Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            save_json(value, path).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("💾 Saved {}", path.display());
        }
        None => println!("{}", to_json_pretty(value)?),
    }
    Ok(())
}
