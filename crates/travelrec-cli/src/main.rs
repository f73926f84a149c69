//! travelrec — Command-line interface for travelrec-core
//!
//! This binary loads a travel destination dataset and answers keyword
//! queries the way the search box on the travel page does: category keywords
//! (`beach`, `temples`, `countries`, ...) list one kind of destination, any
//! other text is matched against names and descriptions.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ travelrec stats
//!
//! - Search (category keyword or free text)
//!   $ travelrec search beaches
//!   $ travelrec search "cherry blossoms"
//!
//! - List one kind
//!   $ travelrec list temples
//!
//! - Run the query from a page link
//!   $ travelrec link "travel.html?search=kyoto"
//!
//! - Interactive
//!   $ travelrec repl
//!
//! Data source
//! -----------
//!
//! `--source` (or `TRAVELREC_SOURCE`) points at an http(s) URL or a local
//! `.json` / `.json.gz` file. Without either, the sample dataset bundled with
//! `travelrec-core` is used.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use travelrec_cli::terminal::{OutputFormat, TerminalRenderer};
use travelrec_core::{
    CountryMatch, DatasetStore, InputEvent, QueryOutcome, Renderer, SearchSession, SessionConfig,
    SourceLocation, StatusMessage,
};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &CliArgs) -> anyhow::Result<SessionConfig> {
    let mut config = SessionConfig::from_env();

    // Determine input (flag > env > bundled sample)
    if let Some(source) = &args.source {
        config.location = SourceLocation::parse(source)?;
    } else if env::var_os("TRAVELREC_SOURCE").is_none() {
        config.location = SourceLocation::bundled();
    }

    if args.include_cities {
        config.country_match = CountryMatch::WithCities;
    }
    Ok(config)
}

fn finish(outcome: QueryOutcome) -> anyhow::Result<()> {
    match outcome {
        QueryOutcome::Shown(_) => Ok(()),
        QueryOutcome::Invalid => bail!("empty search query"),
        QueryOutcome::Deferred => bail!("travel data is still loading"),
        QueryOutcome::Failed(e) => Err(e.into()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;
    let location = config.location.clone();
    let format = if args.json {
        OutputFormat::JsonLines
    } else {
        OutputFormat::Cards
    };

    let store = DatasetStore::shared();
    let session = SearchSession::from_config(store, TerminalRenderer::stdout(format), config)?;

    // Everything except the REPL needs the data up front.
    if !matches!(args.command, Commands::Repl) {
        session
            .initialize()
            .await
            .with_context(|| format!("loading travel data from {location}"))?;
    }

    match args.command {
        Commands::Stats => {
            let catalog = store.current().context("travel data not loaded")?;
            let stats = catalog.stats();
            if args.json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("Travel data ({location}):");
                println!("  Countries: {}", stats.countries);
                println!("  Cities: {}", stats.cities);
                println!("  Temples: {}", stats.temples);
                println!("  Beaches: {}", stats.beaches);
                println!("  Records: {}", stats.total());
            }
        }

        Commands::Search { query } => finish(session.run_query(&query).await)?,

        Commands::List { kind } => {
            let catalog = store.current().context("travel data not loaded")?;
            let records = catalog.of_kind(kind);
            let renderer = session.renderer();
            renderer.show_results(&records);
            renderer.show_status(&StatusMessage::for_results(records.len()));
        }

        Commands::Link { location } => match session.bootstrap(&location).await {
            Some(outcome) => finish(outcome)?,
            None => eprintln!("No search parameter in: {location}"),
        },

        Commands::Repl => {
            session.clear();
            // A failed startup load is shown on the status line; queries
            // will try again.
            let _ = session.initialize().await;

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let event = match line.trim() {
                    ":quit" | ":q" => break,
                    ":clear" => InputEvent::Clear,
                    _ => InputEvent::Enter(line),
                };
                session.handle(event).await;
            }
        }
    }

    Ok(())
}
