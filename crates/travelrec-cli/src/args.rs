use clap::{Parser, Subcommand};
use travelrec_core::Kind;

/// CLI arguments for travelrec
#[derive(Debug, Parser)]
#[command(
    name = "travelrec",
    version,
    about = "Search a travel destination dataset from the terminal"
)]
pub struct CliArgs {
    /// Dataset location: an http(s) URL or a .json / .json.gz path
    /// (default: $TRAVELREC_SOURCE, else the bundled sample)
    #[arg(short = 's', long = "source", global = true)]
    pub source: Option<String>,

    /// Make the `country` keyword also return the cities of each country
    #[arg(long = "include-cities", global = true)]
    pub include_cities: bool,

    /// Print records as JSON lines instead of cards
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many destinations of each kind the dataset holds
    Stats,

    /// Run one keyword query
    Search {
        /// Keyword: beach(es), temple(s), country/countries, or any text
        query: String,
    },

    /// List every destination of one kind
    List {
        /// country, city, temple or beach (plural accepted)
        #[arg(value_parser = parse_kind)]
        kind: Kind,
    },

    /// Run the query carried in a page link's `search` parameter
    Link {
        /// e.g. "travel.html?search=kyoto"
        location: String,
    },

    /// Read queries line by line; `:clear` resets, `:quit` exits
    Repl,
}

fn parse_kind(s: &str) -> Result<Kind, String> {
    Kind::from_label(s).ok_or_else(|| format!("unknown kind '{s}'"))
}
