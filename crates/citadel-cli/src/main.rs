//! Citadel CLI - character lookup from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Filtered search
//! citadel --name rick --status alive
//! citadel --species "Mythological Creature" --json
//!
//! # First page of every character
//! citadel --all
//!
//! # Markup for the results region
//! citadel --name morty --html
//! ```

mod config;
mod output;
mod search;

use anyhow::Result;
use citadel_core::{FilterField, FilterSet};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Look up Rick and Morty characters.
///
/// Filters are optional and combinable; at least one is required unless
/// `--all` is given. Failed requests are retried with exponential backoff.
#[derive(Parser)]
#[command(name = "citadel", version, about)]
struct Cli {
    /// Character name (partial match)
    #[arg(long)]
    name: Option<String>,

    /// alive, dead or unknown
    #[arg(long)]
    status: Option<String>,

    /// Species, e.g. Human
    #[arg(long)]
    species: Option<String>,

    /// Sub-species, e.g. Parasite
    #[arg(long = "type")]
    kind: Option<String>,

    /// female, male, genderless or unknown
    #[arg(long)]
    gender: Option<String>,

    /// Fetch every character (first page), ignoring filters
    #[arg(long, conflicts_with_all = ["name", "status", "species", "kind", "gender"])]
    all: bool,

    /// Output results as JSON
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Output results region as HTML
    #[arg(long)]
    html: bool,

    /// Character endpoint (default: public API)
    #[arg(long, env = config::API_URL_ENV)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn filters(&self) -> FilterSet {
        [
            (FilterField::Name, &self.name),
            (FilterField::Status, &self.status),
            (FilterField::Species, &self.species),
            (FilterField::Type, &self.kind),
            (FilterField::Gender, &self.gender),
        ]
        .into_iter()
        .fold(FilterSet::new(), |set, (field, value)| match value {
            Some(value) => set.with(field, value.as_str()),
            None => set,
        })
    }

    fn format(&self) -> output::Format {
        if self.json {
            output::Format::Json
        } else if self.html {
            output::Format::Html
        } else {
            output::Format::Human
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let api_url = config::resolve_api_url(cli.api_url.as_deref())?;
    let request = if cli.all {
        search::Request::All
    } else {
        search::Request::Filtered(cli.filters())
    };

    let report = search::execute(&api_url, request, cli.verbose).await?;
    println!("{}", output::format(cli.format(), &report));

    if !report.succeeded() {
        std::process::exit(1);
    }

    Ok(())
}
