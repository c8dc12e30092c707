//! unidir CLI
//!
//! Command-line interface for the unidir university-directory proxy:
//! run the API server, or query the directory straight from the terminal.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use unidir_api::{ApiConfig, ApiServer};
use unidir_lookup::{DirectoryService, LookupConfig};

/// unidir - caching proxy for university directory lookups
#[derive(Parser)]
#[command(name = "unidir")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Search universities by country
    Search {
        /// Country to search
        country: String,
        /// Optional name substring filter
        #[arg(short, long)]
        name: Option<String>,
        /// Upstream directory endpoint
        #[arg(long, env = "UPSTREAM_URL")]
        upstream: Option<String>,
    },

    /// List the distinct countries known upstream
    Countries {
        /// Upstream directory endpoint
        #[arg(long, env = "UPSTREAM_URL")]
        upstream: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "unidir=debug,info"
    } else {
        "unidir=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
        Commands::Search { country, name, upstream } => {
            cmd_search(&country, name.as_deref(), upstream).await
        }
        Commands::Countries { upstream } => cmd_countries(upstream).await,
    }
}

/// Run the API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    let config = ApiConfig::from_env();
    let server = ApiServer::new(config).context("Failed to build API server")?;

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .context("Invalid bind address")?;

    println!("{} {}", "🌐 unidir listening on".cyan().bold(), addr);

    server.run(addr).await.context("Server error")
}

fn standalone_service(upstream: Option<String>) -> Result<DirectoryService> {
    let config = match upstream {
        Some(url) => LookupConfig::with_upstream(url),
        None => LookupConfig::default(),
    };
    DirectoryService::with_config(config).context("Failed to build directory service")
}

/// Query universities directly, bypassing the HTTP layer
async fn cmd_search(country: &str, name: Option<&str>, upstream: Option<String>) -> Result<()> {
    println!("{} {}", "🔍 Searching universities in:".cyan().bold(), country);

    let service = standalone_service(upstream)?;
    let lookup = service
        .search_universities(country, name)
        .await
        .context("Lookup failed")?;

    if lookup.data.is_empty() {
        println!("{}", "No universities found.".yellow());
        return Ok(());
    }

    println!(
        "\n{} {} {}",
        "✅ Found".green().bold(),
        lookup.data.len(),
        "universities:".green().bold()
    );
    for record in &lookup.data {
        let code = record.country_code.as_deref().unwrap_or("--");
        println!("   {} [{}]", record.name.bold(), code.dimmed());
        for page in &record.web_pages {
            println!("      {}", page.dimmed());
        }
    }

    Ok(())
}

/// Print the distinct country list
async fn cmd_countries(upstream: Option<String>) -> Result<()> {
    println!("{}", "🌍 Fetching country list...".cyan().bold());

    let service = standalone_service(upstream)?;
    let lookup = service.list_countries().await.context("Lookup failed")?;

    println!(
        "\n{} {} {}",
        "✅".green(),
        lookup.data.len(),
        "countries:".green().bold()
    );
    for country in &lookup.data {
        println!("   {}", country);
    }

    Ok(())
}
