//! Dog Info - Breed data scraper and query server
//!
//! Scrapes the breed directory into SQLite and answers breed queries from the
//! command line or over HTTP.

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dog_info::api::create_router;
use dog_info::cache::CacheStore;
use dog_info::fetch::{Fetcher, HttpTransport};
use dog_info::models::{BarChart, DogsQuery, DogsResponse, GroupingsQuery, GroupingsResponse};
use dog_info::{scrape_and_load, AppState, Config, Database};

#[derive(Parser, Debug)]
#[command(name = "dog_info")]
#[command(about = "Scrape dog breed facts and query them", long_about = None)]
struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Page cache file (overrides CACHE_FILE)
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the breed directory and reload the database
    Scrape,
    /// Scrape, then serve the query API
    Serve {
        /// Serve the existing database without scraping first
        #[arg(long)]
        skip_scrape: bool,

        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List breeds
    Dogs {
        /// rank, min_life or max_life
        #[arg(long)]
        sort: Option<String>,
        /// asc or desc
        #[arg(long)]
        dir: Option<String>,
        /// Country of origin
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        breed_group: Option<String>,
        #[arg(long)]
        barkiness: Option<String>,
        #[arg(long)]
        limit: Option<String>,
        /// Include bar chart data
        #[arg(long)]
        plot: bool,
    },
    /// Aggregate breeds by breed_group, origin, size or barkiness
    Groups {
        group: String,
        /// number, rank, min_life or max_life
        #[arg(long)]
        sort: Option<String>,
        /// asc or desc
        #[arg(long)]
        dir: Option<String>,
        /// Include bar chart data
        #[arg(long)]
        plot: bool,
    },
    /// Show the values each listing filter accepts
    Filters,
}

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables, then apply CLI overrides
/// 3. Run the requested subcommand
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dog_info=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(database) = cli.database {
        config.database_path = database;
    }
    if let Some(cache) = cli.cache {
        config.cache_file = cache;
    }
    info!(
        "Configuration loaded: directory={}, cache={}, database={}, pick={:?}",
        config.directory_url,
        config.cache_file.display(),
        config.database_path.display(),
        config.value_cell_pick
    );

    match cli.command {
        Command::Scrape => scrape(&config).await,
        Command::Serve { skip_scrape, port } => {
            if let Some(port) = port {
                config.server_port = port;
            }
            if !skip_scrape {
                scrape(&config).await?;
            }
            serve(&config).await
        }
        Command::Dogs {
            sort,
            dir,
            region,
            size,
            breed_group,
            barkiness,
            limit,
            plot,
        } => {
            let query = DogsQuery {
                sort,
                dir,
                region,
                size,
                breed_group,
                barkiness,
                limit,
                plot: None,
            };
            let filter = query.to_filter()?;
            let rows = Database::new(&config.database_path).list_dogs(&filter)?;
            let chart = plot.then(|| BarChart::for_dogs(&rows, filter.sort));
            let response = DogsResponse::new(rows, chart);

            let rows = response.results.iter().map(|row| {
                vec![
                    row.name.clone(),
                    cell(row.rank),
                    row.country.clone(),
                    row.breed_group.clone(),
                    cell(row.size.as_ref()),
                    cell(row.barkiness.as_ref()),
                    cell(row.min_lifespan),
                    cell(row.max_lifespan),
                ]
            });
            print_table(&response.headers, rows);
            print_chart(response.chart.as_ref());
            Ok(())
        }
        Command::Groups {
            group,
            sort,
            dir,
            plot,
        } => {
            let query = GroupingsQuery {
                group: Some(group),
                sort,
                dir,
                plot: None,
            };
            let grouping = query.to_grouping()?;
            let rows = Database::new(&config.database_path).group_dogs(&grouping)?;
            let chart = plot.then(|| BarChart::for_groups(&rows, grouping.sort));
            let response = GroupingsResponse::new(grouping.group_by, rows, chart);

            let rows = response.results.iter().map(|row| {
                vec![
                    cell(row.key.as_ref()),
                    row.number.to_string(),
                    cell(row.avg_rank),
                    cell(row.avg_min_lifespan),
                    cell(row.avg_max_lifespan),
                ]
            });
            print_table(&response.headers, rows);
            print_chart(response.chart.as_ref());
            Ok(())
        }
        Command::Filters => {
            let options = Database::new(&config.database_path).filter_options()?;
            println!("Barkiness:    {}", options.barkiness.join(", "));
            println!("Sizes:        {}", options.sizes.join(", "));
            println!("Breed groups: {}", options.breed_groups.join(", "));
            println!("Countries:    {}", options.countries.join(", "));
            Ok(())
        }
    }
}

/// Scrapes the configured directory and reloads the database.
async fn scrape(config: &Config) -> anyhow::Result<()> {
    let transport = HttpTransport::new(Duration::from_secs(config.request_timeout))?;
    let mut fetcher = Fetcher::new(transport, CacheStore::load(&config.cache_file));
    let db = Database::new(&config.database_path);

    let (report, summary) = scrape_and_load(
        &mut fetcher,
        &config.directory_url,
        config.value_cell_pick,
        &db,
    )
    .await
    .context("scrape failed")?;

    for failure in &report.failures {
        warn!("Not loaded: {} ({}): {}", failure.breed, failure.url, failure.error);
    }
    info!(
        "Loaded {} dogs, {} countries, {} groups into {}",
        summary.dogs,
        summary.countries,
        summary.groups,
        db.path().display()
    );

    let cache = fetcher.into_cache();
    info!("Page cache {}: {}", config.cache_file.display(), cache.stats());
    Ok(())
}

/// Serves the query API until Ctrl+C or SIGTERM.
async fn serve(config: &Config) -> anyhow::Result<()> {
    let app = create_router(AppState::from_config(config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

/// Prints rows as left-aligned columns under their headers.
fn print_table(headers: &[String], rows: impl Iterator<Item = Vec<String>>) {
    let rows: Vec<Vec<String>> = rows.collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(headers));
    for row in &rows {
        println!("{}", line(row));
    }
}

/// Prints chart series as horizontal bars scaled to the largest value.
fn print_chart(chart: Option<&BarChart>) {
    let Some(chart) = chart else { return };
    let max = chart.y.iter().flatten().cloned().fold(0.0_f64, f64::max);
    let label_width = chart.x.iter().map(|x| x.chars().count()).max().unwrap_or(0);

    println!();
    for (label, value) in chart.x.iter().zip(&chart.y) {
        let bar = match value {
            Some(v) if max > 0.0 => "#".repeat(((v / max) * 40.0).round() as usize),
            _ => String::new(),
        };
        println!("{:<width$}  {} {}", label, bar, cell(*value), width = label_width);
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
