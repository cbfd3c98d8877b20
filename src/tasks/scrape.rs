//! Scrape Task
//!
//! Sequential, single-pass scrape of the breed directory and every breed page.

use reqwest::Url;
use tracing::{info, warn};

use crate::cache::CacheStats;
use crate::db::{Database, LoadSummary};
use crate::error::{DogError, Result};
use crate::extract::{combine, extract_facts, extract_index, extract_vitals, ValueCellPick};
use crate::fetch::{Fetcher, Transport};
use crate::models::{BreedRecord, FactRecord, VitalStat};

/// A breed that could not be scraped, and why.
#[derive(Debug)]
pub struct BreedFailure {
    pub breed: String,
    pub url: String,
    pub error: DogError,
}

/// Outcome of one scrape run.
#[derive(Debug)]
pub struct ScrapeReport {
    /// Fully scraped breeds, in directory order
    pub records: Vec<BreedRecord>,
    /// Breeds skipped because a fetch or parse failed
    pub failures: Vec<BreedFailure>,
    pub cache: CacheStats,
}

/// Scrapes the directory at `directory_url` and every breed it links to.
///
/// Failing to fetch or parse the directory aborts the run. A failure on a
/// single breed page is recorded in the report and that breed is skipped
/// entirely, so the vital stats and fact records stay aligned.
pub async fn run_scrape<T: Transport>(
    fetcher: &mut Fetcher<T>,
    directory_url: &str,
    pick: ValueCellPick,
) -> Result<ScrapeReport> {
    info!("Fetching breed directory {}", directory_url);
    let directory = fetcher.fetch(directory_url).await?;
    let links = extract_index(&directory).map_err(|e| e.in_page(directory_url))?;
    info!("Found {} breeds", links.len());

    let base = Url::parse(directory_url).ok();
    let mut vitals: Vec<VitalStat> = Vec::with_capacity(links.len());
    let mut facts: Vec<FactRecord> = Vec::with_capacity(links.len());
    let mut failures = Vec::new();

    for link in links {
        let url = resolve(base.as_ref(), &link.url);

        match scrape_breed(fetcher, &url, pick).await {
            Ok((value, fact)) => {
                vitals.push(VitalStat {
                    name: link.name,
                    value,
                });
                facts.push(fact);
            }
            Err(e) => {
                let error = e.in_page(&link.name);
                warn!("Skipping {}: {}", link.name, error);
                failures.push(BreedFailure {
                    breed: link.name,
                    url,
                    error,
                });
            }
        }
    }

    let records = combine(vitals, facts)?;
    let cache = fetcher.cache().stats();
    info!(
        "Scraped {} breeds, {} failed; cache: {}",
        records.len(),
        failures.len(),
        cache
    );

    Ok(ScrapeReport {
        records,
        failures,
        cache,
    })
}

/// Runs a scrape and replaces the database contents with its records.
pub async fn scrape_and_load<T: Transport>(
    fetcher: &mut Fetcher<T>,
    directory_url: &str,
    pick: ValueCellPick,
    db: &Database,
) -> Result<(ScrapeReport, LoadSummary)> {
    let report = run_scrape(fetcher, directory_url, pick).await?;

    let db = db.clone();
    let records = report.records.clone();
    let summary = tokio::task::spawn_blocking(move || db.reload(&records))
        .await
        .map_err(|e| DogError::Internal(format!("load task failed: {}", e)))??;

    Ok((report, summary))
}

async fn scrape_breed<T: Transport>(
    fetcher: &mut Fetcher<T>,
    url: &str,
    pick: ValueCellPick,
) -> Result<(String, FactRecord)> {
    let page = fetcher.fetch(url).await?;
    let value = extract_vitals(&page, pick)?;
    let facts = extract_facts(&page)?;
    Ok((value, facts))
}

/// Resolves a directory link against the directory URL; hrefs that cannot be
/// resolved are used as written.
fn resolve(base: Option<&Url>, href: &str) -> String {
    base.and_then(|b| b.join(href).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| href.to_string())
}
