//! Integration Tests for the Scrape Pipeline
//!
//! Drives a full scrape against canned pages and checks what lands in the
//! cache file and the database.

use dog_info::cache::CacheStore;
use dog_info::db::{Database, DogFilter, DogSort};
use dog_info::extract::ValueCellPick;
use dog_info::fetch::{Fetcher, StaticTransport};
use dog_info::{run_scrape, scrape_and_load, DogError};

const DIRECTORY: &str = "http://dogs.test/breeds/all.html";

// == Helper Functions ==

fn directory_page(breeds: &[(&str, &str)]) -> String {
    let items: String = breeds
        .iter()
        .map(|(name, href)| format!(r#"<li><a href="{}">{}</a></li>"#, href, name))
        .collect();
    format!(
        r#"<html><body><section id="tabAtoZ"><ul>{}</ul></section></body></html>"#,
        items
    )
}

fn breed_page(rank: &str, origin: &str, group: &str, lifespan: &str) -> String {
    format!(
        r#"<html><body>
<div class="stats clear"><span class="left">Popularity</span><span class="right"> {} </span><span class="right">3</span></div>
<div class="body divider"><p>FAST FACTS:
Original Pastime: Herding
Origin: {}
Group: {}
Lifespan: {}
Size: Medium
Barkiness: Low</p></div>
</body></html>"#,
        rank, origin, group, lifespan
    )
}

fn transport() -> StaticTransport {
    StaticTransport::new()
        .with_page(
            DIRECTORY,
            directory_page(&[
                ("Briard", "briard.html"),
                ("Puli", "/breeds/puli.html"),
                ("Akita", "akita.html"),
            ]),
        )
        .with_page(
            "http://dogs.test/breeds/briard.html",
            breed_page("2", "France", "Herding", "10-12 years"),
        )
        .with_page(
            "http://dogs.test/breeds/puli.html",
            breed_page("1", "Herding", "Herding", "12-16 years"),
        )
        .with_page(
            "http://dogs.test/breeds/akita.html",
            breed_page("4", "Japan", "Working Dog", "10-13 years"),
        )
}

// == Scrape Tests ==

#[tokio::test]
async fn test_scrape_normalizes_every_breed() {
    let mut fetcher = Fetcher::new(transport(), CacheStore::in_memory());

    let report = run_scrape(&mut fetcher, DIRECTORY, ValueCellPick::First)
        .await
        .unwrap();

    assert!(report.failures.is_empty());
    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Briard", "Puli", "Akita"]);

    let puli = &report.records[1];
    assert_eq!(puli.rank, "1");
    assert_eq!(puli.country, "Hungary");
    assert_eq!(puli.min_lifespan, "12");
    assert_eq!(puli.max_lifespan, "16");

    let akita = &report.records[2];
    assert_eq!(akita.breed_group, "Working");
    assert_eq!(report.cache.misses, 4);
}

#[tokio::test]
async fn test_scrape_last_value_cell() {
    let mut fetcher = Fetcher::new(transport(), CacheStore::in_memory());

    let report = run_scrape(&mut fetcher, DIRECTORY, ValueCellPick::Last)
        .await
        .unwrap();

    assert!(report.records.iter().all(|r| r.rank == "3"));
}

#[tokio::test]
async fn test_broken_breed_page_is_reported_and_skipped() {
    let transport = transport().with_page(
        "http://dogs.test/breeds/akita.html",
        "<html><body><p>Moved</p></body></html>",
    );
    let mut fetcher = Fetcher::new(transport, CacheStore::in_memory());

    let report = run_scrape(&mut fetcher, DIRECTORY, ValueCellPick::First)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].breed, "Akita");
    assert_eq!(report.failures[0].url, "http://dogs.test/breeds/akita.html");
    assert!(matches!(report.failures[0].error, DogError::Parse { .. }));
}

#[tokio::test]
async fn test_missing_breed_page_is_reported() {
    let transport = StaticTransport::new().with_page(
        DIRECTORY,
        directory_page(&[("Ghost", "ghost.html")]),
    );
    let mut fetcher = Fetcher::new(transport, CacheStore::in_memory());

    let report = run_scrape(&mut fetcher, DIRECTORY, ValueCellPick::First)
        .await
        .unwrap();

    assert!(report.records.is_empty());
    assert!(matches!(report.failures[0].error, DogError::Fetch { .. }));
}

#[tokio::test]
async fn test_unreachable_directory_aborts() {
    let mut fetcher = Fetcher::new(StaticTransport::new(), CacheStore::in_memory());

    let result = run_scrape(&mut fetcher, DIRECTORY, ValueCellPick::First).await;
    assert!(matches!(result, Err(DogError::Fetch { .. })));
}

// == Cache Tests ==

#[tokio::test]
async fn test_second_run_is_served_from_cache_file() {
    let dir = tempfile::tempdir().unwrap();
    let cache_file = dir.path().join("cache.json");

    let mut first = Fetcher::new(transport(), CacheStore::load(&cache_file));
    let first_report = run_scrape(&mut first, DIRECTORY, ValueCellPick::First)
        .await
        .unwrap();
    assert!(cache_file.exists());

    let mut second = Fetcher::new(StaticTransport::new(), CacheStore::load(&cache_file));
    let second_report = run_scrape(&mut second, DIRECTORY, ValueCellPick::First)
        .await
        .unwrap();

    assert!(second.transport().requests().is_empty());
    assert_eq!(second_report.cache.hits, 4);
    assert_eq!(second_report.records, first_report.records);
}

// == Load Tests ==

#[tokio::test]
async fn test_scrape_and_load_fills_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("dogs.sqlite"));
    let mut fetcher = Fetcher::new(transport(), CacheStore::in_memory());

    let (report, summary) = scrape_and_load(&mut fetcher, DIRECTORY, ValueCellPick::First, &db)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 3);
    assert_eq!(summary.dogs, 3);
    assert_eq!(summary.countries, 3);
    assert_eq!(summary.groups, 2);

    let filter = DogFilter {
        sort: DogSort::MaxLife,
        ..DogFilter::default()
    };
    let rows = db.list_dogs(&filter).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Briard", "Akita", "Puli"]);
}

#[tokio::test]
async fn test_reload_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("dogs.sqlite"));

    let mut fetcher = Fetcher::new(transport(), CacheStore::in_memory());
    scrape_and_load(&mut fetcher, DIRECTORY, ValueCellPick::First, &db)
        .await
        .unwrap();

    let smaller = StaticTransport::new()
        .with_page(DIRECTORY, directory_page(&[("Briard", "briard.html")]))
        .with_page(
            "http://dogs.test/breeds/briard.html",
            breed_page("2", "France", "Herding", "10-12 years"),
        );
    let mut fetcher = Fetcher::new(smaller, CacheStore::in_memory());
    let (_, summary) = scrape_and_load(&mut fetcher, DIRECTORY, ValueCellPick::First, &db)
        .await
        .unwrap();

    assert_eq!(summary.dogs, 1);
    assert_eq!(db.list_dogs(&DogFilter::default()).unwrap().len(), 1);
}
