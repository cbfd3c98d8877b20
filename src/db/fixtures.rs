//! Shared fixtures for database tests.

use crate::db::Database;
use crate::models::BreedRecord;

pub(crate) fn record(name: &str, rank: &str, country: &str, group: &str) -> BreedRecord {
    BreedRecord {
        name: name.to_string(),
        rank: rank.to_string(),
        pastime: "herding".to_string(),
        country: country.to_string(),
        breed_group: group.to_string(),
        size: "Medium".to_string(),
        barkiness: "Low".to_string(),
        min_lifespan: "10".to_string(),
        max_lifespan: "12".to_string(),
    }
}

pub(crate) fn temp_db() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("dogs.sqlite"));
    (dir, db)
}
