//! Full reload of the breed tables.

use rusqlite::params;
use serde::Serialize;
use tracing::info;

use super::schema::{self, INSERT_COUNTRY, INSERT_DOG, INSERT_GROUP};
use super::{Database, NameDictionary};
use crate::error::Result;
use crate::models::BreedRecord;

/// Row counts written by a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub countries: usize,
    pub groups: usize,
    pub dogs: usize,
}

impl Database {
    // == Reload ==
    /// Replaces the whole database contents with `records`.
    ///
    /// Country and group ids are assigned in first-seen order, then all three
    /// tables are dropped, recreated and filled inside one transaction, so a
    /// failed load leaves the previous contents in place.
    pub fn reload(&self, records: &[BreedRecord]) -> Result<LoadSummary> {
        let countries = NameDictionary::from_names(records.iter().map(|r| r.country.as_str()));
        let groups = NameDictionary::from_names(records.iter().map(|r| r.breed_group.as_str()));

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        schema::recreate(&tx)?;

        {
            let mut insert = tx.prepare(INSERT_COUNTRY)?;
            for (id, name) in countries.iter() {
                insert.execute(params![id, name])?;
            }

            let mut insert = tx.prepare(INSERT_GROUP)?;
            for (id, name) in groups.iter() {
                insert.execute(params![id, name])?;
            }

            let mut insert = tx.prepare(INSERT_DOG)?;
            for record in records {
                insert.execute(params![
                    record.name,
                    parse_number(&record.rank),
                    record.pastime,
                    countries.id(&record.country),
                    groups.id(&record.breed_group),
                    record.size,
                    record.barkiness,
                    parse_number(&record.min_lifespan),
                    parse_number(&record.max_lifespan),
                ])?;
            }
        }

        tx.commit()?;

        let summary = LoadSummary {
            countries: countries.len(),
            groups: groups.len(),
            dogs: records.len(),
        };
        info!(
            "Loaded {} dogs, {} countries, {} groups into {}",
            summary.dogs,
            summary.countries,
            summary.groups,
            self.path().display()
        );
        Ok(summary)
    }
}

/// Integer value of scraped text; anything else (e.g. "n/a") becomes NULL.
fn parse_number(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::{record, temp_db};

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12));
        assert_eq!(parse_number(" 7 "), Some(7));
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_reload_assigns_ids_in_first_seen_order() {
        let (_dir, db) = temp_db();
        let records = vec![
            record("Briard", "1", "France", "Herding"),
            record("Akita", "2", "Japan", "Working"),
            record("Papillon", "3", "France", "Toy"),
        ];

        let summary = db.reload(&records).unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                countries: 2,
                groups: 3,
                dogs: 3
            }
        );

        let conn = db.connect().unwrap();
        let countries: Vec<(i64, String)> = conn
            .prepare("SELECT Id, Country FROM Countries ORDER BY Id")
            .unwrap()
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(
            countries,
            vec![(1, "France".to_string()), (2, "Japan".to_string())]
        );

        let papillon_country: i64 = conn
            .query_row(
                "SELECT CountryId FROM Dogs WHERE Name = 'Papillon'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(papillon_country, 1);
    }

    #[test]
    fn test_reload_non_numeric_rank_is_null() {
        let (_dir, db) = temp_db();
        db.reload(&[record("Mutt", "n/a", "Nowhere", "Mixed")]).unwrap();

        let conn = db.connect().unwrap();
        let rank: Option<i64> = conn
            .query_row("SELECT Rank FROM Dogs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rank, None);
    }

    #[test]
    fn test_reload_replaces_previous_contents() {
        let (_dir, db) = temp_db();
        db.reload(&[
            record("Briard", "1", "France", "Herding"),
            record("Akita", "2", "Japan", "Working"),
        ])
        .unwrap();
        db.reload(&[record("Beagle", "5", "England", "Hound")]).unwrap();

        let conn = db.connect().unwrap();
        let dogs: i64 = conn
            .query_row("SELECT COUNT(*) FROM Dogs", [], |row| row.get(0))
            .unwrap();
        let country_id: i64 = conn
            .query_row("SELECT Id FROM Countries WHERE Country = 'England'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(dogs, 1);
        assert_eq!(country_id, 1);
    }
}
