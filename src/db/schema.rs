//! Table definitions.
//!
//! Foreign keys are plain nullable integers; nothing enforces them.

use rusqlite::Connection;

use crate::error::Result;

const DROP_TABLES: &str = r#"
    DROP TABLE IF EXISTS "Countries";
    DROP TABLE IF EXISTS "Groups";
    DROP TABLE IF EXISTS "Dogs";
"#;

const CREATE_TABLES: &str = r#"
    CREATE TABLE IF NOT EXISTS "Countries" (
        "Id"      INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
        "Country" TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS "Groups" (
        "Id"         INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
        "BreedGroup" TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS "Dogs" (
        "Id"              INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
        "Name"            TEXT NOT NULL,
        "Rank"            INTEGER,
        "OriginalPastime" TEXT NOT NULL,
        "CountryId"       INTEGER,
        "BreedGroupId"    INTEGER,
        "Size"            TEXT,
        "Barkiness"       TEXT,
        "MinLifespan"     INTEGER,
        "MaxLifespan"     INTEGER
    );
"#;

pub(crate) const INSERT_COUNTRY: &str = r#"INSERT INTO "Countries" ("Id", "Country") VALUES (?1, ?2)"#;

pub(crate) const INSERT_GROUP: &str = r#"INSERT INTO "Groups" ("Id", "BreedGroup") VALUES (?1, ?2)"#;

pub(crate) const INSERT_DOG: &str = r#"
    INSERT INTO "Dogs" (
        "Name", "Rank", "OriginalPastime", "CountryId", "BreedGroupId",
        "Size", "Barkiness", "MinLifespan", "MaxLifespan"
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

/// Drops and recreates all three tables.
pub(crate) fn recreate(conn: &Connection) -> Result<()> {
    conn.execute_batch(DROP_TABLES)?;
    conn.execute_batch(CREATE_TABLES)?;
    Ok(())
}
