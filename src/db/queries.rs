//! Query surface over the breed tables.
//!
//! Filter values are always bound as parameters. Sort columns, sort order and
//! grouping keys come from closed enums, each mapping to a fixed SQL fragment,
//! so no caller-supplied text is ever spliced into a statement.

use std::str::FromStr;

use rusqlite::{params, Row};
use serde::Serialize;

use super::Database;
use crate::error::{DogError, Result};

/// Row limit for breed listings when none is given.
pub const DEFAULT_DOG_LIMIT: u32 = 10;

/// Grouped queries always return at most this many groups.
pub const GROUP_LIMIT: u32 = 10;

// == Sort Order ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DogError::InvalidQuery(format!("unknown sort order '{}'", other))),
        }
    }
}

// == Dog Sort ==
/// Sortable columns of a breed listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DogSort {
    #[default]
    Rank,
    MinLife,
    MaxLife,
}

impl DogSort {
    fn column(self) -> &'static str {
        match self {
            DogSort::Rank => "D.Rank",
            DogSort::MinLife => "D.MinLifespan",
            DogSort::MaxLife => "D.MaxLifespan",
        }
    }
}

impl FromStr for DogSort {
    type Err = DogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rank" => Ok(DogSort::Rank),
            "min_life" => Ok(DogSort::MinLife),
            "max_life" => Ok(DogSort::MaxLife),
            other => Err(DogError::InvalidQuery(format!("unknown sort field '{}'", other))),
        }
    }
}

// == Group By ==
/// Grouping keys for aggregate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    BreedGroup,
    Origin,
    Size,
    Barkiness,
}

impl GroupBy {
    fn key_column(self) -> &'static str {
        match self {
            GroupBy::BreedGroup => "G.BreedGroup",
            GroupBy::Origin => "C.Country",
            GroupBy::Size => "D.Size",
            GroupBy::Barkiness => "D.Barkiness",
        }
    }

    fn join(self) -> &'static str {
        match self {
            GroupBy::BreedGroup => "JOIN Groups AS G ON D.BreedGroupId = G.Id",
            GroupBy::Origin => "JOIN Countries AS C ON D.CountryId = C.Id",
            GroupBy::Size | GroupBy::Barkiness => "",
        }
    }

    /// Column header for the grouping key.
    pub fn label(self) -> &'static str {
        match self {
            GroupBy::BreedGroup => "Breed group",
            GroupBy::Origin => "Origin",
            GroupBy::Size => "Size",
            GroupBy::Barkiness => "Barkiness",
        }
    }
}

impl FromStr for GroupBy {
    type Err = DogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breed group" | "breed_group" => Ok(GroupBy::BreedGroup),
            "origin" => Ok(GroupBy::Origin),
            "size" => Ok(GroupBy::Size),
            "barkiness" => Ok(GroupBy::Barkiness),
            other => Err(DogError::InvalidQuery(format!("unknown grouping '{}'", other))),
        }
    }
}

// == Group Sort ==
/// Sortable aggregates of a grouped query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupSort {
    #[default]
    Number,
    Rank,
    MinLife,
    MaxLife,
}

impl GroupSort {
    fn alias(self) -> &'static str {
        match self {
            GroupSort::Number => "Number",
            GroupSort::Rank => "AvgRank",
            GroupSort::MinLife => "AvgMinLifespan",
            GroupSort::MaxLife => "AvgMaxLifespan",
        }
    }

    fn aggregate(self) -> &'static str {
        match self {
            GroupSort::Number => "COUNT(DISTINCT D.Name)",
            GroupSort::Rank => "AVG(D.Rank)",
            GroupSort::MinLife => "AVG(D.MinLifespan)",
            GroupSort::MaxLife => "AVG(D.MaxLifespan)",
        }
    }
}

impl FromStr for GroupSort {
    type Err = DogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" => Ok(GroupSort::Number),
            "rank" => Ok(GroupSort::Rank),
            "min_life" => Ok(GroupSort::MinLife),
            "max_life" => Ok(GroupSort::MaxLife),
            other => Err(DogError::InvalidQuery(format!("unknown sort field '{}'", other))),
        }
    }
}

// == Query Parameters ==
/// Filters and ordering for a breed listing. `None` filters match everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogFilter {
    pub country: Option<String>,
    pub size: Option<String>,
    pub breed_group: Option<String>,
    pub barkiness: Option<String>,
    pub sort: DogSort,
    pub order: SortOrder,
    pub limit: u32,
}

impl Default for DogFilter {
    fn default() -> Self {
        Self {
            country: None,
            size: None,
            breed_group: None,
            barkiness: None,
            sort: DogSort::default(),
            order: SortOrder::default(),
            limit: DEFAULT_DOG_LIMIT,
        }
    }
}

/// Grouping and ordering for an aggregate query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    pub group_by: GroupBy,
    pub sort: GroupSort,
    pub order: SortOrder,
}

// == Result Rows ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DogRow {
    pub name: String,
    pub rank: Option<i64>,
    pub country: String,
    pub breed_group: String,
    pub size: Option<String>,
    pub barkiness: Option<String>,
    pub min_lifespan: Option<i64>,
    pub max_lifespan: Option<i64>,
}

impl DogRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            rank: row.get(1)?,
            country: row.get(2)?,
            breed_group: row.get(3)?,
            size: row.get(4)?,
            barkiness: row.get(5)?,
            min_lifespan: row.get(6)?,
            max_lifespan: row.get(7)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub key: Option<String>,
    /// Distinct breed names in the group
    pub number: i64,
    pub avg_rank: Option<f64>,
    pub avg_min_lifespan: Option<f64>,
    pub avg_max_lifespan: Option<f64>,
}

impl GroupRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            key: row.get(0)?,
            number: row.get(1)?,
            avg_rank: row.get(2)?,
            avg_min_lifespan: row.get(3)?,
            avg_max_lifespan: row.get(4)?,
        })
    }
}

/// Distinct values available to each listing filter, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub barkiness: Vec<String>,
    pub sizes: Vec<String>,
    pub breed_groups: Vec<String>,
    pub countries: Vec<String>,
}

// == Queries ==
impl Database {
    /// Lists breeds matching `filter`.
    ///
    /// Breeds without a country or group id are excluded by the joins.
    /// Breeds missing the sort value come last ascending and first descending.
    pub fn list_dogs(&self, filter: &DogFilter) -> Result<Vec<DogRow>> {
        let sql = format!(
            "SELECT D.Name, D.Rank, C.Country, G.BreedGroup, D.Size, D.Barkiness, \
                    D.MinLifespan, D.MaxLifespan \
             FROM Dogs AS D \
             JOIN Countries AS C ON D.CountryId = C.Id \
             JOIN Groups AS G ON D.BreedGroupId = G.Id \
             WHERE (?1 IS NULL OR C.Country = ?1) \
               AND (?2 IS NULL OR D.Size = ?2) \
               AND (?3 IS NULL OR G.BreedGroup = ?3) \
               AND (?4 IS NULL OR D.Barkiness = ?4) \
             ORDER BY {column} IS NULL {order}, {column} {order}, D.Id \
             LIMIT ?5",
            column = filter.sort.column(),
            order = filter.order.keyword()
        );

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(
                params![
                    filter.country,
                    filter.size,
                    filter.breed_group,
                    filter.barkiness,
                    filter.limit
                ],
                DogRow::from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Aggregates breeds per group: distinct breed count and rounded averages.
    ///
    /// Groups whose sort aggregate is NULL are left out; at most
    /// [`GROUP_LIMIT`] groups are returned.
    pub fn group_dogs(&self, grouping: &Grouping) -> Result<Vec<GroupRow>> {
        let key = grouping.group_by.key_column();
        let sql = format!(
            "SELECT {key}, COUNT(DISTINCT D.Name) AS Number, \
                    ROUND(AVG(D.Rank), 2) AS AvgRank, \
                    ROUND(AVG(D.MinLifespan), 2) AS AvgMinLifespan, \
                    ROUND(AVG(D.MaxLifespan), 2) AS AvgMaxLifespan \
             FROM Dogs AS D {join} \
             GROUP BY {key} \
             HAVING {aggregate} IS NOT NULL \
             ORDER BY {alias} {order}, {key} \
             LIMIT ?1",
            key = key,
            join = grouping.group_by.join(),
            aggregate = grouping.sort.aggregate(),
            alias = grouping.sort.alias(),
            order = grouping.order.keyword(),
        );

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![GROUP_LIMIT], GroupRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Sorted distinct values for every listing filter.
    pub fn filter_options(&self) -> Result<FilterOptions> {
        let conn = self.connect()?;
        let distinct = |sql: &str| -> Result<Vec<String>> {
            let mut stmt = conn.prepare(sql)?;
            let values = stmt
                .query_map([], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<String>>>()?;
            Ok(values)
        };

        Ok(FilterOptions {
            barkiness: distinct(
                "SELECT DISTINCT Barkiness FROM Dogs WHERE Barkiness IS NOT NULL ORDER BY Barkiness",
            )?,
            sizes: distinct("SELECT DISTINCT Size FROM Dogs WHERE Size IS NOT NULL ORDER BY Size")?,
            breed_groups: distinct("SELECT DISTINCT BreedGroup FROM Groups ORDER BY BreedGroup")?,
            countries: distinct("SELECT DISTINCT Country FROM Countries ORDER BY Country")?,
        })
    }
}
