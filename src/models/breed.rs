//! Breed records produced by the scrape pipeline.

use serde::{Deserialize, Serialize};

/// One entry of the breed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedLink {
    pub name: String,
    /// Detail page URL as written in the directory, relative or absolute
    pub url: String,
}

/// Normalized contents of a breed page's fact block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    pub pastime: String,
    pub country: String,
    pub breed_group: String,
    pub size: String,
    pub barkiness: String,
    pub min_lifespan: String,
    pub max_lifespan: String,
}

/// A breed's full record, ready for loading.
///
/// Field order matches the `Dogs` table: name, rank, pastime, country, group,
/// size, barkiness, min and max lifespan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRecord {
    pub name: String,
    /// Summary value from the breed page's stats block
    pub rank: String,
    pub pastime: String,
    pub country: String,
    pub breed_group: String,
    pub size: String,
    pub barkiness: String,
    pub min_lifespan: String,
    pub max_lifespan: String,
}

/// Name and summary value read from a breed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalStat {
    pub name: String,
    pub value: String,
}

impl BreedRecord {
    /// Joins a breed's vital stat with its fact record.
    pub fn from_parts(vital: VitalStat, facts: FactRecord) -> Self {
        Self {
            name: vital.name,
            rank: vital.value,
            pastime: facts.pastime,
            country: facts.country,
            breed_group: facts.breed_group,
            size: facts.size,
            barkiness: facts.barkiness,
            min_lifespan: facts.min_lifespan,
            max_lifespan: facts.max_lifespan,
        }
    }
}
