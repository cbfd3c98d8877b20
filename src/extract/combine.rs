//! Positional join of per-breed partial records.

use crate::error::{DogError, Result};
use crate::models::{BreedRecord, FactRecord, VitalStat};

/// Zips `vitals[i]` with `facts[i]`.
///
/// Both lists must describe the same breeds in the same order. A length
/// mismatch means the extractors drifted apart and is reported instead of
/// silently truncating.
pub fn combine(vitals: Vec<VitalStat>, facts: Vec<FactRecord>) -> Result<Vec<BreedRecord>> {
    if facts.len() < vitals.len() {
        return Err(DogError::DataInconsistency(format!(
            "fact record index {} out of range: {} vital stats but {} fact records",
            facts.len(),
            vitals.len(),
            facts.len()
        )));
    }
    if facts.len() > vitals.len() {
        return Err(DogError::DataInconsistency(format!(
            "{} fact records have no vital stat",
            facts.len() - vitals.len()
        )));
    }

    Ok(vitals
        .into_iter()
        .zip(facts)
        .map(|(vital, fact)| BreedRecord::from_parts(vital, fact))
        .collect())
}
