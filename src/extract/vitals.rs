//! Breed page stats block parsing.

use std::str::FromStr;

use scraper::Html;
use serde::{Deserialize, Serialize};

use super::selector;
use crate::error::{DogError, Result};

/// Which value cell of the stats block is kept.
///
/// Breed pages carry several value cells; only one becomes the breed's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueCellPick {
    /// Keep the first cell
    #[default]
    First,
    /// Keep the last cell
    Last,
}

impl FromStr for ValueCellPick {
    type Err = DogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(ValueCellPick::First),
            "last" => Ok(ValueCellPick::Last),
            other => Err(DogError::InvalidQuery(format!(
                "unknown value cell pick '{}', expected first or last",
                other
            ))),
        }
    }
}

/// Returns the lower-cased, trimmed text of one `.right` cell inside the
/// `div.stats.clear` block.
pub fn extract_vitals(html: &str, pick: ValueCellPick) -> Result<String> {
    let document = Html::parse_document(html);
    let stats_sel = selector("div.stats.clear")?;
    let value_sel = selector(".right")?;

    let stats = document
        .select(&stats_sel)
        .next()
        .ok_or_else(|| DogError::parse("breed page", "div.stats.clear"))?;

    let mut cells = stats.select(&value_sel);
    let cell = match pick {
        ValueCellPick::First => cells.next(),
        ValueCellPick::Last => cells.last(),
    }
    .ok_or_else(|| DogError::parse("breed page", "stats value cell"))?;

    Ok(cell.text().collect::<String>().trim().to_lowercase())
}
