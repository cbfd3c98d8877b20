//! Fact block normalization.
//!
//! Breed pages carry a free-text block such as
//!
//! ```text
//! FAST FACTS:
//! Hypoallergenic: Y
//! Original Pastime: Herding
//! Country of Origin: France, Europe
//! Breed Group: Herding
//! Life Span: 10-12 years
//! Size: Medium
//! Barkiness: Likes to be vocal
//! ```
//!
//! Field positions, not labels, decide meaning.

use scraper::Html;

use super::selector;
use crate::error::{DogError, Result};
use crate::models::FactRecord;

const FACTS_MARKER: &str = "FACTS";

/// Number of fields kept once the leading and hypoallergenic fields are gone.
const FACT_FIELDS: usize = 6;

// Field positions after trimming to `FACT_FIELDS`.
const COUNTRY: usize = 1;
const GROUP: usize = 2;
const LIFESPAN: usize = 3;

/// Parses the first `div.body.divider` block that holds a fact list.
///
/// Each block is processed on its own; blocks without a "FACTS" marker
/// followed by a colon are skipped.
pub fn extract_facts(html: &str) -> Result<FactRecord> {
    let document = Html::parse_document(html);
    let block_sel = selector("div.body.divider")?;

    for block in document.select(&block_sel) {
        let text = block.text().collect::<String>();
        if let Some(record) = normalize_fact_text(text.trim())? {
            return Ok(record);
        }
    }

    Err(DogError::parse("breed page", "FACTS block"))
}

/// Normalizes one block's text.
///
/// Returns `Ok(None)` when the text has no "FACTS" marker or no colon after it.
pub fn normalize_fact_text(text: &str) -> Result<Option<FactRecord>> {
    let Some(start) = text.find(FACTS_MARKER) else {
        return Ok(None);
    };
    let Some((_, list)) = text[start..].split_once(':') else {
        return Ok(None);
    };

    let mut fields: Vec<String> = list.split('\n').map(line_value).collect();

    if fields.get(1).map(String::as_str) == Some("Y") {
        fields.remove(1);
    }
    if !fields.is_empty() {
        fields.remove(0);
    }
    if fields.len() < FACT_FIELDS {
        return Err(DogError::parse(
            "breed page",
            format!("fact fields (found {} of {})", fields.len(), FACT_FIELDS),
        ));
    }
    fields.truncate(FACT_FIELDS);

    fields[GROUP] = clean_group(&fields[GROUP]);
    fields[COUNTRY] = clean_origin(&fields[COUNTRY]);

    let lifespan = fields.remove(LIFESPAN);
    let (min_lifespan, max_lifespan) = split_lifespan(&lifespan)?;

    let [pastime, country, breed_group, size, barkiness]: [String; 5] = fields
        .try_into()
        .map_err(|_| DogError::Internal("fact field count changed".to_string()))?;

    Ok(Some(FactRecord {
        pastime,
        country,
        breed_group,
        size,
        barkiness,
        min_lifespan,
        max_lifespan,
    }))
}

/// Splits a range like "10-12 years" (or "10-12 year") into its two endpoints.
pub fn split_lifespan(text: &str) -> Result<(String, String)> {
    let range = text.trim();
    let range = range
        .strip_suffix("years")
        .or_else(|| range.strip_suffix("year"))
        .unwrap_or(range)
        .trim();

    match range.split('-').map(str::trim).collect::<Vec<_>>().as_slice() {
        [min, max] if !min.is_empty() && !max.is_empty() => {
            Ok((min.to_string(), max.to_string()))
        }
        _ => Err(DogError::parse(
            "breed page",
            format!("lifespan range in '{}'", text),
        )),
    }
}

/// Text after the line's first colon, trimmed; empty if there is no colon.
fn line_value(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

fn clean_group(group: &str) -> String {
    match group {
        "Working Dog" => "Working".to_string(),
        other => other.to_string(),
    }
}

fn clean_origin(origin: &str) -> String {
    // known upstream data error
    let origin = if origin == "Herding" { "Hungary" } else { origin };

    let origin = match origin.find([',', '/', '&']) {
        Some(cut) => origin[..cut].trim(),
        None => origin,
    };

    match origin {
        "Border of Scotland and England" => "Scotland".to_string(),
        other => other.to_string(),
    }
}
