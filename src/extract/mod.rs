//! Extract Module
//!
//! Page-specific parsers that turn scraped HTML into breed records.
//!
//! - `index` - breed directory page -> ordered name/URL pairs
//! - `vitals` - breed page stats block -> one summary value
//! - `facts` - breed page "FACTS" text -> named fact record
//! - `combine` - positional zip of vitals and facts

mod combine;
mod facts;
mod index;
mod vitals;


use scraper::Selector;

use crate::error::{DogError, Result};

pub use combine::combine;
pub use facts::{extract_facts, normalize_fact_text, split_lifespan};
pub use index::extract_index;
pub use vitals::{extract_vitals, ValueCellPick};

/// Compiles a CSS selector.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| DogError::Internal(format!("bad selector {}: {}", css, e)))
}
