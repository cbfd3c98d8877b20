//! Breed directory parsing.

use std::collections::HashMap;

use scraper::Html;

use super::selector;
use crate::error::{DogError, Result};
use crate::models::BreedLink;

/// Reads every linked list item of the A-Z section, in document order.
///
/// The item's trimmed text is the breed name and each link's `href` its URL.
/// A name seen again keeps its first position but takes the later URL.
pub fn extract_index(html: &str) -> Result<Vec<BreedLink>> {
    let document = Html::parse_document(html);
    let section_sel = selector("section#tabAtoZ")?;
    let item_sel = selector("li")?;
    let link_sel = selector("a")?;

    let section = document
        .select(&section_sel)
        .next()
        .ok_or_else(|| DogError::parse("breed directory", "section#tabAtoZ"))?;

    let mut links: Vec<BreedLink> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for item in section.select(&item_sel) {
        let name = item.text().collect::<String>().trim().to_string();

        for link in item.select(&link_sel) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };

            match positions.get(&name) {
                Some(&pos) => links[pos].url = href.to_string(),
                None => {
                    positions.insert(name.clone(), links.len());
                    links.push(BreedLink {
                        name: name.clone(),
                        url: href.to_string(),
                    });
                }
            }
        }
    }

    Ok(links)
}
