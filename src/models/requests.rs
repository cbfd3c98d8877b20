//! Request DTOs for the query API
//!
//! Query-string parameters arrive as plain strings and are converted into the
//! closed query types of the `db` module, rejecting unrecognized names.

use serde::Deserialize;

use crate::db::{DogFilter, GroupBy, GroupSort, Grouping, SortOrder, DEFAULT_DOG_LIMIT};
use crate::error::{DogError, Result};

/// Query string for GET /dogs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DogsQuery {
    /// `rank`, `min_life` or `max_life`
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub dir: Option<String>,
    /// Country of origin, or `All`
    pub region: Option<String>,
    pub size: Option<String>,
    pub breed_group: Option<String>,
    /// Bark level, or `All bark levels`
    pub barkiness: Option<String>,
    pub limit: Option<String>,
    pub plot: Option<String>,
}

impl DogsQuery {
    /// Converts to a listing filter.
    pub fn to_filter(&self) -> Result<DogFilter> {
        let limit = match self.limit.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_DOG_LIMIT,
            Some(raw) => raw
                .parse()
                .map_err(|_| DogError::InvalidQuery(format!("limit '{}' is not a count", raw)))?,
        };

        Ok(DogFilter {
            country: filter_value(&self.region),
            size: filter_value(&self.size),
            breed_group: filter_value(&self.breed_group),
            barkiness: filter_value(&self.barkiness),
            sort: parse_or_default(&self.sort)?,
            order: parse_or_default(&self.dir)?,
            limit,
        })
    }

    pub fn wants_plot(&self) -> bool {
        is_truthy(&self.plot)
    }
}

/// Query string for GET /groupings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupingsQuery {
    /// `breed_group`, `origin`, `size` or `barkiness`
    pub group: Option<String>,
    /// `number`, `rank`, `min_life` or `max_life`
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub plot: Option<String>,
}

impl GroupingsQuery {
    /// Converts to a grouping; the group key is required.
    pub fn to_grouping(&self) -> Result<Grouping> {
        let group_by: GroupBy = self
            .group
            .as_deref()
            .ok_or_else(|| DogError::InvalidQuery("group is required".to_string()))?
            .parse()?;

        Ok(Grouping {
            group_by,
            sort: parse_or_default::<GroupSort>(&self.sort)?,
            order: parse_or_default::<SortOrder>(&self.dir)?,
        })
    }

    pub fn wants_plot(&self) -> bool {
        is_truthy(&self.plot)
    }
}

/// Filter value, or `None` when the caller asked for everything.
pub fn filter_value(raw: &Option<String>) -> Option<String> {
    let value = raw.as_deref()?.trim();
    if value.is_empty()
        || value.eq_ignore_ascii_case("all")
        || value.eq_ignore_ascii_case("all bark levels")
    {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_or_default<T>(raw: &Option<String>) -> Result<T>
where
    T: std::str::FromStr<Err = DogError> + Default,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(value) => value.parse(),
    }
}

fn is_truthy(raw: &Option<String>) -> bool {
    match raw.as_deref().map(str::trim) {
        None | Some("") => false,
        Some(value) => !matches!(value.to_ascii_lowercase().as_str(), "false" | "0" | "off" | "no"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DogSort;

    #[test]
    fn test_dogs_query_defaults() {
        let filter = DogsQuery::default().to_filter().unwrap();
        assert_eq!(filter, DogFilter::default());
    }

    #[test]
    fn test_dogs_query_deserialize() {
        let query: DogsQuery = serde_json::from_str(
            r#"{"sort":"max_life","dir":"desc","region":"France","size":"All",
                "breed_group":"Toy","barkiness":"All bark levels","limit":"5","plot":"on"}"#,
        )
        .unwrap();

        let filter = query.to_filter().unwrap();
        assert_eq!(filter.sort, DogSort::MaxLife);
        assert_eq!(filter.order, SortOrder::Desc);
        assert_eq!(filter.country.as_deref(), Some("France"));
        assert_eq!(filter.size, None);
        assert_eq!(filter.breed_group.as_deref(), Some("Toy"));
        assert_eq!(filter.barkiness, None);
        assert_eq!(filter.limit, 5);
        assert!(query.wants_plot());
    }

    #[test]
    fn test_dogs_query_rejects_bad_values() {
        let query = DogsQuery {
            sort: Some("Name".to_string()),
            ..DogsQuery::default()
        };
        assert!(matches!(query.to_filter(), Err(DogError::InvalidQuery(_))));

        let query = DogsQuery {
            limit: Some("ten".to_string()),
            ..DogsQuery::default()
        };
        assert!(query.to_filter().is_err());
    }

    #[test]
    fn test_groupings_query_requires_group() {
        assert!(GroupingsQuery::default().to_grouping().is_err());

        let query = GroupingsQuery {
            group: Some("origin".to_string()),
            ..GroupingsQuery::default()
        };
        let grouping = query.to_grouping().unwrap();
        assert_eq!(grouping.group_by, GroupBy::Origin);
        assert_eq!(grouping.sort, GroupSort::Number);
        assert_eq!(grouping.order, SortOrder::Asc);
        assert!(!query.wants_plot());
    }

    #[test]
    fn test_filter_value() {
        assert_eq!(filter_value(&None), None);
        assert_eq!(filter_value(&Some("All".to_string())), None);
        assert_eq!(filter_value(&Some(" ".to_string())), None);
        assert_eq!(filter_value(&Some("Small".to_string())), Some("Small".to_string()));
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&Some("true".to_string())));
        assert!(!is_truthy(&Some("false".to_string())));
        assert!(!is_truthy(&None));
    }
}
