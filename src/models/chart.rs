//! Bar chart series for query results.
//!
//! Only the data is produced here; drawing is left to whatever consumes the
//! JSON.

use serde::Serialize;

use crate::db::{DogRow, DogSort, GroupRow, GroupSort};

/// One bar per result row: `x` holds the labels, `y` the plotted values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
}

impl BarChart {
    /// Plots each breed's value for the column the listing is sorted by.
    pub fn for_dogs(rows: &[DogRow], sort: DogSort) -> Self {
        let value = |row: &DogRow| match sort {
            DogSort::Rank => row.rank,
            DogSort::MinLife => row.min_lifespan,
            DogSort::MaxLife => row.max_lifespan,
        };

        Self {
            x: rows.iter().map(|r| r.name.clone()).collect(),
            y: rows.iter().map(|r| value(r).map(|v| v as f64)).collect(),
        }
    }

    /// Plots each group's aggregate for the column the query is sorted by.
    pub fn for_groups(rows: &[GroupRow], sort: GroupSort) -> Self {
        let value = |row: &GroupRow| match sort {
            GroupSort::Number => Some(row.number as f64),
            GroupSort::Rank => row.avg_rank,
            GroupSort::MinLife => row.avg_min_lifespan,
            GroupSort::MaxLife => row.avg_max_lifespan,
        };

        Self {
            x: rows.iter().map(|r| r.key.clone().unwrap_or_default()).collect(),
            y: rows.iter().map(value).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(name: &str, rank: Option<i64>, min: i64, max: i64) -> DogRow {
        DogRow {
            name: name.to_string(),
            rank,
            country: "France".to_string(),
            breed_group: "Toy".to_string(),
            size: Some("Small".to_string()),
            barkiness: Some("Low".to_string()),
            min_lifespan: Some(min),
            max_lifespan: Some(max),
        }
    }

    #[test]
    fn test_dog_chart_follows_sort_column() {
        let rows = vec![dog("A", Some(3), 10, 12), dog("B", None, 8, 9)];

        let chart = BarChart::for_dogs(&rows, DogSort::Rank);
        assert_eq!(chart.x, vec!["A", "B"]);
        assert_eq!(chart.y, vec![Some(3.0), None]);

        let chart = BarChart::for_dogs(&rows, DogSort::MinLife);
        assert_eq!(chart.y, vec![Some(10.0), Some(8.0)]);

        let chart = BarChart::for_dogs(&rows, DogSort::MaxLife);
        assert_eq!(chart.y, vec![Some(12.0), Some(9.0)]);
    }

    #[test]
    fn test_group_chart_follows_sort_column() {
        let rows = vec![GroupRow {
            key: Some("Toy".to_string()),
            number: 4,
            avg_rank: Some(12.5),
            avg_min_lifespan: Some(11.0),
            avg_max_lifespan: None,
        }];

        assert_eq!(BarChart::for_groups(&rows, GroupSort::Number).y, vec![Some(4.0)]);
        assert_eq!(BarChart::for_groups(&rows, GroupSort::Rank).y, vec![Some(12.5)]);
        assert_eq!(BarChart::for_groups(&rows, GroupSort::MinLife).y, vec![Some(11.0)]);
        assert_eq!(BarChart::for_groups(&rows, GroupSort::MaxLife).y, vec![None]);
        assert_eq!(BarChart::for_groups(&rows, GroupSort::Number).x, vec!["Toy"]);
    }
}
