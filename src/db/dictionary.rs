//! Surrogate ids for country and breed group names.

use std::collections::HashMap;

/// Assigns ids 1, 2, 3, ... to names in first-seen order.
#[derive(Debug, Clone, Default)]
pub(crate) struct NameDictionary {
    name_to_id: HashMap<String, i64>,
    names: Vec<String>,
}

impl NameDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from names in iteration order.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut dict = Self::new();
        for name in names {
            dict.encode(name);
        }
        dict
    }

    /// Returns the id for `name`, assigning the next one if it is new.
    pub fn encode(&mut self, name: &str) -> i64 {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        self.names.push(name.to_string());
        let id = self.names.len() as i64;
        self.name_to_id.insert(name.to_string(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<i64> {
        self.name_to_id.get(name).copied()
    }

    /// (id, name) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (i as i64 + 1, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ids_follow_first_occurrence() {
        let dict = NameDictionary::from_names(["France", "Japan", "France", "Germany", "Japan"]);

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.id("France"), Some(1));
        assert_eq!(dict.id("Japan"), Some(2));
        assert_eq!(dict.id("Germany"), Some(3));
        assert_eq!(dict.id("Peru"), None);
    }

    #[test]
    fn test_iter_in_id_order() {
        let dict = NameDictionary::from_names(["b", "a", "b", "c"]);
        let pairs: Vec<_> = dict.iter().collect();
        assert_eq!(pairs, vec![(1, "b"), (2, "a"), (3, "c")]);
    }

    proptest! {
        // Ids are exactly 1..=K and a repeated name always maps to its first id.
        #[test]
        fn prop_ids_dense_and_stable(names in prop::collection::vec("[a-d]{1,2}", 0..40)) {
            let dict = NameDictionary::from_names(names.iter().map(String::as_str));

            let mut seen: Vec<&str> = Vec::new();
            for name in &names {
                if !seen.contains(&name.as_str()) {
                    seen.push(name);
                }
            }

            prop_assert_eq!(dict.len(), seen.len());
            for (i, name) in seen.iter().enumerate() {
                prop_assert_eq!(dict.id(name), Some(i as i64 + 1));
            }
        }
    }
}
