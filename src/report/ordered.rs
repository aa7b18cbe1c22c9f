// src/report/ordered.rs
// =============================================================================
// An insertion-ordered string-keyed map.
//
// Reports are small (a few dozen keys at most), so a Vec of pairs with a
// linear key lookup is all we need. Re-inserting a key replaces its value
// but keeps its original position.
// =============================================================================

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedReport<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedReport<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedReport<V> {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns the value that was replaced, if the key already existed
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> IntoIterator for OrderedReport<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// Serializes as a JSON object, keys in insertion order
impl<V: Serialize> Serialize for OrderedReport<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_insertion_order() {
        let mut report = OrderedReport::new();
        report.insert("zebra".to_string(), 1);
        report.insert("apple".to_string(), 2);
        report.insert("mango".to_string(), 3);
        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut report = OrderedReport::new();
        report.insert("a".to_string(), 1);
        report.insert("b".to_string(), 2);
        assert_eq!(report.insert("a".to_string(), 10), Some(1));
        assert_eq!(report.len(), 2);
        assert_eq!(report.get("a"), Some(&10));
        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_serializes_in_order() {
        let mut report = OrderedReport::new();
        report.insert("second".to_string(), vec!["x"]);
        report.insert("first".to_string(), vec![]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"second":["x"],"first":[]}"#);
    }
}
