// ABOUTME: Row type produced by table extraction: an ordered column-name to cell-text map.
// ABOUTME: Keys are unique and keep insertion order; values are raw trimmed text.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One extracted table row.
///
/// Behaves like a small insertion-ordered map. Tables carry a few dozen
/// columns at most, so lookups scan linearly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value. Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value for `key`, or an empty string when the column is absent.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.cells.iter().position(|(k, _)| k == key)?;
        Some(self.cells.remove(pos).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (k, v) in &self.cells {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order_and_replaces_in_place() {
        let mut row = Row::new();
        row.insert("Team", "Duke");
        row.insert("Conf", "ACC");
        row.insert("Team", "UNC");

        let keys: Vec<_> = row.keys().collect();
        assert_eq!(keys, vec!["Team", "Conf"]);
        assert_eq!(row.get("Team"), Some("UNC"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn missing_keys() {
        let row: Row = [("Team", "Duke")].into_iter().collect();
        assert_eq!(row.get("Seed"), None);
        assert_eq!(row.get_or_empty("Seed"), "");
        assert!(!row.contains_key("Seed"));
    }

    #[test]
    fn remove_drops_key() {
        let mut row: Row = [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();
        assert_eq!(row.remove("B"), Some("2".to_string()));
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(row.remove("B"), None);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let row: Row = [("Zeta", "1"), ("Alpha", "2")].into_iter().collect();
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Zeta":"1","Alpha":"2"}"#);
    }
}
