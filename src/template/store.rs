//! Variable store backing a renderer

use std::fmt::Display;

/// Name-to-text mapping owned by a single renderer
///
/// Entries keep the position of their first insertion. Overwriting a name
/// replaces the value in place, so iteration order only changes when a name
/// is removed and set again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    entries: Vec<(String, String)>,
}

impl VariableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, returning the previous value if any
    pub fn set(&mut self, name: impl Into<String>, value: impl Display) -> Option<String> {
        let name = name.into();
        let value = value.to_string();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Get the text stored under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].1.as_str())
    }

    /// Check whether `name` has been set
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove `name`, returning its value if it was set
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored variables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no variables are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get all variable names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == name)
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for VariableStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<K: Into<String>, V: Display> Extend<(K, V)> for VariableStore {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = VariableStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.get("name"), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut store = VariableStore::new();
        assert_eq!(store.set("name", "John Doe"), None);
        assert_eq!(store.get("name"), Some("John Doe"));
        assert!(store.contains("name"));
        assert!(!store.contains("other"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut store = VariableStore::new();
        store.set("a", 1);
        store.set("b", 2);
        assert_eq!(store.set("a", 3), Some("1".to_string()));
        assert_eq!(store.names(), vec!["a", "b"]);
        assert_eq!(store.get("a"), Some("3"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_values_coerced_to_text() {
        let mut store = VariableStore::new();
        store.set("int", 42);
        store.set("float", 2.5);
        store.set("flag", true);
        assert_eq!(store.get("int"), Some("42"));
        assert_eq!(store.get("float"), Some("2.5"));
        assert_eq!(store.get("flag"), Some("true"));
    }

    #[test]
    fn test_remove_and_reinsert_moves_to_end() {
        let mut store = VariableStore::new();
        store.set("a", "x");
        store.set("b", "y");
        assert_eq!(store.remove("a"), Some("x".to_string()));
        assert_eq!(store.remove("a"), None);
        store.set("a", "z");
        assert_eq!(store.names(), vec!["b", "a"]);
    }

    #[test]
    fn test_collect_from_pairs() {
        let store: VariableStore = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        let pairs: Vec<_> = store.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_clear() {
        let mut store: VariableStore = [("a", "1")].into_iter().collect();
        store.clear();
        assert!(store.is_empty());
    }
}
