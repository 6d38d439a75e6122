//! Ordered key/value metadata.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Key/value metadata attached to the document, a stream, or a chapter.
///
/// Keys are unique and kept in insertion order so that writing a parsed
/// document is deterministic. Every string is an ordinary key: there are no
/// reserved or implicit entries. Equality ignores ordering.
///
/// Lookups go through a hash index, so building a map from `n` tags is
/// linear in `n`.
#[derive(Clone, Default)]
pub struct Tags {
    entries: Vec<(String, String)>,
    /// Position of each key in `entries`.
    index: HashMap<String, usize>,
}

impl Tags {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, returning the previous value for `key`.
    ///
    /// A replaced key keeps its original position.
    ///
    /// # Example
    /// ```
    /// use ffmeta::Tags;
    ///
    /// let mut tags = Tags::new();
    /// assert_eq!(tags.insert("title", "Draft"), None);
    /// assert_eq!(tags.insert("title", "Final"), Some("Draft".to_string()));
    /// assert_eq!(tags.get("title"), Some("Final"));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Removes `key`, returning its value. Later entries keep their
    /// relative order.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let i = self.index.remove(key)?;
        let (_, value) = self.entries.remove(i);
        for pos in self.index.values_mut() {
            if *pos > i {
                *pos -= 1;
            }
        }
        Some(value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl fmt::Debug for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for Tags {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Tags {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Self::new();
        tags.extend(iter);
        tags
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Tags {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Tags {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Tags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagsVisitor;

        impl<'de> Visitor<'de> for TagsVisitor {
            type Value = Tags;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Tags, A::Error> {
                let mut tags = Tags::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    tags.insert(k, v);
                }
                Ok(tags)
            }
        }

        deserializer.deserialize_map(TagsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let tags: Tags = [("b", "1"), ("a", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(tags.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut tags = Tags::new();
        tags.insert("a", "1");
        tags.insert("b", "2");
        assert_eq!(tags.insert("a", "3"), Some("1".to_string()));
        assert_eq!(tags.iter().collect::<Vec<_>>(), [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left: Tags = [("a", "1"), ("b", "2")].into_iter().collect();
        let right: Tags = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(left, right);

        let different: Tags = [("a", "1"), ("b", "3")].into_iter().collect();
        assert_ne!(left, different);
    }

    #[test]
    fn test_reserved_looking_keys_are_plain() {
        let mut tags = Tags::new();
        assert!(!tags.contains_key("__proto__"));
        assert!(tags.get("constructor").is_none());

        tags.insert("__proto__", "value");
        tags.insert("constructor", "other");
        assert_eq!(tags.get("__proto__"), Some("value"));
        assert_eq!(tags.get("constructor"), Some("other"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut tags: Tags = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(tags.remove("a"), Some("1".to_string()));
        assert_eq!(tags.remove("a"), None);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut tags: Tags = [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]
            .into_iter()
            .collect();
        tags.remove("b");
        tags.insert("c", "30");
        tags.insert("e", "5");

        assert_eq!(tags.get("a"), Some("1"));
        assert_eq!(tags.get("c"), Some("30"));
        assert_eq!(tags.get("d"), Some("4"));
        assert_eq!(
            tags.iter().collect::<Vec<_>>(),
            [("a", "1"), ("c", "30"), ("d", "4"), ("e", "5")]
        );
    }

    #[test]
    fn test_many_keys_stay_linear() {
        let n = 100_000;
        let started = std::time::Instant::now();
        let tags: Tags = (0..n).map(|i| (format!("k{i}"), "v")).collect();
        let copy = tags.clone();

        assert_eq!(tags.len(), n);
        assert_eq!(tags.get("k99999"), Some("v"));
        assert_eq!(tags, copy);
        assert!(
            started.elapsed() < std::time::Duration::from_secs(5),
            "building and comparing {n} tags took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn test_debug_prints_as_map() {
        let tags: Tags = [("a", "1")].into_iter().collect();
        assert_eq!(format!("{tags:?}"), r#"{"a": "1"}"#);
    }
}
