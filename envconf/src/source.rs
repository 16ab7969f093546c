//! Key/value sources

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// An already materialized mapping of keys to raw values.
///
/// Lookups are exact and case-sensitive.
pub trait Source {
    /// Returns the raw value for `key`, if present.
    fn get(&self, key: &str) -> Option<&str>;
}

impl<K, V, S> Source for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(AsRef::as_ref)
    }
}

impl<K, V> Source for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(AsRef::as_ref)
    }
}

/// Pairs are searched from the end, so a later duplicate wins.
impl<K, V> Source for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get(&self, key: &str) -> Option<&str> {
        self.iter()
            .rev()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K, V, const N: usize> Source for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get(&self, key: &str) -> Option<&str> {
        Source::get(self.as_slice(), key)
    }
}

impl<K, V> Source for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get(&self, key: &str) -> Option<&str> {
        Source::get(self.as_slice(), key)
    }
}

impl<T: Source + ?Sized> Source for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

/// Snapshot of the process environment.
///
/// Entries whose key or value is not valid UTF-8 are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Captures the current process environment.
    pub fn capture() -> Self {
        let mut vars = HashMap::new();
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                (Ok(key), Err(_)) => log::warn!("skipping {}: value is not valid UTF-8", key),
                (Err(key), _) => log::warn!("skipping {:?}: key is not valid UTF-8", key),
            }
        }
        log::debug!("captured {} environment variables", vars.len());
        Self { vars }
    }

    /// Sets `key`, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Source for Environment {
    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl IntoIterator for Environment {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::default();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Environment {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_is_case_sensitive() {
        let map: HashMap<String, String> = HashMap::from([
            ("value".to_string(), "lower".to_string()),
            ("VALUE".to_string(), "upper".to_string()),
        ]);
        assert_eq!(Source::get(&map, "value"), Some("lower"));
        assert_eq!(Source::get(&map, "VALUE"), Some("upper"));
        assert_eq!(Source::get(&map, "Value"), None);
    }

    #[test]
    fn test_btree_map() {
        let map = BTreeMap::from([("A", "1")]);
        assert_eq!(Source::get(&map, "A"), Some("1"));
    }

    #[test]
    fn test_pairs_last_duplicate_wins() {
        let pairs = [("A", "1"), ("B", "2"), ("A", "3")];
        assert_eq!(Source::get(&pairs, "A"), Some("3"));
        assert_eq!(Source::get(&pairs, "B"), Some("2"));
        assert_eq!(Source::get(&pairs, "C"), None);
    }

    #[test]
    fn test_empty_value_is_present() {
        let pairs = vec![("A".to_string(), String::new())];
        assert_eq!(Source::get(&pairs, "A"), Some(""));
    }

    #[test]
    fn test_environment_layering() {
        let mut env: Environment = [("HOST", "localhost"), ("PORT", "80")].into_iter().collect();
        env.extend([("PORT", "8080")]);
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("PORT"), Some("8080"));
        assert_eq!(env.get("HOST"), Some("localhost"));
    }

    #[test]
    fn test_capture_sees_process_environment() {
        let env = Environment::capture();
        let path = std::env::var("PATH").ok();
        assert_eq!(env.get("PATH"), path.as_deref());
    }
}
