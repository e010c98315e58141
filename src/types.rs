/// One `key = value` pair read from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// 1-based line the pair was read from.
    pub line: usize,
}

/// Parsed configuration file: keys mapped to cleaned values.
///
/// Iteration follows the order in which each key first appeared. Inserting a
/// key that is already present replaces its value and line in place, so the
/// last occurrence in the file wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMapping {
    entries: Vec<Entry>,
}

impl FileMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning the previous value for `key` if there was one.
    pub fn insert(&mut self, key: String, value: String, line: usize) -> Option<String> {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => {
                existing.line = line;
                Some(std::mem::replace(&mut existing.value, value))
            }
            None => {
                self.entries.push(Entry { key, value, line });
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).map(|e| e.value.as_str())
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FileMapping {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_appearance_order() {
        let mut m = FileMapping::new();
        m.insert("b".into(), "1".into(), 1);
        m.insert("a".into(), "2".into(), 2);
        let keys: Vec<&str> = m.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn duplicate_key_last_wins_in_place() {
        let mut m = FileMapping::new();
        m.insert("port".into(), "1".into(), 1);
        m.insert("host".into(), "x".into(), 2);
        let previous = m.insert("port".into(), "2".into(), 3);
        assert_eq!(previous.as_deref(), Some("1"));
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("port"), Some("2"));
        assert_eq!(m.entry("port").unwrap().line, 3);
        assert_eq!(m.iter().next().unwrap().key, "port");
    }

    #[test]
    fn missing_key() {
        let m = FileMapping::new();
        assert!(m.is_empty());
        assert_eq!(m.get("nope"), None);
    }
}
