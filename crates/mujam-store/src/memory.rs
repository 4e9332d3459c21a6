use mujam_core::{Entry, KeywordStore, NewEntry, StoreError};

/// Vec-backed store with the same observable semantics as the SQLite one.
/// No persistence; storage order is insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeywordStore for MemoryStore {
    fn exists(&self, keyword: &str) -> Result<bool, StoreError> {
        Ok(self.entries.iter().any(|e| e.keyword == keyword))
    }

    fn get(&self, keyword: &str) -> Result<Option<Entry>, StoreError> {
        Ok(self.entries.iter().find(|e| e.keyword == keyword).cloned())
    }

    fn insert_if_absent(&mut self, entry: NewEntry) -> Result<Entry, StoreError> {
        // single mutation point, so the check and the push cannot be split
        if self.exists(&entry.keyword)? {
            return Err(StoreError::DuplicateKeyword(entry.keyword));
        }

        let id = self.entries.last().map_or(1, |e| e.id + 1);
        let entry = Entry {
            id,
            keyword: entry.keyword,
            meaning: entry.meaning,
            example: entry.example,
            note: entry.note,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn fetch_by_prefix(&self, letter: &str) -> Result<Vec<Entry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.keyword.starts_with(letter))
            .cloned()
            .collect())
    }

    fn all_entries(&self) -> Result<Vec<Entry>, StoreError> {
        Ok(self.entries.clone())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(keyword: &str) -> NewEntry {
        NewEntry {
            keyword: keyword.to_string(),
            meaning: "m".to_string(),
            example: "e".to_string(),
            note: None,
        }
    }

    #[test]
    fn duplicate_insert_fails_and_count_is_unchanged() {
        let mut store = MemoryStore::new();
        store.insert_if_absent(new_entry("باب")).unwrap();

        let err = store.insert_if_absent(new_entry("باب")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKeyword(k) if k == "باب"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn fetch_by_prefix_partitions_entries() {
        let mut store = MemoryStore::new();
        for k in ["باب", "بيت", "تفاح"] {
            store.insert_if_absent(new_entry(k)).unwrap();
        }

        let ba: Vec<_> = store
            .fetch_by_prefix("ب")
            .unwrap()
            .into_iter()
            .map(|e| e.keyword)
            .collect();
        assert_eq!(ba.len(), 2);
        assert!(ba.contains(&"باب".to_string()));
        assert!(ba.contains(&"بيت".to_string()));

        let ta: Vec<_> = store
            .fetch_by_prefix("ت")
            .unwrap()
            .into_iter()
            .map(|e| e.keyword)
            .collect();
        assert_eq!(ta, vec!["تفاح".to_string()]);
    }

    #[test]
    fn storage_order_is_insertion_order() {
        let mut store = MemoryStore::new();
        for k in ["بيت", "باب"] {
            store.insert_if_absent(new_entry(k)).unwrap();
        }
        let keywords: Vec<_> = store
            .all_entries()
            .unwrap()
            .into_iter()
            .map(|e| e.keyword)
            .collect();
        assert_eq!(keywords, vec!["بيت".to_string(), "باب".to_string()]);
    }
}
